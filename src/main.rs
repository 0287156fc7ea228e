//! Headless driver: plays scripted taps against the day/night scene on a
//! fixed frame clock and optionally writes a JSON-lines frame trace.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;
use sunset::engine::{SceneCommand, SceneEngine};
use sunset::error::SunsetError;
use sunset::options::Options;
use sunset::util::frame_timing::FrameClock;
use web_time::{Duration, Instant};

#[derive(Debug, Parser)]
#[command(name = "sunset", about = "Play the day/night scene headlessly")]
struct Args {
    /// TOML options file
    #[arg(long)]
    options: Option<PathBuf>,
    /// Tap times in milliseconds from the start, comma separated
    #[arg(long, value_delimiter = ',', default_value = "0")]
    taps: Vec<u64>,
    /// Length of the run in milliseconds
    #[arg(long, default_value_t = 12_000)]
    duration: u64,
    /// Frames per second of the simulated clock
    #[arg(long, default_value_t = 60)]
    fps: u32,
    /// Write one JSON snapshot per frame to this file
    #[arg(long)]
    trace: Option<PathBuf>,
    /// Seed for star-twinkle offsets
    #[arg(long)]
    seed: Option<u64>,
}

fn run(args: &Args) -> Result<(), SunsetError> {
    let mut options = match &args.options {
        Some(path) => Options::load(path)?,
        None => Options::default(),
    };
    if let Some(seed) = args.seed {
        options.animation.twinkle_seed = Some(seed);
    }

    let origin = Instant::now();
    let mut clock = FrameClock::new(args.fps, origin);
    let mut engine = SceneEngine::new(options, origin)?;
    let mut trace = args
        .trace
        .as_deref()
        .map(File::create)
        .transpose()?
        .map(BufWriter::new);

    let mut taps = args.taps.clone();
    taps.sort_unstable();
    let mut pending = taps.into_iter().map(Duration::from_millis).peekable();
    let end = Duration::from_millis(args.duration);

    let mut now = clock.now();
    loop {
        while pending.next_if(|tap| *tap <= clock.elapsed()).is_some() {
            let outcome = engine.execute(SceneCommand::Toggle, now)?;
            log::debug!("tap at frame {}: {outcome:?}", clock.frame());
        }
        let _ = engine.tick(now);
        if let Some(out) = trace.as_mut() {
            serde_json::to_writer(&mut *out, &engine.snapshot(now))?;
            out.write_all(b"\n")?;
        }
        if clock.elapsed() >= end || engine.quit_requested() {
            break;
        }
        now = clock.advance();
    }

    if let Some(mut out) = trace {
        out.flush()?;
    }
    log::info!(
        "played {} frames, {} transitions, ended at {}",
        clock.frame() + 1,
        engine.controller().completed_transitions(),
        engine.controller().phase()
    );
    Ok(())
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    if let Err(e) = run(&args) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
