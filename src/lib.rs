// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Day/night scene animator built on composable property timelines.
//!
//! A tap on the scene plays a sunset or a sunrise. Every transition is a
//! tree of property animators (position, rotation, scale, opacity, sky
//! color) composed with "with", "before" and "after" relations. Taps
//! alternate between two transition styles and are ignored while a
//! transition is running.
//!
//! # Key entry points
//!
//! - [`engine::SceneEngine`] - the frame-driven scene
//! - [`animation::SceneController`] - tap guard, style alternation and phase
//! - [`animation::AnimatorSetBuilder`] - timeline composition
//! - [`options::Options`] - palette, layout, playback and key bindings
//!
//! # Architecture
//!
//! The host forwards [`input::InputEvent`]s and frame instants to the
//! engine. The controller builds a [`animation::Transition`] from the
//! selected [`animation::styles::TransitionStyle`] and plays it with an
//! [`animation::AnimationRunner`], which writes sampled values into the
//! [`scene::Scene`] through [`scene::PropertyTarget`]. Ambient loops (waves,
//! star twinkle) run beside the transitions.

pub mod animation;
pub mod engine;
pub mod error;
pub mod input;
pub mod options;
pub mod scene;
pub mod util;

pub use engine::{SceneCommand, SceneEngine};
pub use error::SunsetError;
