//! Crate-level error types.

use std::fmt;

/// Errors produced by the sunset crate.
#[derive(Debug)]
pub enum SunsetError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// A color string that is not `#RRGGBB` or `#AARRGGBB`.
    InvalidColor(String),
    /// Animator set relations that can never be satisfied.
    CyclicSchedule(String),
    /// Failed to encode a frame trace.
    Trace(serde_json::Error),
}

impl fmt::Display for SunsetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::InvalidColor(value) => {
                write!(f, "invalid color {value:?}, expected #AARRGGBB")
            }
            Self::CyclicSchedule(msg) => {
                write!(f, "animator set has cyclic relations: {msg}")
            }
            Self::Trace(e) => write!(f, "trace encoding error: {e}"),
        }
    }
}

impl std::error::Error for SunsetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Trace(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SunsetError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for SunsetError {
    fn from(e: serde_json::Error) -> Self {
        Self::Trace(e)
    }
}
