//! Crate-level error types.

use std::fmt;

/// Errors produced by the pancam crate.
///
/// Camera math itself has no failure modes — out-of-range parameters are
/// clamped, never rejected. Errors only arise from preset/pose file I/O.
#[derive(Debug)]
pub enum PancamError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML parsing/serialization failure.
    Parse(String),
}

impl fmt::Display for PancamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for PancamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(_) => None,
        }
    }
}

impl From<std::io::Error> for PancamError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
