//! Crate-level error types.

use std::fmt;

use crate::timeline::TimelineError;

/// Errors produced by the krishi-scene crate.
///
/// The driver and composer never fail at runtime; these cover loading
/// configuration and wiring the scene into a host.
#[derive(Debug)]
pub enum SceneError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Authored timeline violates a segment invariant.
    Timeline(TimelineError),
    /// Browser host failure (missing window, listener registration).
    Host(String),
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Timeline(e) => write!(f, "invalid timeline: {e}"),
            Self::Host(msg) => write!(f, "host error: {msg}"),
        }
    }
}

impl std::error::Error for SceneError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Timeline(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SceneError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<TimelineError> for SceneError {
    fn from(e: TimelineError) -> Self {
        Self::Timeline(e)
    }
}
