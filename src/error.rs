//! Error types for chromaviz

use std::fmt;

use crate::types::{Channel, ColorMode};

/// Result type for chromaviz operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for chromaviz operations
///
/// Every variant is a precondition violation detected at the start of the
/// offending operation; the pipeline has no recovery path for any of them.
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// Isolation requested for a channel outside the buffer's component set
    InvalidChannel {
        channel: Channel,
        mode: ColorMode,
    },
    /// Operation requires a buffer in a different color mode
    ModeMismatch {
        operation: &'static str,
        expected: ColorMode,
        actual: ColorMode,
    },
    /// Pixel sequence length does not match the stated dimensions
    DimensionMismatch {
        width: usize,
        height: usize,
        actual: usize,
    },
    /// Unrecognized value on the string configuration surface
    UnknownSetting {
        setting: &'static str,
        value: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidChannel { channel, mode } => {
                write!(f, "Channel {} is not part of the {} component set", channel, mode)
            }
            Error::ModeMismatch { operation, expected, actual } => {
                write!(f, "{} requires a {} buffer, got {}", operation, expected, actual)
            }
            Error::DimensionMismatch { width, height, actual } => {
                write!(f, "Expected {} pixels for {}x{}, got {}", width * height, width, height, actual)
            }
            Error::UnknownSetting { setting, value } => {
                write!(f, "Unknown {} value {:?}", setting, value)
            }
        }
    }
}

impl std::error::Error for Error {}
