//! Error types for waveform downsampling

use std::fmt;

/// Errors that can occur while planning or downsampling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownscaleError {
    /// Invalid argument (zero buckets, bad lane width, mismatched plan)
    InvalidArgument(String),

    /// Raw sample data could not be read or decoded
    DecodingError(String),
}

impl fmt::Display for DownscaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DownscaleError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            DownscaleError::DecodingError(msg) => write!(f, "Decoding error: {}", msg),
        }
    }
}

impl std::error::Error for DownscaleError {}
