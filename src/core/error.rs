//! Centralised error types used across the crate.

use std::{error::Error, fmt, io};

/// Precise scale configuration faults.
#[derive(Debug)]
pub enum ConfigError {
    InvalidRange { low: i32, high: i32 },
    NonPositive(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidRange { low, high } => {
                write!(f, "min_temp {low} must be < max_temp {high}")
            }
            ConfigError::NonPositive(x) => write!(f, "`{x}` must be greater than zero"),
        }
    }
}
impl Error for ConfigError {}

/// Top-level error type bubbled up by public APIs.
///
/// Out-of-range readings are not errors; they are reported through
/// [`crate::core::reading::Rejected`] and the pass carries on.
#[derive(Debug)]
pub enum ChartError {
    /// The input could not be opened. Nothing was read.
    SourceUnavailable { path: String, source: io::Error },
    Io(io::Error),
    Config(ConfigError),
    /// The input opened but produced no in-range reading.
    EmptyResult,
}

impl ChartError {
    /// Process exit status for this failure.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            ChartError::SourceUnavailable { .. } => 2,
            ChartError::EmptyResult => 3,
            ChartError::Io(_) | ChartError::Config(_) => 1,
        }
    }
}

impl fmt::Display for ChartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartError::SourceUnavailable { path, .. } => {
                write!(f, "Could not open file '{path}'")
            }
            ChartError::Io(e) => write!(f, "{e}"),
            ChartError::Config(e) => write!(f, "{e}"),
            ChartError::EmptyResult => f.write_str("No valid temperature data found in file."),
        }
    }
}

impl Error for ChartError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ChartError::SourceUnavailable { source, .. } | ChartError::Io(source) => Some(source),
            ChartError::Config(e) => Some(e),
            ChartError::EmptyResult => None,
        }
    }
}

// automatic conversions
impl From<io::Error> for ChartError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
impl From<ConfigError> for ChartError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
