//! Error Types

use thiserror::Error;

/// Result type alias for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Configuration errors.
///
/// Only construction-time inputs can fail. Once a latch or reveal config
/// exists, nothing it does returns an error.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Threshold outside `[0, 1]` or NaN
    #[error("Invalid threshold: {0} (expected a fraction between 0 and 1)")]
    InvalidThreshold(f64),

    /// Orbit radius must be finite and positive
    #[error("Invalid orbit radius: {0}")]
    InvalidRadius(f64),

    /// Orbit timing must be non-zero
    #[error("Invalid orbit {0}: must be greater than zero")]
    InvalidTiming(&'static str),

    /// Theme override names a token that does not exist
    #[error("Unknown style token: {0}")]
    UnknownToken(String),

    /// Theme override maps a token to an empty class string
    #[error("Empty class list for style token: {0}")]
    EmptyClasses(String),

    /// Theme file could not be parsed
    #[error("Theme parse error: {0}")]
    Theme(#[from] serde_json::Error),
}
