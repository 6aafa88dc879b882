//! Configuration errors for the corpus generator.

/// Error raised while validating a generator configuration.
///
/// All of these are detected before the first line is generated.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Dot path is empty or has an empty segment
    #[error("Invalid dot path: {0:?}")]
    InvalidPath(String),

    /// Unknown value type tag
    #[error("Unknown type: {0:?} (expected string, number, bool or null)")]
    UnknownType(String),

    /// Value text could not be parsed as a number
    #[error("For --type number, --value must be an integer or float (got {0:?})")]
    InvalidNumber(String),

    /// Value text parsed to a float JSON cannot represent
    #[error("For --type number, --value must be finite (got {0:?})")]
    NonFiniteNumber(String),

    /// Value text is not a boolean literal
    #[error("For --type bool, --value must be 'true' or 'false' (got {0:?})")]
    InvalidBool(String),

    /// A rate parameter is outside [0,1]
    #[error("--{name} must be in [0,1] (got {value})")]
    RateOutOfRange { name: &'static str, value: f64 },

    #[error("--lines must be > 0")]
    NonPositiveLines,

    #[error("--max-line-bytes must be > 0")]
    NonPositiveMaxLineBytes,
}
