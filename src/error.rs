use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for the SDF dataset generator.
#[derive(Debug, Error)]
pub enum SdfError {
    #[error(transparent)]
    Argument(#[from] ArgumentError),

    #[error(transparent)]
    Normalize(#[from] NormalizeError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors caused by caller-supplied values.
#[derive(Debug, Error)]
pub enum ArgumentError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Errors raised while normalizing a distance field.
#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("degenerate input: every value equals {value}, min-max range is zero")]
    DegenerateInput { value: f64 },

    #[error("degenerate input: field is empty")]
    Empty,

    #[error("min-max range of [{min}, {max}] is not finite")]
    NonFiniteRange { min: f64, max: f64 },
}

/// Errors related to loading generator configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

impl SdfError {
    /// Shorthand for an [`ArgumentError::InvalidArgument`].
    pub(crate) fn invalid_argument(msg: impl Into<String>) -> Self {
        ArgumentError::InvalidArgument(msg.into()).into()
    }
}

/// Convenience type alias for results using [`SdfError`].
pub type Result<T> = std::result::Result<T, SdfError>;
