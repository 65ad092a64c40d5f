//! Error types for cardflow

use thiserror::Error;

/// The main error type for cardflow operations
#[derive(Debug, Error)]
pub enum CardflowError {
    #[error("Breakpoint length mismatch: {input} inputs vs {output} outputs")]
    BreakpointLengthMismatch { input: usize, output: usize },

    #[error("Non-monotonic breakpoints at index {index}: {prev} followed by {next}")]
    NonMonotonicBreakpoints { index: usize, prev: f64, next: f64 },

    #[error("Breakpoint sequences must not be empty")]
    EmptyBreakpoints,

    #[error("Layout is measured but {field} is not finite: {value}")]
    NonFiniteDimension { field: &'static str, value: f64 },

    #[error("Profile not found: {0}")]
    ProfileNotFound(String),

    #[error("Profile error: {0}")]
    ProfileError(String),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for cardflow operations
pub type Result<T> = std::result::Result<T, CardflowError>;

impl From<toml::de::Error> for CardflowError {
    fn from(err: toml::de::Error) -> Self {
        CardflowError::TomlParseError(err.to_string())
    }
}
