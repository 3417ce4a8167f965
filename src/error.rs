//! Error types for quadrant-pi

use thiserror::Error;

/// Main error type for quadrant-pi operations
#[derive(Error, Debug)]
pub enum Error {
    /// Wrong number of arguments; carries the usage text to print
    #[error("{0}")]
    Usage(String),

    #[error("Radius R must not be negative or zero.")]
    InvalidRadius,

    #[error("Radius R must be a finite number.")]
    NonFiniteRadius,

    #[error("Radius R is too large: its square overflows.")]
    RadiusTooLarge,

    #[error("Iterations N must be an integer greater or equal to one.")]
    InvalidIterations,

    #[error("Could not parse {name} from '{value}'.")]
    Parse { name: &'static str, value: String },

    #[error("Unknown format: {0}")]
    UnknownFormat(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for quadrant-pi operations
pub type Result<T> = std::result::Result<T, Error>;
