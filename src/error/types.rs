use thiserror::Error;

use crate::logging::LoggingError;

/// Unified result type for the weft crate.
pub type Result<T> = std::result::Result<T, WeftError>;

/// Errors surfaced by the runtime and rendering layers.
#[derive(Debug, Error)]
pub enum WeftError {
    #[error("logging error: {0}")]
    Logging(#[from] LoggingError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
