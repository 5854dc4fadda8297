//! Error types for the stamp dispenser
//!
//! The solving core only ever raises `InvalidArgument`; the remaining
//! variants belong to configuration, parsing and batch execution.

use thiserror::Error;

/// Main error type for the stamp dispenser
#[derive(Error, Debug)]
pub enum DispenserError {
    /// Bad denomination list or negative request
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A total was left without a count after solving
    #[error("No stamp combination reaches {request}")]
    Unreachable { request: u64 },

    /// Malformed denomination or request text
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// A batch worker thread panicked before returning its results
    #[error("Batch worker thread panicked")]
    WorkerPanicked,
}

impl DispenserError {
    /// Shorthand for building an `InvalidArgument`
    pub fn invalid(message: impl Into<String>) -> Self {
        DispenserError::InvalidArgument(message.into())
    }

    /// True for errors caused by caller input rather than the environment
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, DispenserError::InvalidArgument(_))
    }
}

/// Result type alias for dispenser operations
pub type Result<T> = std::result::Result<T, DispenserError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DispenserError::invalid("values must be positive");
        assert_eq!(err.to_string(), "Invalid argument: values must be positive");
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_unreachable_error() {
        let err = DispenserError::Unreachable { request: 42 };
        assert!(err.to_string().contains("42"));
        assert!(!err.is_invalid_argument());
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: DispenserError = io.into();
        assert!(matches!(err, DispenserError::IoError(_)));
    }
}
