//! Error types for WebFolio

use thiserror::Error;

use crate::form::ValidationError;

/// Main error type for WebFolio controller operations
#[derive(Error, Debug)]
pub enum CoreError {
    /// A UI region a controller needs was not provided
    #[error("Missing element: {0}")]
    MissingElement(String),

    /// Two UI regions that must pair 1:1 have different lengths
    #[error("Region mismatch for {region}: expected {expected}, found {found}")]
    RegionMismatch {
        region: &'static str,
        expected: usize,
        found: usize,
    },

    /// An index outside a group's bounds
    #[error("Index {index} out of range for {len} entries")]
    IndexOutOfRange { index: usize, len: usize },

    /// A filter tag with no matching filter control
    #[error("Unknown filter: {0}")]
    UnknownFilter(String),

    /// Contact form validation failed
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A static asset could not be reached
    #[error("Resource unavailable: {0}")]
    ResourceUnavailable(String),

    /// Site configuration is invalid
    #[error("Config error: {0}")]
    Config(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using CoreError
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::MissingElement(".testimonial-item".to_string());
        assert_eq!(format!("{}", err), "Missing element: .testimonial-item");

        let err = CoreError::IndexOutOfRange { index: 4, len: 3 };
        assert_eq!(format!("{}", err), "Index 4 out of range for 3 entries");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: CoreError = io_err.into();
        assert!(matches!(err, CoreError::Io(_)));
    }

    #[test]
    fn test_error_from_validation() {
        let err: CoreError = ValidationError::MalformedEmail.into();
        assert!(matches!(err, CoreError::Validation(ValidationError::MalformedEmail)));
    }
}
