//! Error types for the site library.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the carousel controller and its hosts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CarouselError {
    /// The host environment cannot schedule timers, so autoplay cannot run
    #[error("Timer facility unavailable: {reason}")]
    TimerUnavailable { reason: String },
    /// A jump was requested to a slide that does not exist
    #[error("Slide {index} is out of range (carousel has {len} slides)")]
    SlideOutOfRange { index: usize, len: usize },
    /// A carousel needs at least one slide
    #[error("A carousel needs at least one slide")]
    EmptySlideList,
}

/// Comprehensive error type for all site operations.
#[derive(Error, Debug)]
pub enum SiteError {
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Carousel errors
    #[error(transparent)]
    Carousel(#[from] CarouselError),
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> SiteError {
        SiteError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl SiteError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a file system error for the given path.
    pub fn file_system(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileSystem {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for site operations
pub type Result<T> = std::result::Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_builder() {
        let err = SiteError::invalid_input("interval_ms").with_reason("must be positive");
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'interval_ms': must be positive"
        );
    }

    #[test]
    fn test_carousel_error_is_transparent() {
        let err: SiteError = CarouselError::SlideOutOfRange { index: 7, len: 6 }.into();
        assert_eq!(err.to_string(), "Slide 7 is out of range (carousel has 6 slides)");
    }
}
