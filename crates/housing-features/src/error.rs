//! Custom error types for the feature-engineering pipeline.
//!
//! Soft schema mismatches (an expected column being absent) are never
//! errors; every transform step skips itself instead. What remains here are
//! the fatal conditions: unreadable inputs, unwritable outputs, and Polars
//! failures inside a step.

use thiserror::Error;

/// The main error type for the feature pipeline.
#[derive(Error, Debug)]
pub enum FeatureError {
    /// The raw CSV for a split does not exist.
    #[error("Raw '{split}' file not found: {path}")]
    RawFileNotFound { split: String, path: String },

    /// A split identifier outside of {"train", "test"}.
    #[error("Invalid split '{0}' (expected \"train\" or \"test\")")]
    InvalidSplit(String),

    /// A transform step failed on a column it found.
    #[error("Transform step '{step}' failed: {reason}")]
    TransformFailed { step: String, reason: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Polars error wrapper.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// JSON serialization error (run report).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with context.
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<FeatureError>,
    },
}

impl FeatureError {
    /// Add context to an error.
    pub fn with_context(self, context: impl Into<String>) -> Self {
        FeatureError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Stable error code, used when logging failures from the binary.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::RawFileNotFound { .. } => "RAW_FILE_NOT_FOUND",
            Self::InvalidSplit(_) => "INVALID_SPLIT",
            Self::TransformFailed { .. } => "TRANSFORM_FAILED",
            Self::Io(_) => "IO_ERROR",
            Self::Polars(_) => "POLARS_ERROR",
            Self::Json(_) => "JSON_ERROR",
            Self::WithContext { source, .. } => source.error_code(),
        }
    }

    /// Check if this error means an input file was missing.
    pub fn is_missing_input(&self) -> bool {
        match self {
            Self::RawFileNotFound { .. } => true,
            Self::WithContext { source, .. } => source.is_missing_input(),
            _ => false,
        }
    }
}

/// Result type alias for feature pipeline operations.
pub type Result<T> = std::result::Result<T, FeatureError>;

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, polars::error::PolarsError> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| FeatureError::Polars(e).with_context(context))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, std::io::Error> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| FeatureError::Io(e).with_context(context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code() {
        assert_eq!(
            FeatureError::InvalidSplit("valid".to_string()).error_code(),
            "INVALID_SPLIT"
        );
        assert_eq!(
            FeatureError::RawFileNotFound {
                split: "train".to_string(),
                path: "data/raw/train.csv".to_string(),
            }
            .error_code(),
            "RAW_FILE_NOT_FOUND"
        );
    }

    #[test]
    fn test_is_missing_input() {
        let error = FeatureError::RawFileNotFound {
            split: "test".to_string(),
            path: "data/raw/test.csv".to_string(),
        };
        assert!(error.is_missing_input());
        assert!(error.with_context("Loading splits").is_missing_input());
        assert!(!FeatureError::InvalidSplit("dev".to_string()).is_missing_input());
    }

    #[test]
    fn test_with_context() {
        let error = FeatureError::InvalidSplit("dev".to_string()).with_context("During loading");
        assert!(error.to_string().contains("During loading"));
        assert_eq!(error.error_code(), "INVALID_SPLIT"); // Inner code survives context
    }

    #[test]
    fn test_io_context() {
        let result: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "read-only",
        ));
        let error = result.context("Creating processed directory").unwrap_err();
        assert_eq!(error.error_code(), "IO_ERROR");
        assert!(error.to_string().starts_with("Creating processed directory"));
    }
}
