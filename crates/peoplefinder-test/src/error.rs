//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur during regression testing
#[derive(Debug, Error)]
pub enum TestError {
    /// Failed to build a synthetic silhouette
    #[error("failed to build silhouette: {0}")]
    Build(String),

    /// Failed to write a regression output file
    #[error("failed to write '{path}': {message}")]
    Write { path: String, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<peoplefinder_core::Error> for TestError {
    fn from(e: peoplefinder_core::Error) -> Self {
        TestError::Build(e.to_string())
    }
}

impl From<peoplefinder_region::RegionError> for TestError {
    fn from(e: peoplefinder_region::RegionError) -> Self {
        TestError::Build(e.to_string())
    }
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
