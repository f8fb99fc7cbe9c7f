//! Error types for peoplefinder-recog

use thiserror::Error;

/// Errors that can occur during landmark extraction and classification
///
/// Malformed silhouettes are not errors; they are reported through
/// [`SkeletonStatus`](crate::SkeletonStatus).
#[derive(Debug, Error)]
pub enum RecogError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] peoplefinder_core::Error),

    /// Region library error
    #[error("region error: {0}")]
    Region(#[from] peoplefinder_region::RegionError),

    /// Invalid parameter provided
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type for recognition operations
pub type RecogResult<T> = Result<T, RecogError>;
