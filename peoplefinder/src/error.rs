//! Error type for the directory-driven helpers

use thiserror::Error;

/// Errors from loading, classifying or annotating a dataset directory.
#[derive(Debug, Error)]
pub enum PeopleFinderError {
    /// Image I/O error
    #[error("io error: {0}")]
    Io(#[from] peoplefinder_io::IoError),

    /// Extraction or classification error
    #[error("recog error: {0}")]
    Recog(#[from] peoplefinder_recog::RecogError),

    /// Outline extraction error
    #[error("region error: {0}")]
    Region(#[from] peoplefinder_region::RegionError),

    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] peoplefinder_core::Error),
}

/// Result type for the directory-driven helpers
pub type PeopleFinderResult<T> = Result<T, PeopleFinderError>;
