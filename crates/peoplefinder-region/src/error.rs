//! Error types for peoplefinder-region

use thiserror::Error;

/// Errors that can occur during region processing operations
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] peoplefinder_core::Error),

    /// Invalid seed position
    #[error("invalid seed position: ({row}, {col})")]
    InvalidSeed { row: i32, col: i32 },

    /// Empty grid
    #[error("empty grid: no cells to process")]
    EmptyGrid,
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
