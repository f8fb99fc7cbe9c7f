//! Error types for peoplefinder-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// peoplefinder-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid grid or image dimensions
    #[error("invalid dimensions: {rows}x{cols}")]
    InvalidDimension { rows: u32, cols: u32 },

    /// Coordinate outside the grid
    #[error("coordinate ({row}, {col}) outside {rows}x{cols} grid")]
    OutOfBounds {
        row: i32,
        col: i32,
        rows: u32,
        cols: u32,
    },

    /// Index out of bounds
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Two buffers that must agree in size do not
    #[error("dimension mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
