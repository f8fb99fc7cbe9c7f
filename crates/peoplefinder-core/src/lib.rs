//! peoplefinder-core - Basic data structures for silhouette analysis
//!
//! This crate provides the fundamental data structures used throughout
//! the peoplefinder workspace:
//!
//! - [`Point`] - `(row, col)` grid coordinates
//! - [`LabelGrid`] / [`Label`] - Per-cell labelled silhouette buffer
//! - [`Mask`] - Binary silhouette image
//! - [`Canvas`] / [`Color`] - RGB raster used for annotation

pub mod canvas;
pub mod error;
pub mod grid;
pub mod mask;
pub mod point;

pub use canvas::{Canvas, Color, generate_circle_outline_points, generate_line_points};
pub use error::{Error, Result};
pub use grid::{Label, LabelGrid, REFERENCE_COLS, REFERENCE_ROWS};
pub use mask::Mask;
pub use point::Point;

/// Color channel helpers for 32-bit RGBA pixels.
///
/// # Pixel format
///
/// 32-bit pixels are stored as `0xRRGGBBAA` (red in MSB, alpha in LSB).
pub mod color {
    /// Shift amounts for extracting color channels
    pub const RED_SHIFT: u32 = 24;
    pub const GREEN_SHIFT: u32 = 16;
    pub const BLUE_SHIFT: u32 = 8;
    pub const ALPHA_SHIFT: u32 = 0;

    /// Extract red component from a 32-bit pixel.
    #[inline]
    pub fn red(pixel: u32) -> u8 {
        ((pixel >> RED_SHIFT) & 0xff) as u8
    }

    /// Extract green component from a 32-bit pixel.
    #[inline]
    pub fn green(pixel: u32) -> u8 {
        ((pixel >> GREEN_SHIFT) & 0xff) as u8
    }

    /// Extract blue component from a 32-bit pixel.
    #[inline]
    pub fn blue(pixel: u32) -> u8 {
        ((pixel >> BLUE_SHIFT) & 0xff) as u8
    }

    /// Compose a 32-bit RGB pixel (alpha = 255).
    #[inline]
    pub fn compose_rgb(r: u8, g: u8, b: u8) -> u32 {
        ((r as u32) << RED_SHIFT)
            | ((g as u32) << GREEN_SHIFT)
            | ((b as u32) << BLUE_SHIFT)
            | (255 << ALPHA_SHIFT)
    }

    /// Extract RGB values from a 32-bit pixel.
    #[inline]
    pub fn extract_rgb(pixel: u32) -> (u8, u8, u8) {
        (red(pixel), green(pixel), blue(pixel))
    }

    /// Luminance of an RGB triple, ITU-R 601 weights, rounded.
    #[inline]
    pub fn luminance(r: u8, g: u8, b: u8) -> u8 {
        (0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32 + 0.5).min(255.0) as u8
    }

}
