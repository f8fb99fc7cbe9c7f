//! Decoded 8-bit grayscale raster
//!
//! Every decoder reduces its input to a `GrayImage`; binarization and
//! resampling to the grid size happen on top of it.

use crate::{IoError, IoResult};
use peoplefinder_core::{Canvas, Mask, color};

/// 8-bit grayscale image, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayImage {
    rows: u32,
    cols: u32,
    data: Vec<u8>,
}

impl GrayImage {
    /// Wrap row-major gray samples.
    pub fn from_raw(rows: u32, cols: u32, data: Vec<u8>) -> IoResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(IoError::InvalidData(format!(
                "empty image: {}x{}",
                rows, cols
            )));
        }
        let expected = rows as usize * cols as usize;
        if data.len() < expected {
            return Err(IoError::InvalidData(format!(
                "pixel data too short: {} < {}",
                data.len(),
                expected
            )));
        }
        let mut data = data;
        data.truncate(expected);
        Ok(Self { rows, cols, data })
    }

    /// Convert interleaved samples with `channels` bytes per pixel.
    ///
    /// One or two channels are read as gray (plus alpha, ignored); three or
    /// four as RGB(A) reduced by luminance.
    pub fn from_interleaved(rows: u32, cols: u32, channels: usize, data: &[u8]) -> IoResult<Self> {
        let npix = rows as usize * cols as usize;
        if data.len() < npix * channels {
            return Err(IoError::InvalidData(format!(
                "pixel data too short: {} < {}",
                data.len(),
                npix * channels
            )));
        }
        let gray = match channels {
            1 => data[..npix].to_vec(),
            2 => data.chunks_exact(2).take(npix).map(|px| px[0]).collect(),
            3 | 4 => data
                .chunks_exact(channels)
                .take(npix)
                .map(|px| color::luminance(px[0], px[1], px[2]))
                .collect(),
            _ => {
                return Err(IoError::UnsupportedFormat(format!(
                    "{} channels per pixel",
                    channels
                )));
            }
        };
        Self::from_raw(rows, cols, gray)
    }

    #[inline]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Gray value at `(row, col)`, or `None` outside the image.
    pub fn get(&self, row: u32, col: u32) -> Option<u8> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.data[row as usize * self.cols as usize + col as usize])
    }

    /// Raw row-major samples.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Foreground wherever the gray value is at least `threshold`.
    pub fn binarize(&self, threshold: u8) -> IoResult<Mask> {
        let bits = self.data.iter().map(|&v| v >= threshold).collect();
        Ok(Mask::from_vec(self.rows, self.cols, bits)?)
    }
}

/// Interleaved RGB bytes of a canvas, row-major.
pub(crate) fn canvas_rgb_bytes(canvas: &Canvas) -> Vec<u8> {
    let mut data = Vec::with_capacity(canvas.rows() as usize * canvas.cols() as usize * 3);
    for row in 0..canvas.rows() {
        for col in 0..canvas.cols() {
            let (r, g, b) = canvas.get_rgb(row, col).unwrap_or((0, 0, 0));
            data.extend_from_slice(&[r, g, b]);
        }
    }
    data
}
