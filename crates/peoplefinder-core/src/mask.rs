//! Mask - binary silhouette image
//!
//! A `Mask` holds one boolean per pixel: `true` for foreground (the
//! silhouette), `false` for background. It is what image decoders produce
//! and what outline extraction consumes.

use crate::error::{Error, Result};

/// Binary image of `rows x cols` pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    rows: u32,
    cols: u32,
    data: Vec<bool>,
}

impl Mask {
    /// Create an all-background mask.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is zero.
    pub fn new(rows: u32, cols: u32) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Error::InvalidDimension { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            data: vec![false; rows as usize * cols as usize],
        })
    }

    /// Create a mask from row-major data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if `data.len() != rows * cols`.
    pub fn from_vec(rows: u32, cols: u32, data: Vec<bool>) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Error::InvalidDimension { rows, cols });
        }
        if data.len() != rows as usize * cols as usize {
            return Err(Error::DimensionMismatch {
                expected: (rows, cols),
                actual: (data.len() as u32 / cols, cols),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Foreground state at `(row, col)`; `false` outside the mask.
    #[inline]
    pub fn get(&self, row: i32, col: i32) -> bool {
        if row < 0 || col < 0 || row >= self.rows as i32 || col >= self.cols as i32 {
            return false;
        }
        self.data[row as usize * self.cols as usize + col as usize]
    }

    /// Set the foreground state at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the pixel is outside the mask.
    pub fn set(&mut self, row: u32, col: u32, value: bool) -> Result<()> {
        if row >= self.rows || col >= self.cols {
            return Err(Error::OutOfBounds {
                row: row as i32,
                col: col as i32,
                rows: self.rows,
                cols: self.cols,
            });
        }
        self.data[row as usize * self.cols as usize + col as usize] = value;
        Ok(())
    }

    /// Set every pixel of `row` between `col_start` and `col_end` (inclusive).
    ///
    /// Columns outside the mask are clipped.
    pub fn fill_span(&mut self, row: u32, col_start: i32, col_end: i32) {
        if row >= self.rows {
            return;
        }
        let lo = col_start.max(0);
        let hi = col_end.min(self.cols as i32 - 1);
        for col in lo..=hi {
            self.data[row as usize * self.cols as usize + col as usize] = true;
        }
    }

    /// Number of foreground pixels.
    pub fn count(&self) -> usize {
        self.data.iter().filter(|&&v| v).count()
    }

    /// Resample to `rows x cols` by nearest-neighbour sampling.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either target dimension is zero.
    pub fn resize_nearest(&self, rows: u32, cols: u32) -> Result<Mask> {
        let mut out = Mask::new(rows, cols)?;
        let row_scale = self.rows as f64 / rows as f64;
        let col_scale = self.cols as f64 / cols as f64;
        for r in 0..rows {
            let sr = ((r as f64 + 0.5) * row_scale) as i32;
            for c in 0..cols {
                let sc = ((c as f64 + 0.5) * col_scale) as i32;
                out.data[r as usize * cols as usize + c as usize] = self.get(sr, sc);
            }
        }
        Ok(out)
    }
}
