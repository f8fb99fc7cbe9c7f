//! LabelGrid - per-cell labelled silhouette buffer
//!
//! A `LabelGrid` is the hand-off format between contour extraction and the
//! landmark pipeline. Every cell carries exactly one [`Label`], so a cell can
//! never be interior and outline at the same time.
//!
//! Cells are stored row-major. All accessors take `(row, col)`.

use crate::error::{Error, Result};
use crate::point::Point;

/// Reference grid height (rows) used by the training data.
pub const REFERENCE_ROWS: u32 = 128;

/// Reference grid width (columns) used by the training data.
pub const REFERENCE_COLS: u32 = 64;

/// Cell label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Label {
    /// Outside the silhouette, or not yet filled
    #[default]
    Background,
    /// Inside the silhouette
    Interior,
    /// On the silhouette outline
    Outline,
}

/// Labelled grid of `rows x cols` cells.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LabelGrid {
    rows: u32,
    cols: u32,
    cells: Vec<Label>,
}

impl LabelGrid {
    /// Create a grid with every cell set to [`Label::Background`].
    ///
    /// A `0 x 0` grid is allowed and acts as the end-of-batch marker for
    /// dataset loaders.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if exactly one of the dimensions
    /// is zero.
    pub fn new(rows: u32, cols: u32) -> Result<Self> {
        if (rows == 0) != (cols == 0) {
            return Err(Error::InvalidDimension { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![Label::Background; rows as usize * cols as usize],
        })
    }

    /// Create an empty `0 x 0` grid.
    pub fn empty() -> Self {
        Self::default()
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

    /// True for a zero-size grid.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// True when `p` addresses a cell of this grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.within(0, 0, self.rows as i32, self.cols as i32)
    }

    /// Centre cell, `(rows / 2, cols / 2)`.
    pub fn center(&self) -> Point {
        Point::new((self.rows / 2) as i32, (self.cols / 2) as i32)
    }

    #[inline]
    fn index(&self, row: u32, col: u32) -> usize {
        row as usize * self.cols as usize + col as usize
    }

    /// Get the label at `(row, col)`, or `None` if out of bounds.
    pub fn get(&self, row: u32, col: u32) -> Option<Label> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.cells[self.index(row, col)])
    }

    /// Get the label at a point, or `None` if the point is off the grid.
    pub fn label_at(&self, p: Point) -> Option<Label> {
        if !self.contains(p) {
            return None;
        }
        self.get(p.row as u32, p.col as u32)
    }

    /// Set the label at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the cell is outside the grid.
    pub fn set(&mut self, row: u32, col: u32, label: Label) -> Result<()> {
        if row >= self.rows || col >= self.cols {
            return Err(Error::OutOfBounds {
                row: row as i32,
                col: col as i32,
                rows: self.rows,
                cols: self.cols,
            });
        }
        let idx = self.index(row, col);
        self.cells[idx] = label;
        Ok(())
    }

    /// Set the label at a point.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the point is off the grid.
    pub fn set_at(&mut self, p: Point, label: Label) -> Result<()> {
        if !self.contains(p) {
            return Err(Error::OutOfBounds {
                row: p.row,
                col: p.col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        self.set(p.row as u32, p.col as u32, label)
    }

    /// Labels of one row, left to right.
    pub fn row(&self, row: u32) -> Option<&[Label]> {
        if row >= self.rows {
            return None;
        }
        let start = self.index(row, 0);
        Some(&self.cells[start..start + self.cols as usize])
    }

    /// Count the cells carrying `label`.
    pub fn count(&self, label: Label) -> usize {
        self.cells.iter().filter(|&&l| l == label).count()
    }
}
