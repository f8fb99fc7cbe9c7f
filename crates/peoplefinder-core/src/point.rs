//! Point - integer grid coordinates
//!
//! Coordinates are `(row, col)` pairs, matching the row-major scan order
//! used everywhere a grid is linearized. Rows grow downward and columns
//! grow to the right.

use std::fmt;

/// A `(row, col)` coordinate on a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Point {
    /// Row index (vertical, 0 at the top)
    pub row: i32,
    /// Column index (horizontal, 0 at the left)
    pub col: i32,
}

impl Point {
    /// Placeholder coordinate used where a value is required but nothing
    /// was observed, such as the initial lower bound of a trained range.
    ///
    /// It lies outside every grid this crate accepts (at most 128x64 in the
    /// reference configuration, and always below 1000 in either axis).
    pub const NOT_FOUND: Point = Point {
        row: 1000,
        col: 1000,
    };

    /// The origin `(0, 0)`.
    pub const ORIGIN: Point = Point { row: 0, col: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a point shifted by the given row and column offsets.
    #[inline]
    pub fn offset(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// Euclidean distance to another point.
    pub fn distance(self, other: Point) -> f64 {
        let dr = (other.row - self.row) as f64;
        let dc = (other.col - self.col) as f64;
        (dr * dr + dc * dc).sqrt()
    }

    /// Check whether the point lies in the half-open box
    /// `[low_row, high_row) x [low_col, high_col)`.
    #[inline]
    pub fn within(self, low_row: i32, low_col: i32, high_row: i32, high_col: i32) -> bool {
        self.row >= low_row && self.row < high_row && self.col >= low_col && self.col < high_col
    }
}

impl From<(i32, i32)> for Point {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl From<(u32, u32)> for Point {
    fn from((row, col): (u32, u32)) -> Self {
        Self::new(row as i32, col as i32)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
