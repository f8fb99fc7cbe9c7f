//! Pixel indexing
//!
//! Linearizes a filled [`LabelGrid`] into two ordered coordinate lists, one
//! for interior cells and one for outline cells. Both come from a single
//! row-major scan, so rows never decrease along a list and columns strictly
//! increase within a row. Every landmark locator walks these lists with a
//! forward-only cursor.

use peoplefinder_core::{Label, LabelGrid, Point};

/// Ordered interior and outline coordinates of one silhouette.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PixelIndex {
    /// Interior cells in row-major order
    pub interior: Vec<Point>,
    /// Outline cells in row-major order
    pub outline: Vec<Point>,
}

impl PixelIndex {
    /// Scan `grid` once and collect its interior and outline cells.
    pub fn build(grid: &LabelGrid) -> Self {
        let mut index = PixelIndex::default();
        for row in 0..grid.rows() {
            let Some(labels) = grid.row(row) else {
                continue;
            };
            for (col, label) in labels.iter().enumerate() {
                let p = Point::new(row as i32, col as i32);
                match label {
                    Label::Interior => index.interior.push(p),
                    Label::Outline => index.outline.push(p),
                    Label::Background => {}
                }
            }
        }
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_row_major() {
        let mut grid = LabelGrid::new(3, 3).unwrap();
        grid.set(2, 0, Label::Interior).unwrap();
        grid.set(0, 2, Label::Interior).unwrap();
        grid.set(0, 1, Label::Interior).unwrap();
        grid.set(1, 1, Label::Outline).unwrap();

        let index = PixelIndex::build(&grid);
        assert_eq!(
            index.interior,
            vec![Point::new(0, 1), Point::new(0, 2), Point::new(2, 0)]
        );
        assert_eq!(index.outline, vec![Point::new(1, 1)]);
    }

    #[test]
    fn test_build_empty_grid() {
        let index = PixelIndex::build(&LabelGrid::empty());
        assert!(index.interior.is_empty());
        assert!(index.outline.is_empty());
    }

    #[test]
    fn test_order_invariant() {
        let mut grid = LabelGrid::new(4, 5).unwrap();
        for (r, c) in [(3, 4), (0, 0), (2, 2), (2, 1), (1, 3)] {
            grid.set(r, c, Label::Interior).unwrap();
        }
        let index = PixelIndex::build(&grid);
        for pair in index.interior.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            assert!(a.row < b.row || (a.row == b.row && a.col < b.col));
        }
    }
}
