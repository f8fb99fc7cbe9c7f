//! Seed fill operations
//!
//! Flood fill over a [`LabelGrid`] and the silhouette check built on it.
//! The fill turns background cells into interior cells and stops at any
//! cell that is not background, so an outline acts as the fill boundary.

use crate::error::{RegionError, RegionResult};
use peoplefinder_core::{Label, LabelGrid, Point};
use std::collections::VecDeque;

/// Pixel connectivity for region operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectivityType {
    /// 4-way connectivity (up, down, left, right)
    #[default]
    FourWay,
    /// 8-way connectivity (includes diagonals)
    EightWay,
}

/// Result of [`fill_silhouette`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillOutcome {
    /// The interior was established; `filled` cells were converted.
    Filled { filled: u32 },
    /// The seed sits on the outline, so no interior could be located.
    SeedOnOutline,
    /// The fill escaped the outline and reached the top-left corner.
    Leaked { filled: u32 },
}

impl FillOutcome {
    /// True when the silhouette can be used for landmark extraction.
    pub fn is_usable(&self) -> bool {
        matches!(self, FillOutcome::Filled { .. })
    }
}

/// Flood fill background cells with [`Label::Interior`] starting from `seed`.
///
/// Fills the connected background region containing the seed. Returns the
/// number of cells filled, which is zero when the seed is not background.
///
/// # Errors
///
/// Returns [`RegionError::EmptyGrid`] for a zero-size grid and
/// [`RegionError::InvalidSeed`] if the seed is outside the grid.
pub fn floodfill(
    grid: &mut LabelGrid,
    seed: Point,
    connectivity: ConnectivityType,
) -> RegionResult<u32> {
    if grid.is_empty() {
        return Err(RegionError::EmptyGrid);
    }
    if !grid.contains(seed) {
        return Err(RegionError::InvalidSeed {
            row: seed.row,
            col: seed.col,
        });
    }

    if grid.label_at(seed) != Some(Label::Background) {
        return Ok(0);
    }

    let rows = grid.rows();
    let cols = grid.cols();
    let mut filled_count = 0u32;
    let mut queue = VecDeque::new();
    queue.push_back((seed.row as u32, seed.col as u32));

    while let Some((r, c)) = queue.pop_front() {
        if grid.get(r, c) != Some(Label::Background) {
            continue;
        }

        grid.set(r, c, Label::Interior)?;
        filled_count += 1;

        // Add 4-way neighbors
        if r > 0 {
            queue.push_back((r - 1, c));
        }
        if r + 1 < rows {
            queue.push_back((r + 1, c));
        }
        if c > 0 {
            queue.push_back((r, c - 1));
        }
        if c + 1 < cols {
            queue.push_back((r, c + 1));
        }

        // Add diagonal neighbors for 8-way connectivity
        if connectivity == ConnectivityType::EightWay {
            if r > 0 && c > 0 {
                queue.push_back((r - 1, c - 1));
            }
            if r > 0 && c + 1 < cols {
                queue.push_back((r - 1, c + 1));
            }
            if r + 1 < rows && c > 0 {
                queue.push_back((r + 1, c - 1));
            }
            if r + 1 < rows && c + 1 < cols {
                queue.push_back((r + 1, c + 1));
            }
        }
    }

    Ok(filled_count)
}

/// Fill the interior of an outlined silhouette and judge whether it is usable.
///
/// The seed is assumed to fall inside the shape. If it is not on the outline
/// the grid is flood filled from it. The silhouette is rejected when the seed
/// lies on the outline, or when the fill reached the top-left corner cell,
/// which means the outline did not enclose the seed.
///
/// Mutates `grid` in place.
///
/// # Errors
///
/// Propagates [`floodfill`] errors for an empty grid or an off-grid seed.
pub fn fill_silhouette(
    grid: &mut LabelGrid,
    seed: Point,
    connectivity: ConnectivityType,
) -> RegionResult<FillOutcome> {
    if grid.is_empty() {
        return Err(RegionError::EmptyGrid);
    }
    if grid.label_at(seed) == Some(Label::Outline) {
        return Ok(FillOutcome::SeedOnOutline);
    }

    let filled = floodfill(grid, seed, connectivity)?;

    if grid.get(0, 0) == Some(Label::Interior) {
        return Ok(FillOutcome::Leaked { filled });
    }
    Ok(FillOutcome::Filled { filled })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boxed_grid() -> LabelGrid {
        // 10x10 grid with a closed square outline from (2,2) to (7,7)
        let mut grid = LabelGrid::new(10, 10).unwrap();
        for i in 2..=7 {
            grid.set(2, i, Label::Outline).unwrap();
            grid.set(7, i, Label::Outline).unwrap();
            grid.set(i, 2, Label::Outline).unwrap();
            grid.set(i, 7, Label::Outline).unwrap();
        }
        grid
    }

    #[test]
    fn test_floodfill_whole_grid() {
        let mut grid = LabelGrid::new(10, 10).unwrap();
        let count = floodfill(&mut grid, Point::new(5, 5), ConnectivityType::FourWay).unwrap();
        assert_eq!(count, 100);
    }

    #[test]
    fn test_floodfill_stops_at_outline() {
        let mut grid = boxed_grid();
        let count = floodfill(&mut grid, Point::new(4, 4), ConnectivityType::FourWay).unwrap();
        assert_eq!(count, 16);
        assert_eq!(grid.get(0, 0), Some(Label::Background));
    }

    #[test]
    fn test_eight_way_leaks_through_diagonal_gap() {
        // Diagonal wall: 4-way fill is contained, 8-way fill crosses it
        let mut grid = LabelGrid::new(4, 4).unwrap();
        for i in 0..4 {
            grid.set(i, 3 - i, Label::Outline).unwrap();
        }
        let mut grid8 = grid.clone();
        let c4 = floodfill(&mut grid, Point::new(0, 0), ConnectivityType::FourWay).unwrap();
        let c8 = floodfill(&mut grid8, Point::new(0, 0), ConnectivityType::EightWay).unwrap();
        assert_eq!(c4, 6);
        assert_eq!(c8, 12);
    }

    #[test]
    fn test_floodfill_invalid_seed() {
        let mut grid = LabelGrid::new(4, 4).unwrap();
        let err = floodfill(&mut grid, Point::new(4, 0), ConnectivityType::FourWay);
        assert!(matches!(err, Err(RegionError::InvalidSeed { row: 4, col: 0 })));
    }

    #[test]
    fn test_fill_silhouette_outcomes() {
        let mut grid = boxed_grid();
        let outcome = fill_silhouette(&mut grid, Point::new(5, 5), ConnectivityType::FourWay);
        assert_eq!(outcome.unwrap(), FillOutcome::Filled { filled: 16 });

        let mut grid = boxed_grid();
        let outcome = fill_silhouette(&mut grid, Point::new(2, 5), ConnectivityType::FourWay);
        assert_eq!(outcome.unwrap(), FillOutcome::SeedOnOutline);

        let mut grid = boxed_grid();
        let outcome = fill_silhouette(&mut grid, Point::new(9, 9), ConnectivityType::FourWay);
        assert!(matches!(outcome.unwrap(), FillOutcome::Leaked { .. }));
    }

    #[test]
    fn test_fill_silhouette_prefilled_grid() {
        let mut grid = boxed_grid();
        floodfill(&mut grid, Point::new(4, 4), ConnectivityType::FourWay).unwrap();
        let outcome = fill_silhouette(&mut grid, Point::new(4, 4), ConnectivityType::FourWay);
        assert_eq!(outcome.unwrap(), FillOutcome::Filled { filled: 0 });
    }
}
