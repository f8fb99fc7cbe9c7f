//! Outline extraction
//!
//! Converts a binary silhouette into an outline-only [`LabelGrid`], the form
//! expected by the landmark pipeline. The outline is the background boundary
//! of the silhouette: every background pixel that touches the foreground
//! in any of its 8 neighbours. All other cells, including the silhouette
//! itself, are left as background so that the seeded fill can recover the
//! interior.
//!
//! Because every 4-connected step out of the silhouette lands on an outline
//! cell, the outline is closed for a 4-way fill started inside the shape.

use crate::error::RegionResult;
use peoplefinder_core::{Label, LabelGrid, Mask};

/// Row/column offsets of the 8 neighbours.
const NEIGHBOURS_8: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Build an outline-only grid from a binary mask.
///
/// # Errors
///
/// Propagates grid construction errors.
pub fn outline_from_mask(mask: &Mask) -> RegionResult<LabelGrid> {
    let mut grid = LabelGrid::new(mask.rows(), mask.cols())?;

    for row in 0..mask.rows() as i32 {
        for col in 0..mask.cols() as i32 {
            if mask.get(row, col) {
                continue;
            }
            let touches = NEIGHBOURS_8
                .iter()
                .any(|&(dr, dc)| mask.get(row + dr, col + dc));
            if touches {
                grid.set(row as u32, col as u32, Label::Outline)?;
            }
        }
    }

    Ok(grid)
}
