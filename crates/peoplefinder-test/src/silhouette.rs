//! Synthetic silhouettes
//!
//! Builders for the outlined grids used across the regression tests. A
//! silhouette is described as horizontal foreground spans on a mask and
//! then converted to an outline-only grid, the same form the image loader
//! produces.

use crate::error::TestResult;
use peoplefinder_core::{Label, LabelGrid, Mask, REFERENCE_COLS, REFERENCE_ROWS};
use peoplefinder_region::outline_from_mask;

/// Span-based silhouette builder.
///
/// ```
/// use peoplefinder_test::SilhouetteBuilder;
///
/// let grid = SilhouetteBuilder::new(16, 8)
///     .rect(4, 11, 2, 5)
///     .build()
///     .unwrap();
/// assert_eq!(grid.rows(), 16);
/// ```
#[derive(Debug, Clone)]
pub struct SilhouetteBuilder {
    rows: u32,
    cols: u32,
    spans: Vec<(i32, i32, i32)>,
}

impl SilhouetteBuilder {
    /// Start an empty silhouette of the given size.
    pub fn new(rows: u32, cols: u32) -> Self {
        Self {
            rows,
            cols,
            spans: Vec::new(),
        }
    }

    /// Start an empty silhouette on the 128x64 reference grid.
    pub fn reference() -> Self {
        Self::new(REFERENCE_ROWS, REFERENCE_COLS)
    }

    /// Add foreground columns `col_start..=col_end` on `row`.
    pub fn span(mut self, row: i32, col_start: i32, col_end: i32) -> Self {
        self.spans.push((row, col_start, col_end));
        self
    }

    /// Add a filled rectangle, both ranges inclusive.
    pub fn rect(mut self, row_start: i32, row_end: i32, col_start: i32, col_end: i32) -> Self {
        for row in row_start..=row_end {
            self.spans.push((row, col_start, col_end));
        }
        self
    }

    /// Move every span added so far.
    pub fn translate(mut self, drow: i32, dcol: i32) -> Self {
        for span in &mut self.spans {
            *span = (span.0 + drow, span.1 + dcol, span.2 + dcol);
        }
        self
    }

    /// Rasterize the spans into a binary mask, clipping at the borders.
    pub fn build_mask(&self) -> TestResult<Mask> {
        let mut mask = Mask::new(self.rows, self.cols)?;
        for &(row, lo, hi) in &self.spans {
            if row >= 0 {
                mask.fill_span(row as u32, lo, hi);
            }
        }
        Ok(mask)
    }

    /// Rasterize and outline the silhouette.
    pub fn build(&self) -> TestResult<LabelGrid> {
        let mask = self.build_mask()?;
        Ok(outline_from_mask(&mask)?)
    }
}

/// Builder for the reference pedestrian figure.
///
/// The figure is upright and centred on the reference grid: a head at the
/// top, a shoulder bar from which both arms hang, a torso narrowing into a
/// hip band, and two legs spreading toward the bottom corners.
pub fn stick_figure_builder() -> SilhouetteBuilder {
    let mut b = SilhouetteBuilder::reference()
        // head
        .rect(2, 11, 28, 35)
        // neck
        .span(12, 31, 33)
        .span(13, 30, 34)
        // shoulders
        .rect(14, 19, 16, 47)
        // torso with both arms
        .rect(20, 50, 22, 41)
        .rect(20, 50, 16, 19)
        .rect(20, 50, 44, 47)
        // abdomen
        .rect(51, 71, 22, 41)
        // hips
        .span(72, 18, 45);

    // legs
    for row in 73..=125 {
        let off = (row - 73) * 20 / 52;
        b = b.span(row, 22 - off, 30 - off).span(row, 33 + off, 41 + off);
    }
    b
}

/// The reference pedestrian figure as an outlined grid.
pub fn stick_figure() -> TestResult<LabelGrid> {
    stick_figure_builder().build()
}

/// The reference figure moved by `drow` rows and `dcol` columns.
pub fn stick_figure_at(drow: i32, dcol: i32) -> TestResult<LabelGrid> {
    stick_figure_builder().translate(drow, dcol).build()
}

/// A figure whose head touches the top edge of the grid.
///
/// A two-row head cap sits on rows 0 and 1 above a narrower face. The neck
/// on row 10 is a single pixel, the torso widens down to row 40, a hip band
/// crosses row 60 and the legs run to the bottom corners on row 127.
pub fn top_edge_figure() -> TestResult<LabelGrid> {
    let mut b = SilhouetteBuilder::reference()
        // head cap
        .rect(0, 1, 28, 36)
        // face
        .rect(2, 9, 29, 35)
        // neck
        .span(10, 32, 32);

    // torso
    for row in 11..=40 {
        let half = 1 + (row - 11) * 12 / 29;
        b = b.span(row, 32 - half, 32 + half);
    }

    b = b
        // abdomen
        .rect(41, 59, 20, 44)
        // hips
        .span(60, 14, 50)
        // pelvis
        .rect(61, 72, 20, 44);

    // legs
    for row in 73..=127 {
        let off = (row - 73) * 21 / 54;
        b = b.span(row, 22 - off, 30 - off).span(row, 34 + off, 42 + off);
    }
    b.build()
}

/// A solid block that covers the grid centre but sits entirely below the
/// torso search window.
pub fn filled_block() -> TestResult<LabelGrid> {
    SilhouetteBuilder::reference().rect(50, 70, 10, 50).build()
}

/// A closed square outline whose right side is missing.
///
/// Filling from the centre escapes through the gap and reaches the corner.
pub fn open_outline() -> TestResult<LabelGrid> {
    let mut grid = LabelGrid::new(REFERENCE_ROWS, REFERENCE_COLS)?;
    for col in 16..=48u32 {
        grid.set(40, col, Label::Outline)?;
        grid.set(90, col, Label::Outline)?;
    }
    for row in 40..=90u32 {
        grid.set(row, 16, Label::Outline)?;
    }
    Ok(grid)
}

/// A grid whose only outline cell is the seed.
pub fn seed_on_outline() -> TestResult<LabelGrid> {
    let mut grid = LabelGrid::new(REFERENCE_ROWS, REFERENCE_COLS)?;
    let seed = grid.center();
    grid.set_at(seed, Label::Outline)?;
    Ok(grid)
}
