//! Trained landmark ranges

use crate::skeleton::{Landmark, LandmarkSet};
use peoplefinder_core::Point;

/// Per-landmark bounding boxes learned from training silhouettes.
///
/// Each slot starts at `min = (1000, 1000)` and `max = (0, 0)`, so the
/// first observation sets both bounds. Folding only ever lowers `min` and
/// raises `max`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LandmarkRanges {
    min: [Point; Landmark::COUNT],
    max: [Point; Landmark::COUNT],
    samples: usize,
}

impl Default for LandmarkRanges {
    fn default() -> Self {
        Self {
            min: [Point::NOT_FOUND; Landmark::COUNT],
            max: [Point::ORIGIN; Landmark::COUNT],
            samples: 0,
        }
    }
}

impl LandmarkRanges {
    /// Create untrained ranges.
    pub fn new() -> Self {
        Self::default()
    }

    /// Widen the ranges to cover `set`.
    ///
    /// Rows and columns are tracked independently. Missing landmarks leave
    /// their slot unchanged.
    pub fn fold(&mut self, set: &LandmarkSet) {
        for (landmark, point) in set.iter() {
            let Some(p) = point else {
                continue;
            };
            let i = landmark.index();
            let (min, max) = (&mut self.min[i], &mut self.max[i]);
            min.row = min.row.min(p.row);
            min.col = min.col.min(p.col);
            max.row = max.row.max(p.row);
            max.col = max.col.max(p.col);
        }
        self.samples += 1;
    }

    /// Count the landmarks of `set` inside their trained box.
    ///
    /// The box is half-open, `[min.row, max.row) x [min.col, max.col)`;
    /// missing landmarks never count.
    pub fn count_in_range(&self, set: &LandmarkSet) -> usize {
        set.iter()
            .filter(|&(landmark, point)| {
                point.is_some_and(|p| {
                    let (min, max) = self.bounds(landmark);
                    p.within(min.row, min.col, max.row, max.col)
                })
            })
            .count()
    }

    /// Trained `(min, max)` of one landmark.
    pub fn bounds(&self, landmark: Landmark) -> (Point, Point) {
        let i = landmark.index();
        (self.min[i], self.max[i])
    }

    /// Overwrite the bounds of one landmark.
    pub fn set_bounds(&mut self, landmark: Landmark, min: Point, max: Point) {
        let i = landmark.index();
        self.min[i] = min;
        self.max[i] = max;
    }

    /// Number of landmark sets folded in.
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// True once at least one set was folded in.
    pub fn is_trained(&self) -> bool {
        self.samples > 0
    }
}
