//! Tunables for landmark extraction

use crate::error::{RecogError, RecogResult};
use peoplefinder_core::{LabelGrid, Point};
use peoplefinder_region::ConnectivityType;

/// Options for the landmark locator chain
///
/// The defaults are the hand-tuned values for a 128x64 silhouette.
#[derive(Debug, Clone, PartialEq)]
pub struct SkeletonParams {
    /// Row slack used to step into the body from a detected edge (default: 5)
    pub threshold: i32,
    /// Number of missing columns a tolerant run bridges (default: 1)
    pub run_gap: i32,
    /// Shoulder span divisor giving the arm width (default: 10)
    pub arm_width_divisor: i32,
    /// Extra entries skipped per step when walking the outline toward a
    /// distant row (default: 10)
    pub outline_skip: usize,
    /// Extra entries skipped per step when walking the interior toward a
    /// distant row (default: 100)
    pub interior_skip: usize,
    /// Row distance beyond which the fast skips apply (default: 5)
    pub skip_distance: i32,
    /// Interior entries skipped before the hand search begins (default: 200)
    pub hand_search_offset: usize,
    /// Flood fill connectivity (default: 4-way)
    pub connectivity: ConnectivityType,
}

impl Default for SkeletonParams {
    fn default() -> Self {
        Self {
            threshold: 5,
            run_gap: 1,
            arm_width_divisor: 10,
            outline_skip: 10,
            interior_skip: 100,
            skip_distance: 5,
            hand_search_offset: 200,
            connectivity: ConnectivityType::FourWay,
        }
    }
}

impl SkeletonParams {
    /// Set the row threshold.
    pub fn with_threshold(mut self, threshold: i32) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the tolerant run gap.
    pub fn with_run_gap(mut self, run_gap: i32) -> Self {
        self.run_gap = run_gap;
        self
    }

    /// Set the arm width divisor.
    pub fn with_arm_width_divisor(mut self, divisor: i32) -> Self {
        self.arm_width_divisor = divisor;
        self
    }

    /// Set the extra outline entries skipped per step toward a distant row.
    pub fn with_outline_skip(mut self, skip: usize) -> Self {
        self.outline_skip = skip;
        self
    }

    /// Set the extra interior entries skipped per step toward a distant row.
    pub fn with_interior_skip(mut self, skip: usize) -> Self {
        self.interior_skip = skip;
        self
    }

    /// Set the row distance beyond which the fast skips apply.
    pub fn with_skip_distance(mut self, distance: i32) -> Self {
        self.skip_distance = distance;
        self
    }

    /// Set the interior entries skipped before the hand search.
    pub fn with_hand_search_offset(mut self, offset: usize) -> Self {
        self.hand_search_offset = offset;
        self
    }

    /// Set the flood fill connectivity.
    pub fn with_connectivity(mut self, connectivity: ConnectivityType) -> Self {
        self.connectivity = connectivity;
        self
    }

    /// Check the parameters.
    ///
    /// # Errors
    ///
    /// Returns [`RecogError::InvalidParameter`] if the threshold or arm
    /// width divisor is not positive, or if a distance is negative.
    pub fn validate(&self) -> RecogResult<()> {
        if self.threshold <= 0 {
            return Err(RecogError::InvalidParameter(format!(
                "threshold must be positive, got {}",
                self.threshold
            )));
        }
        if self.arm_width_divisor <= 0 {
            return Err(RecogError::InvalidParameter(format!(
                "arm_width_divisor must be positive, got {}",
                self.arm_width_divisor
            )));
        }
        if self.run_gap < 0 || self.skip_distance < 0 {
            return Err(RecogError::InvalidParameter(
                "run_gap and skip_distance must not be negative".to_string(),
            ));
        }
        Ok(())
    }
}

/// Row limits of the locator search windows for one grid size.
///
/// Derived from the grid height using the proportions tuned on a 128-row
/// grid, where they evaluate to 48, 64, 80 and 70.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchWindows {
    /// Torso scan stops before this row
    pub torso_limit: i32,
    /// Waist scan starts at this row
    pub waist_start: i32,
    /// Waist scan stops before this row
    pub waist_limit: i32,
    /// Foot scan starts at this row
    pub foot_start: i32,
    /// Flood fill seed
    pub seed: Point,
    /// Target corner of the first foot
    pub corner_a: Point,
    /// Target corner of the second foot
    pub corner_b: Point,
}

impl SearchWindows {
    /// Compute the windows for a grid.
    pub fn for_grid(grid: &LabelGrid) -> Self {
        let rows = grid.rows() as i32;
        let cols = grid.cols() as i32;
        Self {
            torso_limit: rows * 3 / 8,
            waist_start: rows / 2,
            waist_limit: rows * 5 / 8,
            foot_start: rows * 35 / 64,
            seed: grid.center(),
            corner_a: Point::new(rows - 1, 1),
            corner_b: Point::new(rows - 1, cols - 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_windows() {
        let grid = LabelGrid::new(128, 64).unwrap();
        let w = SearchWindows::for_grid(&grid);
        assert_eq!(w.torso_limit, 48);
        assert_eq!(w.waist_start, 64);
        assert_eq!(w.waist_limit, 80);
        assert_eq!(w.foot_start, 70);
        assert_eq!(w.seed, Point::new(64, 32));
        assert_eq!(w.corner_a, Point::new(127, 1));
        assert_eq!(w.corner_b, Point::new(127, 63));
    }

    #[test]
    fn test_validate() {
        assert!(SkeletonParams::default().validate().is_ok());
        assert!(SkeletonParams::default().with_threshold(0).validate().is_err());
        assert!(
            SkeletonParams::default()
                .with_arm_width_divisor(-2)
                .validate()
                .is_err()
        );
        assert!(SkeletonParams::default().with_run_gap(-1).validate().is_err());
        assert!(
            SkeletonParams::default()
                .with_skip_distance(-1)
                .validate()
                .is_err()
        );
    }

    #[test]
    fn test_skip_builders() {
        let params = SkeletonParams::default()
            .with_outline_skip(3)
            .with_interior_skip(40)
            .with_skip_distance(8);
        assert_eq!(params.outline_skip, 3);
        assert_eq!(params.interior_skip, 40);
        assert_eq!(params.skip_distance, 8);
        assert!(params.validate().is_ok());

        // no fast skips at all
        let params = SkeletonParams::default()
            .with_outline_skip(0)
            .with_interior_skip(0);
        assert_eq!(params.threshold, 5);
        assert!(params.validate().is_ok());
    }
}
