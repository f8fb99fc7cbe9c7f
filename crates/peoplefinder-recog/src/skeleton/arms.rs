//! Elbow and hand locators
//!
//! Both arms are located relative to the shoulders, with the torso to waist
//! halfway distance standing in for the length of an arm segment. The elbow
//! follows one side of the body downward; the hand is projected from the
//! elbow along the average heading of the nearby outline.

use super::params::SkeletonParams;
use super::runs::{fast_skip_to_row, skip_to_row};
use super::types::{Halfway, Shoulders};
use peoplefinder_core::{Label, LabelGrid, Point};
use peoplefinder_region::PixelIndex;

/// Outline walk neighbour order: lower row first, then the same row, then
/// the upper row, each scanned from the larger column.
pub const WALK_ORDER: [(i32, i32); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

/// Shared inputs of the arm locators for one silhouette.
#[derive(Debug, Clone, Copy)]
pub struct ArmContext<'a> {
    pub grid: &'a LabelGrid,
    pub index: &'a PixelIndex,
    pub params: &'a SkeletonParams,
    pub torso: Point,
    pub waist: Point,
    pub shoulders: Shoulders,
    pub halfway: Halfway,
}

/// Locate the elbow below `shoulder`.
///
/// Walks the interior rows from the shoulder down to the halfway row. On
/// each row the candidate is the pixel `arm_width` columns in from the body
/// edge on the shoulder's side: the first pixel of the row for the left
/// side, the last pixel of the previous row for the right side. Among the
/// candidates actually present, the one whose distance from the shoulder is
/// closest to the halfway distance wins; later rows win ties.
pub fn locate_elbow(ctx: &ArmContext<'_>, shoulder: Point) -> Option<Point> {
    let interior = ctx.index.interior.as_slice();
    let arm = ctx.shoulders.arm_width;
    let right_side = shoulder.col >= ctx.torso.col;

    let candidate = |k: usize| -> Point {
        let p = interior[k];
        if right_side {
            let prev = interior[k.saturating_sub(1)];
            Point::new(p.row, prev.col - arm)
        } else {
            Point::new(p.row, p.col + arm)
        }
    };

    let start = skip_to_row(interior, ctx.shoulders.cursor, shoulder.row);
    if start >= interior.len() {
        return None;
    }

    let mut valid = candidate(start);
    let mut best = valid;
    let mut closest = f64::INFINITY;

    for k in start + 1..interior.len() {
        let p = interior[k];
        if p.row > ctx.halfway.node.row {
            break;
        }
        if p == valid {
            let diff = (ctx.halfway.distance - p.distance(shoulder)).abs();
            if diff <= closest {
                closest = diff;
                best = p;
            }
        }
        if p.row != valid.row {
            valid = candidate(k);
        }
    }

    Some(best)
}

/// Locate the hand beyond `elbow`.
///
/// The outline is entered near row `elbow.row - arm_width` and followed for
/// about half the halfway distance; the average step heading projects a
/// goal point one halfway distance from the elbow, and the interior pixel
/// closest to the goal is the hand.
pub fn locate_hand(ctx: &ArmContext<'_>, elbow: Point) -> Option<Point> {
    let outline = ctx.index.outline.as_slice();
    let interior = ctx.index.interior.as_slice();
    if outline.is_empty() || interior.is_empty() {
        return None;
    }

    let params = ctx.params;
    let target = elbow.row - ctx.shoulders.arm_width;
    let i = fast_skip_to_row(
        outline,
        0,
        target,
        params.skip_distance,
        params.outline_skip,
    );
    let j = fast_skip_to_row(
        interior,
        ctx.shoulders.cursor,
        target,
        params.skip_distance,
        params.interior_skip,
    );

    // the right arm enters from the previous outline pixel
    let entry = if elbow.col >= ctx.waist.col {
        outline[i.saturating_sub(1)]
    } else {
        outline[i]
    };

    let reach = ctx.halfway.distance;
    let heading = outline_heading(ctx.grid, entry, reach / 2.0);
    let goal = Point::new(
        (elbow.row as f64 + reach * heading.cos()) as i32,
        (elbow.col as f64 + reach * heading.sin()) as i32,
    );
    let row_bound = (elbow.row as f64 + reach) as i32;

    closest_interior_pixel(interior, goal, row_bound, j + params.hand_search_offset)
}

/// Follow the outline from `start` and return the mean step heading.
///
/// Each step moves to the first outline neighbour in [`WALK_ORDER`] that is
/// not the pixel just left. The heading of a step is
/// `atan2(dcol, drow)`, so straight down is 0. The walk takes
/// `floor(max_steps) + 1` steps; a step with no neighbour to move to still
/// counts.
pub fn outline_heading(grid: &LabelGrid, start: Point, max_steps: f64) -> f64 {
    let mut curr = start;
    let mut prev: Option<Point> = None;
    let mut sum = 0.0;
    let mut steps = 0u32;

    while steps as f64 <= max_steps {
        let next = WALK_ORDER
            .iter()
            .map(|&(dr, dc)| curr.offset(dr, dc))
            .find(|&n| grid.label_at(n) == Some(Label::Outline) && Some(n) != prev);
        if let Some(next) = next {
            sum += ((next.col - curr.col) as f64).atan2((next.row - curr.row) as f64);
            prev = Some(curr);
            curr = next;
        }
        steps += 1;
    }

    if steps == 0 { 0.0 } else { sum / steps as f64 }
}

/// Find the interior pixel closest to `goal`.
///
/// Searches from index `start` while rows stay at or above `row_bound`.
/// An exact hit ends the search; otherwise the last pixel at the minimum
/// distance is returned.
pub fn closest_interior_pixel(
    interior: &[Point],
    goal: Point,
    row_bound: i32,
    start: usize,
) -> Option<Point> {
    let mut best = None;
    let mut best_dist = f64::INFINITY;

    for &p in interior.iter().skip(start) {
        if p.row > row_bound {
            break;
        }
        if p == goal {
            return Some(p);
        }
        let dist = p.distance(goal);
        if dist <= best_dist {
            best_dist = dist;
            best = Some(p);
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    #[test]
    fn test_closest_exact_hit() {
        let s: Vec<Point> = (0..5).map(|c| Point::new(3, c)).collect();
        assert_eq!(
            closest_interior_pixel(&s, Point::new(3, 2), 10, 0),
            Some(Point::new(3, 2))
        );
    }

    #[test]
    fn test_closest_ties_keep_last() {
        let s = vec![Point::new(0, 0), Point::new(0, 4)];
        assert_eq!(
            closest_interior_pixel(&s, Point::new(0, 2), 10, 0),
            Some(Point::new(0, 4))
        );
    }

    #[test]
    fn test_closest_respects_bounds() {
        let s: Vec<Point> = (0..10).map(|r| Point::new(r, 0)).collect();
        assert_eq!(
            closest_interior_pixel(&s, Point::new(9, 0), 4, 0),
            Some(Point::new(4, 0))
        );
        assert_eq!(closest_interior_pixel(&s, Point::new(9, 0), 4, 20), None);
    }

    #[test]
    fn test_heading_straight_down() {
        let mut grid = LabelGrid::new(20, 5).unwrap();
        for r in 0..20 {
            grid.set(r, 2, Label::Outline).unwrap();
        }
        let h = outline_heading(&grid, Point::new(0, 2), 4.0);
        assert_eq!(h, 0.0);
    }

    #[test]
    fn test_heading_averages_steps() {
        // down one row, diagonally onto the bottom row, then right
        let mut grid = LabelGrid::new(6, 6).unwrap();
        for p in [(0, 0), (1, 0), (2, 0), (2, 1), (2, 2), (2, 3)] {
            grid.set(p.0, p.1, Label::Outline).unwrap();
        }
        let h = outline_heading(&grid, Point::new(0, 0), 3.0);
        let expected = (0.0 + FRAC_PI_4 + FRAC_PI_2 * 2.0) / 4.0;
        assert!((h - expected).abs() < 1e-12);
    }

    #[test]
    fn test_heading_stuck_walk() {
        let grid = LabelGrid::new(4, 4).unwrap();
        assert_eq!(outline_heading(&grid, Point::new(1, 1), 2.0), 0.0);
    }
}
