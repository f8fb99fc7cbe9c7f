//! Body axis landmark locators
//!
//! Head, torso, waist, feet and shoulders. Each locator scans the interior
//! sequence forward from the cursor left by its predecessor and returns the
//! landmark with the cursor for the next locator, or `None` when its search
//! window holds no pixel.

use super::params::{SearchWindows, SkeletonParams};
use super::runs::{Run, row_runs, skip_to_row, tolerant_runs};
use super::types::{Halfway, Located, Shoulders};
use peoplefinder_core::Point;

/// Locate the head.
///
/// The topmost interior pixel, pushed `threshold` rows into the body. The
/// cursor stays at the start of the sequence.
pub fn locate_head(interior: &[Point], params: &SkeletonParams) -> Option<Located> {
    let top = interior.first()?;
    Some(Located {
        point: top.offset(params.threshold, 0),
        cursor: 0,
    })
}

/// Locate the torso at the narrowest row below the head.
///
/// Rows from `head.row + threshold` up to the torso limit are measured by
/// pixel count; the first row with the smallest span wins. The landmark is
/// centred on that row's span and moved `threshold` rows down.
pub fn locate_torso(
    interior: &[Point],
    params: &SkeletonParams,
    windows: &SearchWindows,
    head: Located,
) -> Option<Located> {
    let mut limit = windows.torso_limit;
    if limit < head.point.row {
        limit = head.point.row + 1;
    }

    let start = skip_to_row(interior, head.cursor, head.point.row + params.threshold);
    let runs = row_runs(interior, start, limit);

    let best = runs
        .iter()
        .fold(None::<&Run>, |best, run| match best {
            Some(b) if run.span >= b.span => Some(b),
            _ => Some(run),
        })?;

    let end = interior[best.end];
    Some(Located {
        point: Point::new(end.row + params.threshold, end.col - best.span / 2),
        cursor: best.end,
    })
}

/// Locate the waist at the widest tolerant run of the lower body.
///
/// Scans rows from `waist_start + threshold` up to the waist limit. The
/// landmark is centred on the widest run and moved `threshold` rows up.
/// When no run is wider than a single pixel the first pixel of the window
/// is used.
pub fn locate_waist(
    interior: &[Point],
    params: &SkeletonParams,
    windows: &SearchWindows,
    torso: Located,
) -> Option<Located> {
    let mut upper = windows.waist_start;
    if upper < torso.point.row {
        upper = torso.point.row + 1;
    }

    let start = skip_to_row(interior, torso.cursor, upper + params.threshold);
    let runs = tolerant_runs(interior, start, windows.waist_limit, params.run_gap);
    let best = widest(&runs)?;

    let end = interior[best.end];
    Some(Located {
        point: Point::new(end.row - params.threshold, end.col - best.span / 2),
        cursor: best.end,
    })
}

/// Locate the foot closest to `corner`.
///
/// Every interior pixel from row `foot_start + threshold` to the end of the
/// sequence is a candidate. Ties keep the earliest pixel.
pub fn locate_foot(
    interior: &[Point],
    params: &SkeletonParams,
    windows: &SearchWindows,
    waist: Located,
    corner: Point,
) -> Option<Point> {
    let mut upper = windows.foot_start;
    if upper < waist.point.row {
        upper = waist.point.row + 1;
    }

    let start = skip_to_row(interior, waist.cursor, upper + params.threshold);
    let mut best: Option<(Point, f64)> = None;
    for &p in &interior[start..] {
        let dist = p.distance(corner);
        if best.is_none_or(|(_, d)| dist < d) {
            best = Some((p, dist));
        }
    }
    best.map(|(p, _)| p)
}

/// Locate both shoulders from the widest tolerant run of the `threshold`
/// rows starting at the torso row.
///
/// The arm width is a fraction of that span and insets both shoulders from
/// the run ends.
pub fn locate_shoulders(
    interior: &[Point],
    params: &SkeletonParams,
    torso: Located,
) -> Option<Shoulders> {
    let start = skip_to_row(interior, torso.cursor, torso.point.row);
    let runs = tolerant_runs(
        interior,
        start,
        torso.point.row + params.threshold,
        params.run_gap,
    );
    let best = widest(&runs)?;

    let end = interior[best.end];
    let arm_width = (best.span / params.arm_width_divisor).max(1);
    let a = end.col - best.span + arm_width;
    let b = end.col - arm_width;

    Some(Shoulders {
        left: Point::new(end.row, a.min(b)),
        right: Point::new(end.row, a.max(b)),
        arm_width,
        cursor: best.end,
    })
}

/// Midpoint between torso and waist, with integer halving of each axis,
/// and its distance from the torso.
pub fn halfway_point(torso: Point, waist: Point) -> Halfway {
    let half_row = (waist.row - torso.row) / 2;
    let half_col = (waist.col - torso.col) / 2;
    let node = torso.offset(half_row, half_col);
    Halfway {
        node,
        distance: torso.distance(node),
    }
}

/// First run with the largest span.
fn widest(runs: &[Run]) -> Option<&Run> {
    runs.iter().fold(None, |best, run| match best {
        Some(b) if run.span <= b.span => Some(b),
        _ => Some(run),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use peoplefinder_core::LabelGrid;
    use std::ops::RangeInclusive;

    fn windows() -> SearchWindows {
        SearchWindows::for_grid(&LabelGrid::new(128, 64).unwrap())
    }

    fn block(rows: RangeInclusive<i32>, cols: RangeInclusive<i32>) -> Vec<Point> {
        let mut v = Vec::new();
        for r in rows {
            for c in cols.clone() {
                v.push(Point::new(r, c));
            }
        }
        v
    }

    #[test]
    fn test_head_is_first_pixel() {
        let params = SkeletonParams::default();
        let s = block(3..=4, 10..=12);
        let head = locate_head(&s, &params).unwrap();
        assert_eq!(head.point, Point::new(8, 10));
        assert_eq!(head.cursor, 0);
        assert!(locate_head(&[], &params).is_none());
    }

    #[test]
    fn test_torso_narrowest_row() {
        let params = SkeletonParams::default();
        let mut s = block(2..=11, 10..=20);
        s.extend(block(12..=12, 14..=16));
        s.extend(block(13..=30, 8..=22));
        let head = locate_head(&s, &params).unwrap();
        assert_eq!(head.point, Point::new(7, 10));
        let torso = locate_torso(&s, &params, &windows(), head).unwrap();
        // row 12 spans 3 pixels, last one at col 16
        assert_eq!(torso.point, Point::new(17, 15));
        assert_eq!(s[torso.cursor], Point::new(12, 16));
    }

    #[test]
    fn test_torso_empty_window() {
        let params = SkeletonParams::default();
        let s = block(50..=70, 10..=50);
        let head = locate_head(&s, &params).unwrap();
        assert!(locate_torso(&s, &params, &windows(), head).is_none());
    }

    #[test]
    fn test_waist_widest_run() {
        let params = SkeletonParams::default();
        let mut s = block(60..=70, 20..=30);
        s.extend(block(71..=71, 10..=40));
        s.extend(block(72..=79, 20..=30));
        let torso = Located {
            point: Point::new(20, 25),
            cursor: 0,
        };
        let waist = locate_waist(&s, &params, &windows(), torso).unwrap();
        assert_eq!(waist.point, Point::new(66, 25));
        assert_eq!(s[waist.cursor], Point::new(71, 40));
    }

    #[test]
    fn test_waist_single_pixels_use_window_start() {
        let params = SkeletonParams::default();
        let s: Vec<Point> = (60..100).map(|r| Point::new(r, 3 + (r % 2) * 4)).collect();
        let torso = Located {
            point: Point::new(20, 5),
            cursor: 0,
        };
        let waist = locate_waist(&s, &params, &windows(), torso).unwrap();
        assert_eq!(waist.point, Point::new(64, 7));
        assert_eq!(s[waist.cursor], Point::new(69, 7));
    }

    #[test]
    fn test_foot_closest_to_corner() {
        let params = SkeletonParams::default();
        let mut s = block(60..=100, 20..=40);
        s.extend(block(101..=120, 5..=10));
        let waist = Located {
            point: Point::new(65, 30),
            cursor: 0,
        };
        let w = windows();
        let foot = locate_foot(&s, &params, &w, waist, w.corner_a).unwrap();
        assert_eq!(foot, Point::new(120, 5));
        let foot = locate_foot(&s, &params, &w, waist, w.corner_b).unwrap();
        assert_eq!(foot, Point::new(100, 40));
    }

    #[test]
    fn test_foot_window_below_waist() {
        let params = SkeletonParams::default();
        let s = block(60..=90, 20..=40);
        let waist = Located {
            point: Point::new(90, 30),
            cursor: 0,
        };
        let w = windows();
        assert!(locate_foot(&s, &params, &w, waist, w.corner_a).is_none());
    }

    #[test]
    fn test_shoulders_order_and_width() {
        let params = SkeletonParams::default();
        let mut s = block(10..=12, 20..=40);
        s.extend(block(13..=20, 10..=50));
        let torso = Located {
            point: Point::new(11, 30),
            cursor: 0,
        };
        let sh = locate_shoulders(&s, &params, torso).unwrap();
        assert_eq!(sh.arm_width, 4);
        assert_eq!(sh.left, Point::new(13, 14));
        assert_eq!(sh.right, Point::new(13, 46));
        assert_eq!(s[sh.cursor], Point::new(13, 50));
    }

    #[test]
    fn test_shoulders_narrow_run_keeps_order() {
        let params = SkeletonParams::default();
        let s = block(10..=20, 30..=30);
        let torso = Located {
            point: Point::new(10, 30),
            cursor: 0,
        };
        let sh = locate_shoulders(&s, &params, torso).unwrap();
        assert_eq!(sh.arm_width, 1);
        assert!(sh.left.col <= sh.right.col);
    }

    #[test]
    fn test_halfway_point_truncates() {
        let h = halfway_point(Point::new(15, 30), Point::new(56, 33));
        assert_eq!(h.node, Point::new(35, 31));
        assert!((h.distance - (401.0f64).sqrt()).abs() < 1e-12);
    }
}
