//! Skeleton rendering
//!
//! Paints a labelled silhouette and its landmarks onto an RGB canvas for
//! visual inspection.

use super::types::{Landmark, LandmarkSet};
use crate::error::RecogResult;
use peoplefinder_core::{Canvas, Color, Label, LabelGrid, Point};

/// Segments connecting the landmarks, drawn from the torso outward.
pub const SKELETON_SEGMENTS: [(Landmark, Landmark); 10] = [
    (Landmark::Head, Landmark::Torso),
    (Landmark::Torso, Landmark::Waist),
    (Landmark::Waist, Landmark::FootA),
    (Landmark::Waist, Landmark::FootB),
    (Landmark::Torso, Landmark::ShoulderLeft),
    (Landmark::ShoulderLeft, Landmark::ElbowLeft),
    (Landmark::ElbowLeft, Landmark::HandLeft),
    (Landmark::Torso, Landmark::ShoulderRight),
    (Landmark::ShoulderRight, Landmark::ElbowRight),
    (Landmark::ElbowRight, Landmark::HandRight),
];

/// Interior fill colour
pub const INTERIOR_COLOR: Color = Color::new(0, 0, 64);
/// Outline colour
pub const OUTLINE_COLOR: Color = Color::RED;
/// Segment colour
pub const SEGMENT_COLOR: Color = Color::MAGENTA;
/// Landmark marker colour
pub const LANDMARK_COLOR: Color = Color::GREEN;
/// Radius of the landmark markers
pub const LANDMARK_RADIUS: u32 = 2;

/// Render a grid and its skeleton.
///
/// Segments with a missing endpoint are skipped, as are markers for missing
/// landmarks. Anything falling off the canvas is clipped.
///
/// # Errors
///
/// Returns an error for an empty grid.
pub fn render_skeleton(grid: &LabelGrid, landmarks: &LandmarkSet) -> RecogResult<Canvas> {
    let mut canvas = Canvas::new(grid.rows(), grid.cols(), Color::BLACK)?;

    for row in 0..grid.rows() {
        let Some(labels) = grid.row(row) else {
            continue;
        };
        for (col, label) in labels.iter().enumerate() {
            let color = match label {
                Label::Interior => INTERIOR_COLOR,
                Label::Outline => OUTLINE_COLOR,
                Label::Background => continue,
            };
            canvas.set_color(Point::new(row as i32, col as i32), color);
        }
    }

    for (from, to) in SKELETON_SEGMENTS {
        if let (Some(a), Some(b)) = (landmarks.get(from), landmarks.get(to)) {
            canvas.render_line(a, b, SEGMENT_COLOR);
        }
    }

    for p in landmarks.iter().filter_map(|(_, p)| p) {
        canvas.set_color(p, LANDMARK_COLOR);
        canvas.render_circle(p, LANDMARK_RADIUS, LANDMARK_COLOR);
    }

    Ok(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segments_cover_every_landmark() {
        for l in Landmark::ALL {
            assert!(
                SKELETON_SEGMENTS
                    .iter()
                    .any(|&(a, b)| a == l || b == l)
            );
        }
    }

    #[test]
    fn test_render_labels_and_markers() {
        let mut grid = LabelGrid::new(20, 20).unwrap();
        grid.set(0, 0, Label::Outline).unwrap();
        grid.set(0, 1, Label::Interior).unwrap();

        let mut set = LandmarkSet::new();
        set.set(Landmark::Head, Some(Point::new(5, 5)));
        set.set(Landmark::Torso, Some(Point::new(15, 5)));

        let canvas = render_skeleton(&grid, &set).unwrap();
        assert_eq!(canvas.get_rgb(0, 0), Some((255, 0, 0)));
        assert_eq!(canvas.get_rgb(0, 1), Some((0, 0, 64)));
        assert_eq!(canvas.get_rgb(10, 5), Some((255, 0, 255)));
        assert_eq!(canvas.get_rgb(5, 5), Some((0, 255, 0)));
        assert_eq!(canvas.get_rgb(5, 7), Some((0, 255, 0)));
        assert_eq!(canvas.get_rgb(19, 19), Some((0, 0, 0)));
    }

    #[test]
    fn test_render_empty_grid_fails() {
        assert!(render_skeleton(&LabelGrid::empty(), &LandmarkSet::new()).is_err());
    }
}
