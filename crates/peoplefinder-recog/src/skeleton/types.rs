//! Type definitions for landmark extraction

use peoplefinder_core::Point;
use std::fmt;

/// One of the eleven body landmarks, in landmark set order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Landmark {
    Head = 0,
    Torso = 1,
    Waist = 2,
    /// Foot closest to the bottom-left corner
    FootA = 3,
    /// Foot closest to the bottom-right corner
    FootB = 4,
    /// Shoulder on the smaller-column side
    ShoulderLeft = 5,
    /// Shoulder on the larger-column side
    ShoulderRight = 6,
    ElbowLeft = 7,
    HandLeft = 8,
    ElbowRight = 9,
    HandRight = 10,
}

impl Landmark {
    /// Number of landmarks in a set
    pub const COUNT: usize = 11;

    /// All landmarks in set order
    pub const ALL: [Landmark; Landmark::COUNT] = [
        Landmark::Head,
        Landmark::Torso,
        Landmark::Waist,
        Landmark::FootA,
        Landmark::FootB,
        Landmark::ShoulderLeft,
        Landmark::ShoulderRight,
        Landmark::ElbowLeft,
        Landmark::HandLeft,
        Landmark::ElbowRight,
        Landmark::HandRight,
    ];

    /// Slot index, 0 to 10
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Human readable name
    pub fn name(self) -> &'static str {
        match self {
            Landmark::Head => "head",
            Landmark::Torso => "torso",
            Landmark::Waist => "waist",
            Landmark::FootA => "foot A",
            Landmark::FootB => "foot B",
            Landmark::ShoulderLeft => "left shoulder",
            Landmark::ShoulderRight => "right shoulder",
            Landmark::ElbowLeft => "left elbow",
            Landmark::HandLeft => "left hand",
            Landmark::ElbowRight => "right elbow",
            Landmark::HandRight => "right hand",
        }
    }
}

impl fmt::Display for Landmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The eleven landmark coordinates of one silhouette.
///
/// A slot is `None` when its locator found nothing or never ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LandmarkSet {
    points: [Option<Point>; Landmark::COUNT],
}

impl LandmarkSet {
    /// Create a set with every slot empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a set from explicit slot values.
    pub fn from_points(points: [Option<Point>; Landmark::COUNT]) -> Self {
        Self { points }
    }

    /// Get a landmark.
    #[inline]
    pub fn get(&self, landmark: Landmark) -> Option<Point> {
        self.points[landmark.index()]
    }

    /// Set a landmark.
    #[inline]
    pub fn set(&mut self, landmark: Landmark, point: Option<Point>) {
        self.points[landmark.index()] = point;
    }

    /// Iterate over `(landmark, point)` pairs in set order.
    pub fn iter(&self) -> impl Iterator<Item = (Landmark, Option<Point>)> + '_ {
        Landmark::ALL.iter().map(|&l| (l, self.get(l)))
    }

    /// Number of landmarks that were found.
    pub fn found_count(&self) -> usize {
        self.points.iter().filter(|p| p.is_some()).count()
    }

    /// Raw slot values.
    pub fn as_slice(&self) -> &[Option<Point>] {
        &self.points
    }
}

/// Outcome of a skeleton extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkeletonStatus {
    /// All locators ran
    Valid,
    /// The flood fill leaked, never started, or the grid was empty
    Degenerate,
    /// The torso landmark fell outside the grid, or none was found
    TorsoOutOfBounds,
}

impl SkeletonStatus {
    /// True for [`SkeletonStatus::Valid`].
    pub fn is_valid(self) -> bool {
        self == SkeletonStatus::Valid
    }

    /// True when the silhouette must not be trusted.
    pub fn is_flagged(self) -> bool {
        !self.is_valid()
    }
}

/// Landmarks of one silhouette together with the extraction status.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Skeleton {
    /// Landmark coordinates
    pub landmarks: LandmarkSet,
    /// Extraction status
    pub status: SkeletonStatus,
}

impl Skeleton {
    /// A skeleton rejected before any locator ran.
    pub fn degenerate() -> Self {
        Self {
            landmarks: LandmarkSet::new(),
            status: SkeletonStatus::Degenerate,
        }
    }
}

/// A located point and the cursor position the next locator starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Located {
    /// Landmark coordinate
    pub point: Point,
    /// Index into the interior sequence
    pub cursor: usize,
}

/// Both shoulders and the arm width derived from the shoulder span.
///
/// `left.col <= right.col` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shoulders {
    pub left: Point,
    pub right: Point,
    /// `max(1, span / divisor)`
    pub arm_width: i32,
    /// Index of the end of the widest run in the interior sequence
    pub cursor: usize,
}

/// Midpoint between torso and waist and the distance from the torso to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Halfway {
    pub node: Point,
    pub distance: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landmark_indices() {
        for (i, l) in Landmark::ALL.iter().enumerate() {
            assert_eq!(l.index(), i);
        }
        assert_eq!(Landmark::HandRight.index(), 10);
    }

    #[test]
    fn test_landmark_set() {
        let mut set = LandmarkSet::new();
        assert_eq!(set.found_count(), 0);
        set.set(Landmark::Waist, Some(Point::new(60, 30)));
        assert_eq!(set.get(Landmark::Waist), Some(Point::new(60, 30)));
        assert_eq!(set.found_count(), 1);
        let found: Vec<_> = set.iter().filter_map(|(l, p)| p.map(|_| l)).collect();
        assert_eq!(found, vec![Landmark::Waist]);
    }

    #[test]
    fn test_status_flags() {
        assert!(SkeletonStatus::Valid.is_valid());
        assert!(SkeletonStatus::Degenerate.is_flagged());
        assert!(SkeletonStatus::TorsoOutOfBounds.is_flagged());
    }
}
