//! Range-based classification
//!
//! Training folds the landmarks of known pedestrians into per-landmark
//! bounding boxes; testing counts how many landmarks of a new silhouette
//! fall inside them.
//!
//! # Example
//!
//! ```
//! use peoplefinder_recog::classify::{LandmarkRanges, Verdict, judge};
//! use peoplefinder_recog::skeleton::{Landmark, LandmarkSet};
//! use peoplefinder_core::Point;
//!
//! let mut ranges = LandmarkRanges::new();
//! let mut set = LandmarkSet::new();
//! set.set(Landmark::Head, Some(Point::new(7, 30)));
//! ranges.fold(&set);
//!
//! // a single point gives an empty half-open box
//! assert_eq!(judge(&ranges, &set), Verdict::Noise);
//! ```

mod finder;
mod ranges;
mod verdict;

pub use finder::*;
pub use ranges::*;
pub use verdict::*;
