//! Landmark extraction
//!
//! Derives eleven body landmarks from an outlined silhouette using only
//! local geometry over the row-major interior and outline sequences.
//!
//! # Overview
//!
//! The locators form a chain, each starting from the cursor the previous one
//! left in the interior sequence:
//! 1. Head: the topmost interior pixel
//! 2. Torso: the narrowest row below the head
//! 3. Waist: the widest tolerant run in the lower body
//! 4. Feet: the pixels closest to the two bottom corners
//! 5. Shoulders: the widest tolerant run at the torso row
//! 6. Elbows: down each side of the body, about one halfway distance from
//!    the shoulder
//! 7. Hands: projected from each elbow along the local outline heading
//!
//! # Example
//!
//! ```
//! use peoplefinder_recog::skeleton::{SkeletonParams, extract_skeleton};
//! use peoplefinder_core::LabelGrid;
//!
//! // an unoutlined grid leaks, so no landmarks are produced
//! let mut grid = LabelGrid::new(128, 64).unwrap();
//! let skeleton = extract_skeleton(&mut grid, &SkeletonParams::default()).unwrap();
//! assert!(skeleton.status.is_flagged());
//! ```

mod annotate;
mod arms;
mod extract;
mod locate;
mod params;
mod runs;
mod types;

pub use annotate::*;
pub use arms::*;
pub use extract::*;
pub use locate::*;
pub use params::*;
pub use types::*;
