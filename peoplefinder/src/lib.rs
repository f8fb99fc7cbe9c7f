//! peoplefinder - Pedestrian silhouette classification
//!
//! Classifies 128×64 binary silhouettes as pedestrians from eleven
//! hand-tuned body landmarks. Training learns a bounding box per landmark
//! from known pedestrians; testing counts how many landmarks of a new
//! silhouette fall inside their boxes.
//!
//! # Overview
//!
//! - Image I/O and dataset loading ([`io`])
//! - Outline extraction and seeded flood fill ([`region`])
//! - Landmark extraction, training and classification ([`recog`])
//! - Directory helpers: [`train_from_dir`], [`test_from_dir`],
//!   [`annotate_dir`]
//!
//! # Example
//!
//! ```no_run
//! use peoplefinder::{LoadOptions, PeopleFinder, test_from_dir, train_from_dir};
//!
//! let opts = LoadOptions::default();
//! let mut finder = PeopleFinder::new();
//! train_from_dir(&mut finder, "data/train", &opts).unwrap();
//! for (path, verdict) in test_from_dir(&mut finder, "data/test", &opts).unwrap() {
//!     println!("{}: {}", path.display(), verdict);
//! }
//! ```

mod dataset;
mod error;

pub use dataset::{annotate_dir, load_grids_from_dir, test_from_dir, train_from_dir};
pub use error::{PeopleFinderError, PeopleFinderResult};

// Re-export core types (primary data structures used everywhere)
pub use peoplefinder_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use peoplefinder_io as io;
pub use peoplefinder_recog as recog;
pub use peoplefinder_region as region;

pub use peoplefinder_io::LoadOptions;
pub use peoplefinder_recog::{
    Landmark, LandmarkSet, PeopleFinder, SkeletonParams, SkeletonStatus, Verdict,
};
