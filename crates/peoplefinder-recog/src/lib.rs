//! peoplefinder-recog - Landmark extraction and pedestrian classification
//!
//! This crate provides:
//!
//! - **Skeleton extraction**: eleven body landmarks from an outlined
//!   silhouette, found by a chain of geometric scans
//! - **Range training**: per-landmark bounding boxes from known pedestrians
//! - **Classification**: a three-way verdict from the number of landmarks
//!   inside their trained boxes
//! - **Annotation**: rendering a silhouette and its skeleton
//!
//! # Quick Start
//!
//! ```no_run
//! use peoplefinder_recog::PeopleFinder;
//! use peoplefinder_core::LabelGrid;
//!
//! let mut training: Vec<LabelGrid> = Vec::new(); // outlined silhouettes
//! let mut finder = PeopleFinder::new();
//! finder.train(&mut training).unwrap();
//!
//! let mut frames: Vec<LabelGrid> = Vec::new();
//! for verdict in finder.test(&mut frames).unwrap() {
//!     println!("{}", verdict);
//! }
//! ```
//!
//! # Modules
//!
//! - [`skeleton`]: Landmark locators and extraction
//! - [`classify`]: Range training and classification

pub mod classify;
mod error;
pub mod skeleton;

pub use error::{RecogError, RecogResult};

// Re-export commonly used types
pub use classify::{
    Classification, LandmarkRanges, PeopleFinder, TrainingSummary, Verdict, judge,
};
pub use skeleton::{
    Landmark, LandmarkSet, Skeleton, SkeletonParams, SkeletonStatus, extract_skeleton,
    render_skeleton,
};

// Re-export core for convenience
pub use peoplefinder_core;
