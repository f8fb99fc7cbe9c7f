//! peoplefinder-region - Region processing for silhouettes
//!
//! This crate prepares an outlined silhouette for landmark extraction:
//!
//! - **Seed fill** - Flood fill bounded by the outline, plus the usability
//!   check that rejects leaked or unseeded fills
//! - **Outline extraction** - Binary mask to outline-only grid
//! - **Pixel indexing** - Row-major interior and outline coordinate lists
//!
//! # Example
//!
//! ```
//! use peoplefinder_core::{Label, Mask, Point};
//! use peoplefinder_region::{ConnectivityType, PixelIndex, fill_silhouette, outline_from_mask};
//!
//! let mut mask = Mask::new(16, 8).unwrap();
//! for row in 4..12 {
//!     mask.fill_span(row, 2, 5);
//! }
//!
//! let mut grid = outline_from_mask(&mask).unwrap();
//! let outcome = fill_silhouette(&mut grid, Point::new(8, 4), ConnectivityType::FourWay).unwrap();
//! assert!(outcome.is_usable());
//!
//! let index = PixelIndex::build(&grid);
//! assert_eq!(index.interior.len(), grid.count(Label::Interior));
//! ```

pub mod boundary;
pub mod error;
pub mod pixels;
pub mod seedfill;

// Re-export core types
pub use peoplefinder_core;

pub use boundary::outline_from_mask;
pub use error::{RegionError, RegionResult};
pub use pixels::PixelIndex;
pub use seedfill::{ConnectivityType, FillOutcome, fill_silhouette, floodfill};
