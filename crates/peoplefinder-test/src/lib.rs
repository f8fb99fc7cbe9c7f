//! peoplefinder-test - Regression test framework for peoplefinder
//!
//! Provides the [`RegParams`] check tracker used by every `*_reg` test and a
//! set of synthetic silhouettes, so that tests never depend on external
//! image files.
//!
//! # Usage
//!
//! ```ignore
//! use peoplefinder_test::{RegParams, stick_figure};
//!
//! let mut rp = RegParams::new("skeleton");
//! let grid = stick_figure().unwrap();
//! rp.compare_values(128.0, grid.rows() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "display" to write rendered outputs to
//!   `tests/regout`

mod error;
mod params;
mod silhouette;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};
pub use silhouette::{
    SilhouetteBuilder, filled_block, open_outline, seed_on_outline, stick_figure,
    stick_figure_at, stick_figure_builder, top_edge_figure,
};

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // peoplefinder-test is at crates/peoplefinder-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}

/// Get a scratch directory under regout, created fresh for one test.
pub fn scratch_dir(name: &str) -> TestResult<String> {
    let dir = format!("{}/scratch/{}", regout_dir(), name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
