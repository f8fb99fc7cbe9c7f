//! Directory-driven training, testing and annotation

use crate::PeopleFinderResult;
use log::info;
use peoplefinder_core::LabelGrid;
use peoplefinder_io::{ImageFormat, LoadOptions, load_masks_from_dir, write_image};
use peoplefinder_recog::{
    PeopleFinder, SkeletonParams, TrainingSummary, Verdict, extract_skeleton, render_skeleton,
};
use peoplefinder_region::outline_from_mask;
use std::fs;
use std::path::{Path, PathBuf};

/// Load every decodable image in `dir` as an outlined grid.
///
/// Files are visited in sorted name order; undecodable files are skipped.
pub fn load_grids_from_dir<P: AsRef<Path>>(
    dir: P,
    options: &LoadOptions,
) -> PeopleFinderResult<(Vec<PathBuf>, Vec<LabelGrid>)> {
    let masks = load_masks_from_dir(dir, options)?;
    let mut paths = Vec::with_capacity(masks.len());
    let mut grids = Vec::with_capacity(masks.len());
    for (path, mask) in masks {
        grids.push(outline_from_mask(&mask)?);
        paths.push(path);
    }
    Ok((paths, grids))
}

/// Train `finder` on every silhouette image in `dir`.
pub fn train_from_dir<P: AsRef<Path>>(
    finder: &mut PeopleFinder,
    dir: P,
    options: &LoadOptions,
) -> PeopleFinderResult<TrainingSummary> {
    let dir = dir.as_ref();
    let (_, mut grids) = load_grids_from_dir(dir, options)?;
    let summary = finder.train(&mut grids)?;
    info!(
        "trained on {}: {} accepted, {} rejected",
        dir.display(),
        summary.accepted,
        summary.rejected
    );
    Ok(summary)
}

/// Classify every silhouette image in `dir`, pairing each verdict with
/// its source file.
pub fn test_from_dir<P: AsRef<Path>>(
    finder: &mut PeopleFinder,
    dir: P,
    options: &LoadOptions,
) -> PeopleFinderResult<Vec<(PathBuf, Verdict)>> {
    let (paths, mut grids) = load_grids_from_dir(dir, options)?;
    let verdicts = finder.test(&mut grids)?;
    Ok(paths.into_iter().zip(verdicts).collect())
}

/// Extract the skeleton of every image in `src` and write the annotated
/// canvas to `dst` as `<stem>.png`.
///
/// Malformed silhouettes are still written, showing only the landmarks
/// that were found. Returns the written paths.
pub fn annotate_dir<P: AsRef<Path>, Q: AsRef<Path>>(
    src: P,
    dst: Q,
    params: &SkeletonParams,
    options: &LoadOptions,
) -> PeopleFinderResult<Vec<PathBuf>> {
    let dst = dst.as_ref();
    fs::create_dir_all(dst).map_err(peoplefinder_io::IoError::from)?;

    let (paths, grids) = load_grids_from_dir(src, options)?;
    let mut written = Vec::with_capacity(paths.len());
    for (path, mut grid) in paths.into_iter().zip(grids) {
        let skeleton = extract_skeleton(&mut grid, params)?;
        let canvas = render_skeleton(&grid, &skeleton.landmarks)?;
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "silhouette".to_string());
        let out = dst.join(format!("{}.{}", stem, ImageFormat::Png.extension()));
        write_image(&canvas, &out, ImageFormat::Png)?;
        info!(
            "annotated {} ({:?}, {} landmarks)",
            out.display(),
            skeleton.status,
            skeleton.landmarks.found_count()
        );
        written.push(out);
    }
    Ok(written)
}
