//! Skeleton extraction
//!
//! Drives the region fill, the pixel index and the locator chain in their
//! fixed order for one silhouette.

use super::arms::{ArmContext, locate_elbow, locate_hand};
use super::locate::{
    halfway_point, locate_foot, locate_head, locate_shoulders, locate_torso, locate_waist,
};
use super::params::{SearchWindows, SkeletonParams};
use super::types::{Landmark, LandmarkSet, Skeleton, SkeletonStatus};
use crate::error::RecogResult;
use log::debug;
use peoplefinder_core::LabelGrid;
use peoplefinder_region::{PixelIndex, fill_silhouette};

/// Extract the eleven landmarks of an outlined silhouette.
///
/// The grid is filled in place from its centre. A fill that leaks to the
/// top-left corner, starts on the outline or cannot start at all yields a
/// [`SkeletonStatus::Degenerate`] skeleton with no landmarks. A torso that
/// is missing or off the grid stops the chain with
/// [`SkeletonStatus::TorsoOutOfBounds`], keeping the head and torso found
/// so far.
///
/// # Errors
///
/// Returns an error only for invalid `params`.
pub fn extract_skeleton(grid: &mut LabelGrid, params: &SkeletonParams) -> RecogResult<Skeleton> {
    params.validate()?;

    if grid.is_empty() {
        debug!("skeleton: empty grid");
        return Ok(Skeleton::degenerate());
    }

    let windows = SearchWindows::for_grid(grid);
    match fill_silhouette(grid, windows.seed, params.connectivity) {
        Ok(outcome) if outcome.is_usable() => {}
        Ok(outcome) => {
            debug!("skeleton: unusable fill {:?}", outcome);
            return Ok(Skeleton::degenerate());
        }
        Err(e) => {
            debug!("skeleton: fill failed: {}", e);
            return Ok(Skeleton::degenerate());
        }
    }

    let index = PixelIndex::build(grid);
    let interior = index.interior.as_slice();
    let mut landmarks = LandmarkSet::new();

    let head = locate_head(interior, params);
    landmarks.set(Landmark::Head, head.map(|h| h.point));

    let torso = head.and_then(|h| locate_torso(interior, params, &windows, h));
    landmarks.set(Landmark::Torso, torso.map(|t| t.point));
    let torso = match torso {
        Some(t) if grid.contains(t.point) => t,
        _ => {
            debug!("skeleton: torso out of bounds {:?}", torso.map(|t| t.point));
            return Ok(Skeleton {
                landmarks,
                status: SkeletonStatus::TorsoOutOfBounds,
            });
        }
    };

    let waist = locate_waist(interior, params, &windows, torso);
    landmarks.set(Landmark::Waist, waist.map(|w| w.point));

    // the feet fall back to the torso cursor when no waist was found
    let foot_from = waist.unwrap_or(torso);
    landmarks.set(
        Landmark::FootA,
        locate_foot(interior, params, &windows, foot_from, windows.corner_a),
    );
    landmarks.set(
        Landmark::FootB,
        locate_foot(interior, params, &windows, foot_from, windows.corner_b),
    );

    let shoulders = locate_shoulders(interior, params, torso);
    landmarks.set(Landmark::ShoulderLeft, shoulders.map(|s| s.left));
    landmarks.set(Landmark::ShoulderRight, shoulders.map(|s| s.right));

    if let (Some(waist), Some(shoulders)) = (waist, shoulders) {
        let ctx = ArmContext {
            grid,
            index: &index,
            params,
            torso: torso.point,
            waist: waist.point,
            shoulders,
            halfway: halfway_point(torso.point, waist.point),
        };

        let elbow_left = locate_elbow(&ctx, shoulders.left);
        landmarks.set(Landmark::ElbowLeft, elbow_left);
        landmarks.set(
            Landmark::HandLeft,
            elbow_left.and_then(|e| locate_hand(&ctx, e)),
        );

        let elbow_right = locate_elbow(&ctx, shoulders.right);
        landmarks.set(Landmark::ElbowRight, elbow_right);
        landmarks.set(
            Landmark::HandRight,
            elbow_right.and_then(|e| locate_hand(&ctx, e)),
        );
    }

    debug!(
        "skeleton: {} of {} landmarks {:?}",
        landmarks.found_count(),
        Landmark::COUNT,
        landmarks.as_slice()
    );

    Ok(Skeleton {
        landmarks,
        status: SkeletonStatus::Valid,
    })
}
