//! Training and testing over batches of silhouettes

use super::ranges::LandmarkRanges;
use super::verdict::Verdict;
use crate::error::RecogResult;
use crate::skeleton::{LandmarkSet, SkeletonParams, SkeletonStatus, extract_skeleton};
use log::{debug, info};
use peoplefinder_core::LabelGrid;

/// Classify a landmark set against trained ranges.
pub fn judge(ranges: &LandmarkRanges, set: &LandmarkSet) -> Verdict {
    Verdict::from_score(ranges.count_in_range(set))
}

/// Counts from one training batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrainingSummary {
    /// Silhouettes folded into the ranges
    pub accepted: usize,
    /// Flagged silhouettes left out
    pub rejected: usize,
    /// Status of the last silhouette processed
    pub last_status: Option<SkeletonStatus>,
}

/// Result of classifying one silhouette.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub verdict: Verdict,
    /// Landmarks inside their trained box
    pub score: usize,
    pub status: SkeletonStatus,
    pub landmarks: LandmarkSet,
}

/// Extract and classify one silhouette.
///
/// A flagged silhouette is still judged; its missing landmarks count
/// against it.
///
/// # Errors
///
/// Returns an error only for invalid `params`.
pub fn classify(
    ranges: &LandmarkRanges,
    grid: &mut LabelGrid,
    params: &SkeletonParams,
) -> RecogResult<Classification> {
    let skeleton = extract_skeleton(grid, params)?;
    let score = ranges.count_in_range(&skeleton.landmarks);
    Ok(Classification {
        verdict: Verdict::from_score(score),
        score,
        status: skeleton.status,
        landmarks: skeleton.landmarks,
    })
}

/// Fold every usable silhouette of a batch into `ranges`.
///
/// Processing stops at the first empty grid. Flagged silhouettes leave the
/// ranges untouched.
///
/// # Errors
///
/// Returns an error only for invalid `params`.
pub fn train(
    ranges: &mut LandmarkRanges,
    grids: &mut [LabelGrid],
    params: &SkeletonParams,
) -> RecogResult<TrainingSummary> {
    let mut summary = TrainingSummary::default();

    for grid in grids.iter_mut().take_while(|g| !g.is_empty()) {
        let skeleton = extract_skeleton(grid, params)?;
        if skeleton.status.is_valid() {
            ranges.fold(&skeleton.landmarks);
            summary.accepted += 1;
        } else {
            debug!("train: skipping {:?} silhouette", skeleton.status);
            summary.rejected += 1;
        }
        summary.last_status = Some(skeleton.status);
    }

    info!(
        "train: accepted {}, rejected {}",
        summary.accepted, summary.rejected
    );
    Ok(summary)
}

/// Classify every silhouette of a batch, in input order.
///
/// Processing stops at the first empty grid.
///
/// # Errors
///
/// Returns an error only for invalid `params`.
pub fn test(
    ranges: &LandmarkRanges,
    grids: &mut [LabelGrid],
    params: &SkeletonParams,
) -> RecogResult<Vec<Classification>> {
    let results = grids
        .iter_mut()
        .take_while(|g| !g.is_empty())
        .map(|g| classify(ranges, g, params))
        .collect::<RecogResult<Vec<_>>>()?;

    let count = |v: Verdict| results.iter().filter(|c| c.verdict == v).count();
    info!(
        "test: {} pedestrian, {} something, {} noise",
        count(Verdict::Pedestrian),
        count(Verdict::Something),
        count(Verdict::Noise)
    );
    Ok(results)
}

/// A trainable pedestrian classifier.
///
/// Owns the learned ranges and remembers the status of the last silhouette
/// it processed. Instances are independent; nothing is shared or persisted.
#[derive(Debug, Clone, Default)]
pub struct PeopleFinder {
    ranges: LandmarkRanges,
    params: SkeletonParams,
    last_status: Option<SkeletonStatus>,
}

impl PeopleFinder {
    /// Create an untrained classifier with default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an untrained classifier with custom parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are invalid.
    pub fn with_params(params: SkeletonParams) -> RecogResult<Self> {
        params.validate()?;
        Ok(Self {
            params,
            ..Self::default()
        })
    }

    /// Train on a batch of outlined silhouettes.
    ///
    /// Only the status of the last silhouette of the batch is kept for
    /// [`validity_flag`](Self::validity_flag); earlier flagged frames are
    /// counted in [`TrainingSummary::rejected`].
    ///
    /// # Errors
    ///
    /// Returns an error only for invalid parameters.
    pub fn train(&mut self, grids: &mut [LabelGrid]) -> RecogResult<TrainingSummary> {
        let summary = train(&mut self.ranges, grids, &self.params)?;
        if summary.last_status.is_some() {
            self.last_status = summary.last_status;
        }
        Ok(summary)
    }

    /// Classify a batch of outlined silhouettes.
    ///
    /// Only the status of the last silhouette of the batch is kept for
    /// [`validity_flag`](Self::validity_flag). The free function `test`
    /// returns a [`Classification`] with the status of every frame.
    ///
    /// # Errors
    ///
    /// Returns an error only for invalid parameters.
    pub fn test(&mut self, grids: &mut [LabelGrid]) -> RecogResult<Vec<Verdict>> {
        let results = test(&self.ranges, grids, &self.params)?;
        if let Some(last) = results.last() {
            self.last_status = Some(last.status);
        }
        Ok(results.iter().map(|c| c.verdict).collect())
    }

    /// True when the last processed silhouette was flagged as malformed.
    ///
    /// Earlier frames of the same batch do not affect the flag.
    pub fn validity_flag(&self) -> bool {
        self.last_status.is_some_and(SkeletonStatus::is_flagged)
    }

    /// Status of the last processed silhouette.
    pub fn last_status(&self) -> Option<SkeletonStatus> {
        self.last_status
    }

    /// Learned ranges.
    pub fn ranges(&self) -> &LandmarkRanges {
        &self.ranges
    }

    /// Number of silhouettes folded into the ranges so far.
    pub fn samples(&self) -> usize {
        self.ranges.samples()
    }

    /// Extraction parameters.
    pub fn params(&self) -> &SkeletonParams {
        &self.params
    }
}
