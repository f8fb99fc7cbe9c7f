//! Row run scanning over ordered pixel sequences
//!
//! The locators measure local body width as run lengths along a row of the
//! interior sequence. A plain run covers every pixel of a row; a tolerant
//! run is split only where the column gap exceeds the allowed bridge, so
//! that a single missing column does not cut the body in two.

use peoplefinder_core::Point;

/// One run of pixels on a single row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Run {
    pub row: i32,
    /// Width measure: pixels minus one for plain runs, column extent for
    /// tolerant runs
    pub span: i32,
    /// Index of the last pixel of the run
    pub end: usize,
}

/// First index at or after `start` whose row is at least `row`.
///
/// Returns `seq.len()` when no such pixel exists.
pub(crate) fn skip_to_row(seq: &[Point], start: usize, row: i32) -> usize {
    let mut i = start.min(seq.len());
    while i < seq.len() && seq[i].row < row {
        i += 1;
    }
    i
}

/// Advance toward `target` row, jumping `stride` extra entries per step
/// while more than `distance` rows away.
///
/// The result is clamped to the last index of a non-empty sequence.
pub(crate) fn fast_skip_to_row(
    seq: &[Point],
    start: usize,
    target: i32,
    distance: i32,
    stride: usize,
) -> usize {
    let last = seq.len().saturating_sub(1);
    let mut i = start.min(last);
    while i < last && seq[i].row < target {
        if target - seq[i].row > distance {
            i += stride;
        }
        i += 1;
    }
    i.min(last)
}

/// Plain runs: one per row, for rows from `seq[start]` up to `end_row`.
pub(crate) fn row_runs(seq: &[Point], start: usize, end_row: i32) -> Vec<Run> {
    let mut runs: Vec<Run> = Vec::new();
    let mut count = 0;
    for (i, p) in seq.iter().enumerate().skip(start) {
        if p.row >= end_row {
            break;
        }
        match runs.last_mut() {
            Some(run) if run.row == p.row => {
                count += 1;
                run.span = count - 1;
                run.end = i;
            }
            _ => {
                count = 1;
                runs.push(Run {
                    row: p.row,
                    span: 0,
                    end: i,
                });
            }
        }
    }
    runs
}

/// Tolerant runs for rows from `seq[start]` up to `end_row`.
///
/// Consecutive pixels stay in one run while they share a row and are at
/// most `gap + 1` columns apart.
pub(crate) fn tolerant_runs(seq: &[Point], start: usize, end_row: i32, gap: i32) -> Vec<Run> {
    let mut runs: Vec<Run> = Vec::new();
    let mut prev: Option<Point> = None;
    for (i, &p) in seq.iter().enumerate().skip(start) {
        if p.row >= end_row {
            break;
        }
        let bridged = prev.is_some_and(|q| q.row == p.row && p.col - q.col <= gap + 1);
        match runs.last_mut() {
            Some(run) if bridged => {
                run.span += p.col - seq[run.end].col;
                run.end = i;
            }
            _ => runs.push(Run {
                row: p.row,
                span: 0,
                end: i,
            }),
        }
        prev = Some(p);
    }
    runs
}
