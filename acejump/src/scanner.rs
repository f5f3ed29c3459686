//! Candidate scanning.
//!
//! [`scan`] walks forward through one pane's search region and records the start of
//! each pattern match. It reads only; labeling is the overlay's job.

use crate::host::{Pane, PaneId};
use std::ops::Range;

/// A single-position jump target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Candidate {
    pub pane: PaneId,
    pub offset: usize,
}

/// Result of scanning one pane.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scan {
    /// Match starts in scan order.
    pub candidates: Vec<usize>,
    /// Where to resume when the label budget ran out; `None` once the region is exhausted.
    pub next: Option<usize>,
}

/// Collect up to `max` match starts of `pattern` within `region`, from `start` on.
///
/// A match ending past the region boundary is discarded and ends the scan, so labels
/// are never written outside the region.
pub fn scan<P: Pane + ?Sized>(
    pane: &P,
    pattern: &str,
    region: Range<usize>,
    start: usize,
    max: usize,
    case_sensitive: bool,
) -> Scan {
    let mut candidates = Vec::new();
    let mut next = start.max(region.start);

    loop {
        if next >= region.end {
            return Scan {
                candidates,
                next: None,
            };
        }

        let found = pane
            .find(pattern, next, case_sensitive)
            .filter(|found| found.start < region.end && found.end <= region.end);

        if candidates.len() >= max {
            // Only resumable when another match is actually waiting.
            return Scan {
                candidates,
                next: found.map(|_| next),
            };
        }

        let Some(found) = found else {
            tracing::trace!("No match left before region end {}", region.end);
            return Scan {
                candidates,
                next: None,
            };
        };

        tracing::trace!("Candidate at {}", found.start);
        candidates.push(found.start);
        next = found.end.max(found.start + 1);
    }
}
