//! Deduplication and canonical sort of the raw input.

use std::ops::Deref;

use crate::geom2::{canonical_cmp, Point};

/// Deduplication strategy. Both produce the same `PointSequence`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Dedup {
    /// Scan the accumulated output for each input point (O(n²)).
    #[default]
    LinearScan,
    /// Sort first, then drop adjacent equal points (O(n log n)).
    SortCompact,
}

/// Unique points in canonical order (x ascending, then y).
///
/// Invariants:
/// - No two elements are value-equal.
/// - Non-decreasing under `canonical_cmp`.
///
/// Only `prepare` builds one; afterwards it is read-only and shared by both chain builders.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointSequence(Vec<Point>);

impl PointSequence {
    #[inline]
    pub fn as_slice(&self) -> &[Point] {
        &self.0
    }
}

impl Deref for PointSequence {
    type Target = [Point];

    #[inline]
    fn deref(&self) -> &[Point] {
        &self.0
    }
}

/// Deduplicate `raw` and sort it canonically. `-0.0` is stored as `0.0`.
///
/// Pre: all coordinates are finite. NaN breaks both the dedup and the sort order.
pub fn prepare(raw: &[Point], dedup: Dedup) -> PointSequence {
    debug_assert!(
        raw.iter().all(|p| p.x.is_finite() && p.y.is_finite()),
        "hull input must be finite"
    );
    let mut pts = match dedup {
        Dedup::LinearScan => {
            let mut out: Vec<Point> = Vec::with_capacity(raw.len());
            for p in raw.iter().map(unsigned_zero) {
                if !out.contains(&p) {
                    out.push(p);
                }
            }
            out.sort_by(canonical_cmp);
            out
        }
        Dedup::SortCompact => {
            let mut out: Vec<Point> = raw.iter().map(unsigned_zero).collect();
            out.sort_by(canonical_cmp);
            out
        }
    };
    // Equal points are adjacent after the sort; a no-op for the linear scan.
    pts.dedup();
    PointSequence(pts)
}

/// `0.0 == -0.0`, so which one survives dedup would depend on input order.
#[inline]
fn unsigned_zero(p: &Point) -> Point {
    p.map(|c| if c == 0.0 { 0.0 } else { c })
}
