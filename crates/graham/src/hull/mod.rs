//! Graham's scan with the upper and lower chains built on two threads.
//!
//! Purpose
//! - Turn a raw point list into a counter-clockwise hull ring that keeps collinear
//!   boundary points.
//! - Split the scan into two independent monotone chains over one shared, read-only
//!   sorted sequence, then stitch them.
//!
//! Pipeline
//! - `prepare`: dedup + canonical sort → `PointSequence`.
//! - `build_chain(Forward)` and `build_chain(Reverse)` on two scoped threads.
//! - Stitch: lower chain top→down, then upper chain top→down, each without its
//!   bottom element (it is the other chain's top).
//!
//! Degenerate input
//! - Fewer than 3 unique points → `None`.
//! - All points collinear → the ring runs out along the line and back.
//!
//! Code cross-refs: `geom2::orientation`, `chain::{Chain, Traversal}`, `prepare::Dedup`

pub mod chain;
pub mod prepare;

use std::panic;
use std::thread;

use crate::geom2::{cross, signed_area, Edge, Point};

pub use chain::{build_chain, Chain, Traversal};
pub use prepare::{prepare, Dedup, PointSequence};

/// Minimum number of unique points for a hull.
pub const MIN_POINTS: usize = 3;

/// Hull construction configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct HullCfg {
    pub dedup: Dedup,
}

/// Convex hull ring in counter-clockwise order.
///
/// Invariants:
/// - Starts at the canonically smallest input point (leftmost, then lowest).
/// - Closure is implicit: the last point connects back to the first, which is not repeated.
/// - No consecutive triple (cyclically) turns clockwise; collinear boundary points stay.
#[derive(Clone, Debug, PartialEq)]
pub struct Hull {
    points: Vec<Point>,
}

impl Hull {
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    /// Boundary edges in ring order, including last → first.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        let n = self.points.len();
        (0..n).map(move |k| Edge::new(self.points[k], self.points[(k + 1) % n]))
    }

    /// Ring with the first point repeated at the end.
    pub fn closed(&self) -> Vec<Point> {
        let mut out = self.points.clone();
        if let Some(first) = self.points.first() {
            out.push(*first);
        }
        out
    }

    /// On-or-inside test (exact, no tolerance).
    ///
    /// `p` must not lie strictly right of any edge `a → b`.
    pub fn contains(&self, p: Point) -> bool {
        self.edges().all(|e| cross(e, p) >= 0.0)
    }

    /// Enclosed area (zero for collinear rings).
    pub fn area(&self) -> f64 {
        signed_area(&self.points)
    }
}

/// Hull with the default configuration.
pub fn compute_hull(raw: &[Point]) -> Option<Hull> {
    compute_hull_with(raw, HullCfg::default())
}

/// Hull with the two chains built concurrently.
///
/// Pre: finite coordinates (readers must reject NaN and infinities).
/// Returns `None` if fewer than `MIN_POINTS` unique points remain.
pub fn compute_hull_with(raw: &[Point], cfg: HullCfg) -> Option<Hull> {
    let sorted = prepare(raw, cfg.dedup);
    if sorted.len() < MIN_POINTS {
        return None;
    }
    let pts = sorted.as_slice();
    let (upper, lower) = thread::scope(|s| {
        let upper = s.spawn(|| build_chain(pts, Traversal::Forward));
        let lower = s.spawn(|| build_chain(pts, Traversal::Reverse));
        (join(upper), join(lower))
    });
    tracing::debug!(
        input = raw.len(),
        unique = pts.len(),
        upper = upper.len(),
        lower = lower.len(),
        "hull chains joined"
    );
    Some(stitch(&upper, &lower))
}

/// Single-threaded reference: the same two chains, built one after the other.
pub fn compute_hull_sequential(raw: &[Point], cfg: HullCfg) -> Option<Hull> {
    let sorted = prepare(raw, cfg.dedup);
    if sorted.len() < MIN_POINTS {
        return None;
    }
    let upper = build_chain(&sorted, Traversal::Forward);
    let lower = build_chain(&sorted, Traversal::Reverse);
    Some(stitch(&upper, &lower))
}

fn join<T>(handle: thread::ScopedJoinHandle<'_, T>) -> T {
    handle
        .join()
        .unwrap_or_else(|payload| panic::resume_unwind(payload))
}

/// Lower chain ends at the leftmost point and starts at the rightmost; the upper chain
/// the other way round. Dropping each chain's bottom keeps both junctions exactly once.
fn stitch(upper: &Chain, lower: &Chain) -> Hull {
    let mut points = Vec::with_capacity(upper.len() + lower.len() - 2);
    points.extend(lower.top_down_without_bottom());
    points.extend(upper.top_down_without_bottom());
    Hull { points }
}
