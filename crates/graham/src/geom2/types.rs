//! Basic 2D types and the turn predicate used by the chain builder.
//!
//! - `Point`: plain `Vector2<f64>`; equality is exact on both coordinates.
//! - `Edge`: directed pair `from → to`, only built transiently for turn tests.
//! - `orientation`: strict left-turn test; exact collinearity reports `false`.

use std::cmp::Ordering;

use nalgebra::Vector2;

/// A planar point. Value semantics only.
pub type Point = Vector2<f64>;

/// Directed edge `from → to`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub from: Point,
    pub to: Point,
}

impl Edge {
    #[inline]
    pub fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }
}

/// Z-component of `(to - from) × (q - to)`.
///
/// Positive when `from → to → q` turns counter-clockwise, zero when collinear.
#[inline]
pub fn cross(edge: Edge, q: Point) -> f64 {
    let e = edge.to - edge.from;
    let v = q - edge.to;
    e.x * v.y - e.y * v.x
}

/// True iff `q` lies strictly left of the directed edge.
///
/// Zero-length edges are not rejected; they always report `false`.
#[inline]
pub fn orientation(edge: Edge, q: Point) -> bool {
    cross(edge, q) > 0.0
}

/// Canonical order: increasing x, ties broken by increasing y.
///
/// NaN coordinates compare as equal rather than panicking.
#[inline]
pub fn canonical_cmp(a: &Point, b: &Point) -> Ordering {
    match a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal) {
        Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal),
        o => o,
    }
}

/// Shoelace area of a closed ring (last connects back to first).
/// Positive for counter-clockwise rings, zero for degenerate ones.
pub fn signed_area(ring: &[Point]) -> f64 {
    if ring.len() < 3 {
        return 0.0;
    }
    let mut a = 0.0;
    for i in 0..ring.len() {
        let p = ring[i];
        let q = ring[(i + 1) % ring.len()];
        a += p.x * q.y - q.x * p.y;
    }
    0.5 * a
}
