//! Monotone-chain builder (stack reduction over one traversal of the sorted points).
//!
//! One parameterized builder serves both halves:
//! - `Traversal::Forward` walks start→end and yields the upper chain.
//! - `Traversal::Reverse` walks end→start and yields the lower chain.

use crate::geom2::{orientation, Edge, Point};

/// Direction in which a chain walks the sorted sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Traversal {
    Forward,
    Reverse,
}

impl Traversal {
    /// Extreme point plus its neighbour in traversal order.
    ///
    /// Pre: `points.len() >= 2`.
    #[inline]
    pub fn seed(self, points: &[Point]) -> [Point; 2] {
        let n = points.len();
        match self {
            Traversal::Forward => [points[0], points[1]],
            Traversal::Reverse => [points[n - 1], points[n - 2]],
        }
    }

    /// Points after the seed, in traversal order.
    pub fn candidates(self, points: &[Point]) -> impl Iterator<Item = Point> + '_ {
        let n = points.len();
        let (fwd, rev) = match self {
            Traversal::Forward => (&points[2.min(n)..], &points[..0]),
            Traversal::Reverse => (&points[..0], &points[..n.saturating_sub(2)]),
        };
        fwd.iter().chain(rev.iter().rev()).copied()
    }
}

/// Stack-ordered boundary under construction (bottom = index 0).
///
/// Invariant once reduced: no three consecutive points turn strictly left.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Chain {
    points: Vec<Point>,
}

impl Chain {
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            points: Vec::with_capacity(cap),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn push(&mut self, p: Point) {
        self.points.push(p);
    }

    #[inline]
    pub fn pop(&mut self) -> Option<Point> {
        self.points.pop()
    }

    /// Edge from the second-to-top point to the top point, without popping.
    #[inline]
    pub fn peek_top_two(&self) -> Option<Edge> {
        match self.points.as_slice() {
            [.., prev, top] => Some(Edge::new(*prev, *top)),
            _ => None,
        }
    }

    /// Turn test against the top two points; `false` while fewer than two exist.
    #[inline]
    pub fn orientation(&self, q: Point) -> bool {
        self.peek_top_two().is_some_and(|e| orientation(e, q))
    }

    /// Pop every top point that `q` would leave behind a left turn, then push `q`.
    pub fn reduce_push(&mut self, q: Point) {
        while self.len() >= 2 && self.orientation(q) {
            self.pop();
        }
        self.push(q);
    }

    /// True iff no consecutive triple (bottom to top) turns strictly left.
    pub fn is_reduced(&self) -> bool {
        self.points
            .windows(3)
            .all(|w| !orientation(Edge::new(w[0], w[1]), w[2]))
    }

    /// Bottom-to-top slice view.
    #[inline]
    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    /// Top-to-bottom, skipping the bottom (seed) element.
    pub fn top_down_without_bottom(&self) -> impl Iterator<Item = Point> + '_ {
        self.points.iter().skip(1).rev().copied()
    }
}

/// Build one monotone chain over `sorted` in the given direction.
///
/// Pre: `sorted.len() >= 2`, unique and canonically sorted. Reads only; safe to run
/// concurrently with the sibling traversal over the same slice.
pub fn build_chain(sorted: &[Point], traversal: Traversal) -> Chain {
    debug_assert!(sorted.len() >= 2, "chain needs a two-point seed");
    let mut chain = Chain::with_capacity(sorted.len());
    for p in traversal.seed(sorted) {
        chain.push(p);
    }
    for q in traversal.candidates(sorted) {
        chain.reduce_push(q);
    }
    chain
}
