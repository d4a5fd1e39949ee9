//! 2D geometry primitives for the hull construction.
//!
//! Purpose
//! - Provide the point and edge value types plus the single turn predicate the
//!   chain builder relies on.
//! - Keep arithmetic plain `f64` with no tolerances: collinearity is exact zero.
//!
//! Code cross-refs: `crate::hull::chain::Chain::orientation`, `crate::hull::Hull::contains`

mod types;

pub use types::{canonical_cmp, cross, orientation, signed_area, Edge, Point};
