//! Planar convex hulls via Graham's scan, upper and lower chains built in parallel.
//!
//! Layout
//! - `geom2`: point/edge types and the strict left-turn predicate.
//! - `hull`: preprocessing, the chain builder and the two-thread orchestrator.
//! - `cloud`: seeded point clouds for tests, benches and demos.
//!
//! Reading and writing point files is left to callers (see the `cli` crate).

pub mod cloud;
pub mod geom2;
pub mod hull;

pub use geom2::{orientation, Edge, Point};
pub use hull::{compute_hull, compute_hull_sequential, compute_hull_with, Hull, HullCfg};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cloud::{draw_cloud, CloudCfg, CloudShape, ReplayToken};
    pub use crate::geom2::{canonical_cmp, orientation, Edge, Point};
    pub use crate::hull::{
        compute_hull, compute_hull_sequential, compute_hull_with, Dedup, Hull, HullCfg,
        MIN_POINTS,
    };
    pub use nalgebra::Vector2 as Vec2;
}
