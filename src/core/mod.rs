//! Core simulation engine: geometry primitives, the particle data model,
//! the quadtree broad phase, the pairwise collision resolver, and the
//! universe that ties them together.

pub mod broadphase;
pub mod collision;
pub mod geometry;
pub mod particle;
pub mod quadtree;
pub mod universe;

pub use broadphase::{CandidateFinder, NaiveSweep, QuadtreeIndex};
pub use geometry::Rect;
pub use particle::Particle;
pub use quadtree::QuadTree;
pub use universe::{Universe, SNAPSHOT_STRIDE};
