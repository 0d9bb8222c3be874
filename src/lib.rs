//! bouncesim: a 2D elastic particle collision engine.
//!
//! Simulates a population of circular particles in a bounded universe,
//! resolving pairwise momentum-conserving elastic collisions with either a
//! brute-force O(n²) sweep or a quadtree broad phase. An external driver
//! advances the universe one tick at a time with [`Universe::step`] and
//! reads particle state back through immutable accessors: typed records,
//! or the flat fixed-stride buffer of [`Universe::snapshot_buffer`] that
//! can be handed to a rendering layer.
//!
//! The engine never draws, paces frames, or owns UI state; rendering and
//! input capture are external collaborators.
//!
//! ```
//! use bouncesim::{Result, Universe};
//!
//! fn main() -> Result<()> {
//!     let mut universe = Universe::with_seed(600.0, 600.0, Some(42))?;
//!     universe.spawn_random(1000)?;
//!     for _ in 0..60 {
//!         universe.step();
//!     }
//!     println!(
//!         "{} particles, total KE {:.3}",
//!         universe.particle_count(),
//!         universe.total_kinetic_energy()
//!     );
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod error;

pub use crate::core::{
    CandidateFinder, NaiveSweep, Particle, QuadtreeIndex, Rect, Universe, SNAPSHOT_STRIDE,
};
pub use crate::error::{Error, Result};
