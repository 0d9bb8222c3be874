use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the simulation engine.
///
/// All validation happens at the API boundary (construction, configuration,
/// spawning); once a particle is admitted into the universe the per-step
/// algorithm assumes well-formed data and has no error paths of its own.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid universe configuration (dimensions, restitution coefficient).
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Invalid particle parameters (non-positive radius, non-finite state).
    #[error("invalid particle: {0}")]
    InvalidParticle(String),
}
