use rand::{rng, rngs::StdRng, Rng, SeedableRng};

use crate::core::broadphase::{CandidateFinder, QuadtreeIndex};
use crate::core::collision;
use crate::core::geometry::Rect;
use crate::core::Particle;
use crate::error::{Error, Result};

/// Number of f64 fields per particle in [`Universe::snapshot_buffer`]:
/// `[x, y, dx, dy, radius, color_r, color_g, color_b]`.
pub const SNAPSHOT_STRIDE: usize = 8;

/// The bounded 2D simulation domain and its particle collection.
///
/// The universe exclusively owns its particles: all mutation goes through
/// spawn/remove operations and [`Universe::step`], and external consumers
/// read state through immutable accessors. A step is a single-threaded,
/// synchronous call; dimensions and restitution are only ever changed
/// between steps.
pub struct Universe {
    width: f64,
    height: f64,
    particles: Vec<Particle>,
    coefficient_of_restitution: f64,
    elastic_walls: bool,
    finder: Box<dyn CandidateFinder>,
    rng: StdRng,
}

impl Universe {
    /// Create a universe with the given dimensions, the quadtree broad phase,
    /// perfectly elastic collisions, and an entropy-seeded RNG for spawning.
    pub fn new(width: f64, height: f64) -> Result<Universe> {
        Universe::with_seed(width, height, None)
    }

    /// Like [`Universe::new`] but with an explicit RNG seed so spawn
    /// operations are reproducible. `None` seeds from entropy.
    pub fn with_seed(width: f64, height: f64, seed: Option<u64>) -> Result<Universe> {
        validate_dimensions(width, height)?;
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::seed_from_u64(rng().random()),
        };
        Ok(Universe {
            width,
            height,
            particles: Vec::new(),
            coefficient_of_restitution: 1.0,
            elastic_walls: true,
            finder: Box::new(QuadtreeIndex::default()),
            rng,
        })
    }

    /// Universe width.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Universe height.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Number of particles currently in the universe.
    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    /// Immutable view of every particle record.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Total kinetic energy `Σ ½ · radius · |v|²` (radius stands in for
    /// mass). Zero for an empty universe.
    pub fn total_kinetic_energy(&self) -> f64 {
        self.particles.iter().map(Particle::kinetic_energy).sum()
    }

    /// Flat fixed-stride snapshot of all particles for a rendering layer:
    /// [`SNAPSHOT_STRIDE`] f64 values per particle, in insertion order.
    /// Consumers read this buffer; all mutation goes through the API.
    pub fn snapshot_buffer(&self) -> Vec<f64> {
        let mut buf = Vec::with_capacity(self.particles.len() * SNAPSHOT_STRIDE);
        for p in &self.particles {
            buf.extend_from_slice(&[
                p.x, p.y, p.dx, p.dy, p.radius, p.color[0], p.color[1], p.color[2],
            ]);
        }
        buf
    }

    /// Update the universe dimensions. Existing particles are not
    /// repositioned; any that now lie outside the bounds are pulled back
    /// inside by the wall pass of the next step.
    pub fn resize(&mut self, width: f64, height: f64) -> Result<()> {
        validate_dimensions(width, height)?;
        self.width = width;
        self.height = height;
        log::debug!("universe resized to {width}×{height}");
        Ok(())
    }

    /// Set the coefficient of restitution applied to post-collision normal
    /// velocities (1 = perfectly elastic). Rejects values outside [0, 1].
    pub fn set_coefficient_of_restitution(&mut self, value: f64) -> Result<()> {
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(Error::InvalidConfig(format!(
                "coefficient of restitution must be in [0, 1], got {value}"
            )));
        }
        self.coefficient_of_restitution = value;
        Ok(())
    }

    /// Configure whether wall bounces are perfectly elastic. When false, the
    /// reflected velocity component is additionally scaled by the
    /// coefficient of restitution.
    pub fn set_wall_elastic(&mut self, elastic: bool) {
        self.elastic_walls = elastic;
    }

    /// Swap in a different collision broad phase (naive or quadtree).
    pub fn set_candidate_finder(&mut self, finder: Box<dyn CandidateFinder>) {
        self.finder = finder;
    }

    /// Insert one particle with fully explicit, validated state.
    pub fn insert_particle(
        &mut self,
        x: f64,
        y: f64,
        dx: f64,
        dy: f64,
        radius: f64,
    ) -> Result<()> {
        let particle = Particle::new(x, y, dx, dy, radius)?;
        self.particles.push(particle);
        Ok(())
    }

    /// Spawn `count` particles with random small radii and velocities,
    /// positioned in the central third of the universe on both axes.
    pub fn spawn_random(&mut self, count: usize) -> Result<()> {
        for _ in 0..count {
            let x = self.rng.random_range(self.width / 3.0..2.0 * self.width / 3.0);
            let y = self
                .rng
                .random_range(self.height / 3.0..2.0 * self.height / 3.0);
            let radius = self.rng.random_range(1.0..3.0);
            let dx = self.rng.random_range(-1.0..1.0);
            let dy = self.rng.random_range(-1.0..1.0);
            self.insert_particle(x, y, dx, dy, radius)?;
        }
        log::debug!(
            "spawned {count} random particles ({} total)",
            self.particles.len()
        );
        Ok(())
    }

    /// Spawn one particle at a caller-given position with a random velocity,
    /// used for interactive injection. When `radius` is `None` a random
    /// radius in [5, 10) is drawn.
    pub fn spawn_at(&mut self, x: f64, y: f64, radius: Option<f64>) -> Result<()> {
        let radius = match radius {
            Some(r) => r,
            None => self.rng.random_range(5.0..10.0),
        };
        let dx = self.rng.random_range(-20.0..20.0);
        let dy = self.rng.random_range(-20.0..20.0);
        self.insert_particle(x, y, dx, dy, radius)
    }

    /// Remove the `count` oldest particles (FIFO by insertion order).
    /// Removing more than exist empties the universe.
    pub fn remove_oldest(&mut self, count: usize) {
        let drop = count.min(self.particles.len());
        self.particles.drain(..drop);
        log::debug!("removed {drop} particles ({} remain)", self.particles.len());
    }

    /// Advance the universe by one tick.
    ///
    /// First pass, in particle-index order: integrate position by velocity,
    /// then resolve collisions against the broad phase's candidates, one
    /// pair at a time, with both results applied to the live collection.
    /// Second pass: reflect and clamp at the walls, so the containment
    /// invariant holds for every particle once the step returns. Finally
    /// every particle's color tag is recomputed from its speed. The step
    /// draws no randomness and has no error paths.
    pub fn step(&mut self) {
        let bounds = Rect::new(
            self.width / 2.0,
            self.height / 2.0,
            self.width / 2.0,
            self.height / 2.0,
        );
        self.finder.rebuild(bounds, &self.particles);

        let mut candidates: Vec<usize> = Vec::new();
        for i in 0..self.particles.len() {
            {
                let p = &mut self.particles[i];
                p.x += p.dx;
                p.y += p.dy;
            }

            candidates.clear();
            self.finder.candidates(i, &self.particles, &mut candidates);

            for &j in &candidates {
                if j == i {
                    continue;
                }
                let (a, b) = pair_mut(&mut self.particles, i, j);
                if collision::overlap_distance(a, b).is_some() {
                    collision::resolve(a, b, self.coefficient_of_restitution);
                }
            }
        }

        self.bounce_off_walls();

        for p in &mut self.particles {
            p.retint();
        }
    }

    /// Reflect every particle off any wall its disc has crossed, then clamp
    /// the disc fully inside the bounds.
    fn bounce_off_walls(&mut self) {
        let (width, height) = (self.width, self.height);
        let damping = if self.elastic_walls {
            1.0
        } else {
            self.coefficient_of_restitution
        };

        for p in &mut self.particles {
            if p.x + p.radius > width || p.x - p.radius < 0.0 {
                p.dx = -p.dx * damping;
            }
            if p.y + p.radius > height || p.y - p.radius < 0.0 {
                p.dy = -p.dy * damping;
            }

            if p.x + p.radius > width {
                p.x = width - p.radius;
            }
            if p.x - p.radius < 0.0 {
                p.x = p.radius;
            }
            if p.y + p.radius > height {
                p.y = height - p.radius;
            }
            if p.y - p.radius < 0.0 {
                p.y = p.radius;
            }
        }
    }
}

impl std::fmt::Debug for Universe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Universe")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("particles", &self.particles.len())
            .field(
                "coefficient_of_restitution",
                &self.coefficient_of_restitution,
            )
            .field("elastic_walls", &self.elastic_walls)
            .finish()
    }
}

fn validate_dimensions(width: f64, height: f64) -> Result<()> {
    if !width.is_finite() || width <= 0.0 || !height.is_finite() || height <= 0.0 {
        return Err(Error::InvalidConfig(format!(
            "dimensions must be finite and > 0, got {width}×{height}"
        )));
    }
    Ok(())
}

/// Mutably borrow two distinct particles at once.
fn pair_mut(particles: &mut [Particle], i: usize, j: usize) -> (&mut Particle, &mut Particle) {
    debug_assert_ne!(i, j);
    if i < j {
        let (head, tail) = particles.split_at_mut(j);
        (&mut head[i], &mut tail[0])
    } else {
        let (head, tail) = particles.split_at_mut(i);
        (&mut tail[0], &mut head[j])
    }
}
