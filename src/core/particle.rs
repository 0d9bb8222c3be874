use serde::Serialize;

use crate::error::{Error, Result};

/// Color of the slowest particles (dark blue).
const LOW_SPEED_COLOR: [f64; 3] = [0.0, 0.0, 139.0];
/// Color of the fastest particles (red).
const HIGH_SPEED_COLOR: [f64; 3] = [255.0, 0.0, 0.0];
/// Speed at which a particle is rendered fully `HIGH_SPEED_COLOR`.
const SPEED_COLOR_SCALE: f64 = 5.0;

/// A circular particle in a bounded 2D universe.
///
/// Fields:
/// - `x`, `y`: position in universe coordinates
/// - `dx`, `dy`: velocity as displacement per tick
/// - `radius`: disc radius (> 0); also stands in for mass in collision
///   resolution and kinetic energy. This is a documented modeling choice;
///   a separate mass field could be added without reshaping the resolver.
/// - `color`: RGB in [0, 255], recomputed from speed each tick
///
/// Particles carry no persistent identity; they are referenced by index in
/// the owning collection for the duration of one tick.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub dx: f64,
    pub dy: f64,
    /// Disc radius (> 0); mass proxy.
    pub radius: f64,
    /// RGB color derived from speed.
    pub color: [f64; 3],
}

impl Particle {
    /// Create a new particle after validating invariants.
    ///
    /// Errors with `Error::InvalidParticle` if `radius` is non-positive or
    /// any component of position/velocity is NaN or infinite.
    pub fn new(x: f64, y: f64, dx: f64, dy: f64, radius: f64) -> Result<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(Error::InvalidParticle(
                "radius must be finite and > 0".into(),
            ));
        }
        if !x.is_finite() || !y.is_finite() {
            return Err(Error::InvalidParticle("position must be finite".into()));
        }
        if !dx.is_finite() || !dy.is_finite() {
            return Err(Error::InvalidParticle("velocity must be finite".into()));
        }
        Ok(Self {
            x,
            y,
            dx,
            dy,
            radius,
            color: [255.0, 255.0, 255.0],
        })
    }

    /// Current speed, `|v|`.
    #[inline]
    pub fn speed(&self) -> f64 {
        (self.dx * self.dx + self.dy * self.dy).sqrt()
    }

    /// Kinetic energy `1/2 m |v|^2` with radius standing in for mass.
    #[inline]
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.radius * (self.dx * self.dx + self.dy * self.dy)
    }

    /// Recompute the color tag from the current speed: a linear blend from
    /// dark blue (at rest) to red (at `SPEED_COLOR_SCALE` and above).
    #[inline]
    pub fn retint(&mut self) {
        let t = (self.speed() / SPEED_COLOR_SCALE).min(1.0);
        self.color = interpolate_color(t, LOW_SPEED_COLOR, HIGH_SPEED_COLOR);
    }
}

fn interpolate_color(t: f64, from: [f64; 3], to: [f64; 3]) -> [f64; 3] {
    [
        from[0] + t * (to[0] - from[0]),
        from[1] + t * (to[1] - from[1]),
        from[2] + t * (to[2] - from[2]),
    ]
}
