use crate::core::Particle;

/// Distance between two particle centers if their discs overlap, else None.
#[inline]
pub fn overlap_distance(a: &Particle, b: &Particle) -> Option<f64> {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    let distance = (dx * dx + dy * dy).sqrt();
    (distance < a.radius + b.radius).then_some(distance)
}

/// Resolve an elastic collision between two overlapping discs, writing both
/// updated velocities and de-overlapped positions back in place.
///
/// The velocities are rotated into the collision frame (x along the line of
/// centers), the 1D elastic exchange is applied along that axis with radius
/// standing in for mass, the normal components are scaled by `restitution`,
/// and both vectors are rotated back. Tangential components pass through
/// unchanged. Finally both particles are pushed apart along the normal by
/// half the overlap depth each so they no longer interpenetrate.
///
/// Callers are expected to have checked [`overlap_distance`] first; the
/// radius > 0 invariant makes the mass sum non-zero, so no guard is needed.
pub fn resolve(a: &mut Particle, b: &mut Particle, restitution: f64) {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    let distance = (dx * dx + dy * dy).sqrt();

    let angle = dy.atan2(dx);
    let sin = angle.sin();
    let cos = angle.cos();

    // Velocities in the collision frame: .0 along the normal, .1 tangential.
    let v1 = (cos * a.dx + sin * a.dy, cos * a.dy - sin * a.dx);
    let v2 = (cos * b.dx + sin * b.dy, cos * b.dy - sin * b.dx);

    let m1 = a.radius;
    let m2 = b.radius;

    let v1_n = ((m1 - m2) * v1.0 + 2.0 * m2 * v2.0) / (m1 + m2) * restitution;
    let v2_n = ((m2 - m1) * v2.0 + 2.0 * m1 * v1.0) / (m1 + m2) * restitution;

    a.dx = cos * v1_n - sin * v1.1;
    a.dy = cos * v1.1 + sin * v1_n;
    b.dx = cos * v2_n - sin * v2.1;
    b.dy = cos * v2.1 + sin * v2_n;

    // Positional correction: split the overlap evenly along the normal.
    let overlap = (a.radius + b.radius - distance) / 2.0;
    a.x += cos * overlap;
    a.y += sin * overlap;
    b.x -= cos * overlap;
    b.y -= sin * overlap;
}
