// Double precision glam vectors, exposed under the short name used
// throughout the renderer.
pub use glam::DVec3 as Vec3;

// Glint math types
mod interval;
mod ray;
pub use interval::Interval;
pub use ray::Ray;

/// Reflect `v` about the unit normal `n`.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Clamp every component to `[0, 1]`.
#[inline]
pub fn clamp01(v: Vec3) -> Vec3 {
    v.clamp(Vec3::ZERO, Vec3::ONE)
}
