//! Surface trait and HitRecord for ray-object intersection.

use crate::Material;
use glint_math::{Interval, Ray, Vec3};

/// Record of a ray-surface intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    /// Parameter t where the intersection occurs
    pub t: f64,
    /// Point of intersection
    pub p: Vec3,
    /// Unit surface normal at the intersection
    pub normal: Vec3,
    /// Material resolved at the intersection point
    pub material: Material,
}

/// Trait for analytic surfaces that can be hit by rays.
///
/// Surfaces are immutable once the scene is built and are shared
/// read-only between render workers.
pub trait Surface: Send + Sync {
    /// Find the nearest hit with `t` inside `ray_t`.
    ///
    /// Returns `None` when the ray misses or every candidate root lies
    /// outside the interval.
    fn intersect(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord>;
}
