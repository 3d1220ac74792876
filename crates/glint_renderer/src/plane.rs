//! Infinite checkered plane.

use crate::{HitRecord, Material, Surface};
use glint_math::{Interval, Ray, Vec3};

/// Rays with |n·d| below this are treated as parallel to the plane.
const PARALLEL_EPSILON: f64 = 1e-6;

/// An infinite two-sided plane textured with a two-material checker.
#[derive(Debug, Clone)]
pub struct Plane {
    point: Vec3,
    normal: Vec3,
    material_a: Material,
    material_b: Material,
    /// Checker cell size in world units
    scale: f64,
    // In-plane basis for checker coordinates
    u_axis: Vec3,
    v_axis: Vec3,
}

impl Plane {
    /// Create a plane through `point` with the given normal (normalized here).
    pub fn new(point: Vec3, normal: Vec3, material_a: Material, material_b: Material, scale: f64) -> Self {
        let normal = normal.normalize_or_zero();
        // Pick a reference axis that is never close to the normal
        let reference = if normal.x.abs() > 0.9 { Vec3::Y } else { Vec3::X };
        let u_axis = reference.cross(normal).normalize_or_zero();
        let v_axis = normal.cross(u_axis);

        Self {
            point,
            normal,
            material_a,
            material_b,
            scale,
            u_axis,
            v_axis,
        }
    }

    /// A plane with one material everywhere.
    pub fn solid(point: Vec3, normal: Vec3, material: Material) -> Self {
        Self::new(point, normal, material, material, 1.0)
    }

    /// Checker material at a point on the plane.
    ///
    /// Uses floor, not truncation, so cells stay aligned across the origin.
    pub fn material_at(&self, p: Vec3) -> Material {
        let u = (p.dot(self.u_axis) / self.scale).floor() as i64;
        let v = (p.dot(self.v_axis) / self.scale).floor() as i64;

        if (u + v).rem_euclid(2) == 0 {
            self.material_a
        } else {
            self.material_b
        }
    }
}

impl Surface for Plane {
    fn intersect(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let denom = self.normal.dot(ray.direction());
        if denom.abs() < PARALLEL_EPSILON {
            return None;
        }

        let t = (self.point - ray.origin()).dot(self.normal) / denom;
        if !ray_t.contains(t) {
            return None;
        }

        let p = ray.at(t);
        Some(HitRecord {
            t,
            p,
            // Face the incoming ray from either side
            normal: if denom < 0.0 { self.normal } else { -self.normal },
            material: self.material_at(p),
        })
    }
}
