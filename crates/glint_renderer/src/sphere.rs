//! Sphere primitive for ray tracing.

use crate::{HitRecord, Material, Surface};
use glint_math::{Interval, Ray, Vec3};

/// Below this squared direction length a ray is treated as degenerate.
const MIN_DIRECTION_LENGTH_SQUARED: f64 = 1e-12;

/// Relative discriminant size under which both roots are taken to coincide.
const TANGENT_TOLERANCE: f64 = 1e-12;

/// A sphere primitive.
#[derive(Debug, Clone)]
pub struct Sphere {
    center: Vec3,
    radius: f64,
    material: Material,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f64, material: Material) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            material,
        }
    }

    fn record(&self, ray: &Ray, t: f64) -> HitRecord {
        let p = ray.at(t);
        HitRecord {
            t,
            p,
            // Outward normal, not flipped toward the ray
            normal: (p - self.center).normalize_or_zero(),
            material: self.material,
        }
    }
}

impl Surface for Sphere {
    fn intersect(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let oc = ray.origin() - self.center;
        let a = ray.direction().length_squared();
        if a < MIN_DIRECTION_LENGTH_SQUARED {
            return None;
        }
        let b = 2.0 * oc.dot(ray.direction());
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        // Grazing ray: a single root
        if discriminant <= TANGENT_TOLERANCE * b * b {
            let t = -b / (2.0 * a);
            return ray_t.contains(t).then(|| self.record(ray, t));
        }

        let sqrtd = discriminant.sqrt();

        // Find the nearest root in the acceptable range
        let near = (-b - sqrtd) / (2.0 * a);
        if ray_t.contains(near) {
            return Some(self.record(ray, near));
        }
        let far = (-b + sqrtd) / (2.0 * a);
        if ray_t.contains(far) {
            return Some(self.record(ray, far));
        }

        None
    }
}
