//! Scene container and closest-hit query.

use crate::{Color, HitRecord, Light, Surface};
use glint_math::{Interval, Ray};

/// Surfaces and lights for one frame.
///
/// Built once before rendering and only read while workers are running.
pub struct Scene {
    surfaces: Vec<Box<dyn Surface>>,
    lights: Vec<Light>,
    /// Color returned for rays that hit nothing
    pub background: Color,
    /// Ambient term, multiplied by the albedo at every hit
    pub ambient: Color,
}

impl Scene {
    /// Create a new empty scene with the default sky and ambient colors.
    pub fn new() -> Self {
        Self {
            surfaces: Vec::new(),
            lights: Vec::new(),
            background: Color::new(0.7, 0.8, 1.0),
            ambient: Color::splat(0.05),
        }
    }

    /// Add a surface. The scene owns it from now on.
    pub fn add(&mut self, surface: impl Surface + 'static) {
        self.surfaces.push(Box::new(surface));
    }

    /// Add a point light.
    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// Get the number of surfaces.
    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    /// Check if the scene has no surfaces.
    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    /// Closest hit of `ray` within `ray_t`.
    ///
    /// Tests every surface. After each hit the upper bound shrinks to that
    /// hit's `t`, so later surfaces only report something closer.
    pub fn closest_hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let mut closest = None;
        let mut closest_so_far = ray_t.max;

        for surface in &self.surfaces {
            if let Some(hit) = surface.intersect(ray, ray_t.with_max(closest_so_far)) {
                closest_so_far = hit.t;
                closest = Some(hit);
            }
        }

        closest
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
