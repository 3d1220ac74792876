//! Pinhole camera for ray generation.

use glint_math::{Ray, Vec3};

/// Pinhole camera mapping normalized screen coordinates to world rays.
///
/// The virtual viewport sits one unit in front of the eye. `s` runs left
/// to right and `t` bottom to top, both in `[0, 1]`.
#[derive(Debug, Clone)]
pub struct Camera {
    // Camera positioning
    look_from: Vec3,
    look_at: Vec3,
    vup: Vec3,

    // Lens settings
    vfov: f64,   // Vertical field of view in degrees
    aspect: f64, // Viewport width / height

    // Cached computed values (set by initialize())
    lower_left_corner: Vec3,
    horizontal: Vec3,
    vertical: Vec3,
}

impl Camera {
    /// Create a camera and derive its viewport.
    pub fn new(look_from: Vec3, look_at: Vec3, vup: Vec3, vfov: f64, aspect: f64) -> Self {
        let mut camera = Self {
            look_from,
            look_at,
            vup,
            vfov,
            aspect,
            lower_left_corner: Vec3::ZERO,
            horizontal: Vec3::ZERO,
            vertical: Vec3::ZERO,
        };
        camera.initialize();
        camera
    }

    /// Set camera position.
    pub fn with_position(mut self, look_from: Vec3, look_at: Vec3, vup: Vec3) -> Self {
        self.look_from = look_from;
        self.look_at = look_at;
        self.vup = vup;
        self.initialize();
        self
    }

    /// Set lens settings.
    pub fn with_lens(mut self, vfov: f64, aspect: f64) -> Self {
        self.vfov = vfov;
        self.aspect = aspect;
        self.initialize();
        self
    }

    fn initialize(&mut self) {
        // Calculate viewport dimensions
        let theta = self.vfov.to_radians();
        let h = (theta / 2.0).tan();
        let viewport_height = 2.0 * h;
        let viewport_width = self.aspect * viewport_height;

        // Calculate camera basis vectors
        let w = (self.look_from - self.look_at).normalize_or_zero();
        let u = self.vup.cross(w).normalize_or_zero();
        let v = w.cross(u);

        self.horizontal = u * viewport_width;
        self.vertical = v * viewport_height;
        self.lower_left_corner = self.look_from - self.horizontal / 2.0 - self.vertical / 2.0 - w;
    }

    /// Eye position.
    pub fn origin(&self) -> Vec3 {
        self.look_from
    }

    /// Generate the ray through viewport point (s, t).
    pub fn get_ray(&self, s: f64, t: f64) -> Ray {
        let target = self.lower_left_corner + s * self.horizontal + t * self.vertical;
        Ray::new(self.look_from, target - self.look_from)
    }
}
