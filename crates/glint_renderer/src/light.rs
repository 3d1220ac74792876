//! Point lights.

use crate::Color;
use glint_math::Vec3;

/// An omnidirectional point light with inverse-square falloff.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub position: Vec3,
    pub color: Color,
    /// Scalar multiplier applied before the 1/d² falloff
    pub intensity: f64,
}

impl Light {
    pub fn new(position: Vec3, color: Color, intensity: f64) -> Self {
        Self {
            position,
            color,
            intensity,
        }
    }

    /// Radiance arriving at a point `distance_squared` away.
    #[inline]
    pub fn radiance_at(&self, distance_squared: f64) -> Color {
        self.color * (self.intensity / distance_squared)
    }
}
