//! Phong surface description.

use glint_math::Vec3;

/// Color type alias (linear RGB, typically 0-1 but never clamped here)
pub type Color = Vec3;

/// Surface response parameters for the Phong model.
///
/// Plain value data: every hit record carries its own copy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Base color
    pub albedo: Color,
    /// Diffuse coefficient
    pub kd: f64,
    /// Specular coefficient
    pub ks: f64,
    /// Phong exponent
    pub shininess: f64,
    /// Mirror weight in [0, 1]; 0 disables reflection rays
    pub reflectivity: f64,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            albedo: Color::ONE,
            kd: 0.9,
            ks: 0.5,
            shininess: 50.0,
            reflectivity: 0.0,
        }
    }
}

impl Material {
    /// Create a material with the given albedo and default coefficients.
    pub fn new(albedo: Color) -> Self {
        Self {
            albedo,
            ..Default::default()
        }
    }

    /// Set diffuse and specular coefficients.
    pub fn with_phong(mut self, kd: f64, ks: f64, shininess: f64) -> Self {
        self.kd = kd;
        self.ks = ks;
        self.shininess = shininess;
        self
    }

    /// Set mirror reflectivity, clamped to [0, 1].
    pub fn with_reflectivity(mut self, reflectivity: f64) -> Self {
        self.reflectivity = reflectivity.clamp(0.0, 1.0);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let m = Material::default();
        assert_eq!(m.albedo, Color::ONE);
        assert_eq!(m.kd, 0.9);
        assert_eq!(m.ks, 0.5);
        assert_eq!(m.shininess, 50.0);
        assert_eq!(m.reflectivity, 0.0);
    }

    #[test]
    fn test_reflectivity_clamped() {
        assert_eq!(Material::default().with_reflectivity(1.5).reflectivity, 1.0);
        assert_eq!(Material::default().with_reflectivity(-0.2).reflectivity, 0.0);
    }
}
