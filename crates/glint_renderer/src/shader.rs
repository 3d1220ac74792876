//! Whitted-style shading.
//!
//! Local illumination is ambient plus Phong diffuse and specular from
//! every unoccluded point light. Reflective materials blend in the color
//! seen along the mirror direction, recursing until the depth budget runs
//! out.

use crate::{Color, HitRecord, Light, Scene};
use glint_math::{reflect, Interval, Ray, Vec3};

/// Offset used for secondary ray origins and interval bounds.
pub const RAY_EPSILON: f64 = 1e-4;

/// Compute the color seen along `ray`, with up to `depth` bounces.
///
/// A depth of zero is fully absorbed and returns black. The result is
/// not clamped.
pub fn shade(scene: &Scene, ray: &Ray, depth: u32) -> Color {
    trace(scene, ray, depth, true)
}

/// Like [`shade`], but never spawns reflection rays.
pub fn shade_direct(scene: &Scene, ray: &Ray, depth: u32) -> Color {
    trace(scene, ray, depth, false)
}

pub(crate) fn trace(scene: &Scene, ray: &Ray, depth: u32, reflections: bool) -> Color {
    if depth == 0 {
        return Color::ZERO;
    }

    let Some(rec) = scene.closest_hit(ray, Interval::from_min(RAY_EPSILON)) else {
        return scene.background;
    };

    let view = -ray.direction();
    let mut color = scene.ambient * rec.material.albedo;

    for light in scene.lights() {
        color += direct_light(scene, &rec, light, view);
    }

    let reflectivity = rec.material.reflectivity;
    if reflections && reflectivity > 0.0 {
        let mirrored = Ray::new(rec.p + rec.normal * RAY_EPSILON, reflect(-view, rec.normal));
        let reflected = trace(scene, &mirrored, depth - 1, reflections);
        color = (1.0 - reflectivity) * color + reflectivity * reflected;
    }

    color
}

/// Diffuse and specular contribution of one light, or black when the
/// light is occluded.
fn direct_light(scene: &Scene, rec: &HitRecord, light: &Light, view: Vec3) -> Color {
    let to_light = light.position - rec.p;
    let distance_squared = to_light.length_squared();
    let distance = distance_squared.sqrt();
    let light_dir = to_light / distance;

    // Hard shadow: anything between the hit and the light blocks it fully
    let shadow_ray = Ray::new(rec.p + rec.normal * RAY_EPSILON, light_dir);
    let shadow_t = Interval::new(RAY_EPSILON, distance - RAY_EPSILON);
    if scene.closest_hit(&shadow_ray, shadow_t).is_some() {
        return Color::ZERO;
    }

    let material = &rec.material;
    let radiance = light.radiance_at(distance_squared);

    let n_dot_l = rec.normal.dot(light_dir).max(0.0);
    let diffuse = material.kd * n_dot_l * material.albedo * radiance;

    let r_dot_v = reflect(-light_dir, rec.normal).dot(view).max(0.0);
    let specular = material.ks * r_dot_v.powf(material.shininess) * radiance;

    diffuse + specular
}
