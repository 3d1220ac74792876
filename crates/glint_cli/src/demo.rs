//! Built-in demonstration scene.

use glint_math::Vec3;
use glint_renderer::{Camera, Color, Light, Material, Plane, Scene, Sphere};

/// Checkered floor, four spheres (one of them a mirror) and two lights.
pub fn build_scene() -> Scene {
    let mut scene = Scene::new();
    scene.background = Color::new(0.70, 0.85, 1.0); // light blue sky
    scene.ambient = Color::new(0.06, 0.06, 0.08);

    let red = Material::new(Color::new(0.9, 0.2, 0.2)).with_phong(0.9, 0.4, 80.0);
    let green = Material::new(Color::new(0.2, 0.9, 0.2)).with_phong(0.9, 0.3, 50.0);
    let blue = Material::new(Color::new(0.2, 0.4, 0.9))
        .with_phong(0.85, 0.7, 150.0)
        .with_reflectivity(0.2);
    let mirror = Material::new(Color::ONE)
        .with_phong(0.0, 0.9, 300.0)
        .with_reflectivity(0.7);

    // Floor tiles
    let white = Material::new(Color::splat(0.95)).with_phong(0.95, 0.05, 30.0);
    let black = Material::new(Color::splat(0.05)).with_phong(0.95, 0.05, 30.0);

    // Ground plane at y=-1 with 1.5 world unit checker
    scene.add(Plane::new(Vec3::new(0.0, -1.0, 0.0), Vec3::Y, white, black, 1.5));

    scene.add(Sphere::new(Vec3::new(-1.4, 0.0, -3.5), 1.0, red));
    scene.add(Sphere::new(Vec3::new(1.6, -0.3, -4.0), 0.7, green));
    scene.add(Sphere::new(Vec3::new(0.2, 0.3, -2.5), 0.5, blue));
    scene.add(Sphere::new(Vec3::new(0.0, -0.2, -5.5), 0.8, mirror));

    scene.add_light(Light::new(Vec3::new(-2.5, 4.5, -1.5), Color::ONE, 30.0));
    scene.add_light(Light::new(Vec3::new(3.5, 3.5, -2.0), Color::new(1.0, 0.95, 0.9), 20.0));

    scene
}

/// Camera looking down the row of spheres.
pub fn build_camera(aspect: f64) -> Camera {
    Camera::new(
        Vec3::new(0.0, 1.0, 2.5),  // look_from
        Vec3::new(0.0, 0.0, -3.5), // look_at
        Vec3::Y,                   // vup
        45.0,
        aspect,
    )
}
