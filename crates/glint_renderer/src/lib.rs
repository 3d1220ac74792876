//! Glint - CPU Whitted-style ray tracer
//!
//! Renders spheres and checkered planes lit by point lights, with hard
//! shadows, Phong highlights and mirror reflection. Rows of the image are
//! shared out to a fixed pool of worker threads.

mod camera;
mod error;
mod framebuffer;
mod light;
mod material;
mod plane;
mod renderer;
mod rows;
mod scene;
mod settings;
mod shader;
mod sphere;
mod surface;

pub use camera::Camera;
pub use error::{RenderError, RenderResult};
pub use framebuffer::{color_to_rgb8, gamma_correct, Framebuffer};
pub use light::Light;
pub use material::{Color, Material};
pub use plane::Plane;
pub use renderer::{render, render_frame, render_pixel};
pub use rows::RowQueue;
pub use scene::Scene;
pub use settings::{default_threads, Jitter, RenderSettings, FALLBACK_THREADS};
pub use shader::{shade, shade_direct, RAY_EPSILON};
pub use sphere::Sphere;
pub use surface::{HitRecord, Surface};

/// Re-export Vec3 and common math types from glint_math
pub use glint_math::{Interval, Ray, Vec3};
