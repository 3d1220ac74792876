//! Parallel frame driver.
//!
//! A fixed pool of worker threads pulls rows from a shared [`RowQueue`]
//! and writes finished pixels straight into the framebuffer. Each row is
//! claimed by exactly one worker, so workers never touch the same pixels
//! and only meet at the row counter.

use std::path::Path;
use std::sync::Mutex;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

use crate::framebuffer::gamma_correct;
use crate::shader::trace;
use crate::{Camera, Color, Framebuffer, Jitter, RenderError, RenderResult, RenderSettings, RowQueue, Scene};

/// Render a frame and write it to `output_path`.
///
/// The file is only created once every row has been rendered.
pub fn render(
    scene: &Scene,
    settings: &RenderSettings,
    camera: &Camera,
    output_path: impl AsRef<Path>,
) -> RenderResult<()> {
    let framebuffer = render_frame(scene, settings, camera)?;
    framebuffer.save(output_path)
}

/// Render a frame into memory.
pub fn render_frame(scene: &Scene, settings: &RenderSettings, camera: &Camera) -> RenderResult<Framebuffer> {
    settings.validate()?;

    log::info!(
        "Rendering {}x{} @ {} spp, depth {}, {} threads ({} surfaces, {} lights)",
        settings.width,
        settings.height,
        settings.samples_per_pixel,
        settings.max_depth,
        settings.threads,
        scene.len(),
        scene.lights().len()
    );

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(settings.threads)
        .thread_name(|i| format!("glint-worker-{i}"))
        .build()
        .map_err(|e| RenderError::ThreadPool(e.to_string()))?;

    let start = Instant::now();
    let mut framebuffer = Framebuffer::new(settings.width, settings.height);
    let queue = RowQueue::new(settings.height as usize);
    {
        // One slot per row; only the worker that claimed a row ever locks it
        let rows: Vec<Mutex<&mut [Color]>> = framebuffer.rows_mut().map(Mutex::new).collect();

        let rows_per_worker = pool.broadcast(|ctx| {
            render_worker(ctx.index(), scene, settings, camera, &queue, &rows)
        });

        for (worker, count) in rows_per_worker.iter().enumerate() {
            log::debug!("Worker {} rendered {} rows", worker, count);
        }
    }
    log::info!("Rendered in {:.3}s", start.elapsed().as_secs_f64());

    Ok(framebuffer)
}

/// Pull rows until the queue is empty. Returns how many rows this worker
/// rendered.
fn render_worker(
    worker: usize,
    scene: &Scene,
    settings: &RenderSettings,
    camera: &Camera,
    queue: &RowQueue,
    rows: &[Mutex<&mut [Color]>],
) -> usize {
    let mut rng = StdRng::seed_from_u64(clock_seed(worker));
    let mut rendered = 0;

    while let Some(y) = queue.claim() {
        if let Some(seed) = settings.seed {
            // Jitter depends on the row alone, not on which worker got it
            rng = StdRng::seed_from_u64(row_seed(seed, y));
        }

        let mut row = match rows[y].lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        for (x, pixel) in row.iter_mut().enumerate() {
            *pixel = render_pixel(camera, scene, x as u32, y as u32, settings, &mut rng);
        }
        rendered += 1;
    }

    rendered
}

/// Render a single pixel with multi-sampling.
///
/// Returns the averaged color, clamped and gamma corrected for display.
pub fn render_pixel(
    camera: &Camera,
    scene: &Scene,
    x: u32,
    y: u32,
    settings: &RenderSettings,
    rng: &mut dyn RngCore,
) -> Color {
    let width = settings.width.saturating_sub(1).max(1) as f64;
    let height = settings.height.saturating_sub(1).max(1) as f64;
    let samples = settings.samples_per_pixel.max(1);

    let mut pixel_color = Color::ZERO;
    for _ in 0..samples {
        let (jx, jy) = sample_offset(settings.jitter, rng);
        let u = (x as f64 + jx) / width;
        let v = (y as f64 + jy) / height;
        // Image row 0 is the top of the viewport
        let ray = camera.get_ray(u, 1.0 - v);
        pixel_color += trace(scene, &ray, settings.max_depth, settings.enable_reflections);
    }

    gamma_correct(pixel_color / samples as f64)
}

fn sample_offset(jitter: Jitter, rng: &mut dyn RngCore) -> (f64, f64) {
    match jitter {
        Jitter::Uniform => (rng.gen::<f64>(), rng.gen::<f64>()),
        Jitter::Fixed(offset) => (offset, offset),
    }
}

/// Per-worker seed from the worker index and the current time.
fn clock_seed(worker: usize) -> u64 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    nanos.wrapping_add(worker as u64)
}

fn row_seed(seed: u64, row: usize) -> u64 {
    seed.wrapping_add(row as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Light, Material, Plane, Sphere};
    use glint_math::Vec3;

    fn small_scene() -> Scene {
        let mut scene = Scene::new();
        scene.add(Plane::new(
            Vec3::new(0.0, -1.0, 0.0),
            Vec3::Y,
            Material::new(Color::splat(0.9)),
            Material::new(Color::splat(0.1)),
            1.0,
        ));
        scene.add(Sphere::new(
            Vec3::new(0.0, 0.0, -3.0),
            1.0,
            Material::new(Color::new(0.2, 0.4, 0.9)).with_reflectivity(0.3),
        ));
        scene.add_light(Light::new(Vec3::new(-2.0, 4.0, -1.0), Color::ONE, 20.0));
        scene
    }

    fn small_camera(settings: &RenderSettings) -> Camera {
        Camera::new(Vec3::new(0.0, 0.5, 1.0), Vec3::new(0.0, 0.0, -3.0), Vec3::Y, 60.0, settings.aspect())
    }

    #[test]
    fn test_sample_offset_fixed() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(sample_offset(Jitter::Fixed(0.5), &mut rng), (0.5, 0.5));
    }

    #[test]
    fn test_sample_offset_uniform_in_unit_square() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let (x, y) = sample_offset(Jitter::Uniform, &mut rng);
            assert!((0.0..1.0).contains(&x));
            assert!((0.0..1.0).contains(&y));
        }
    }

    #[test]
    fn test_rows_get_distinct_streams() {
        let mut first = StdRng::seed_from_u64(row_seed(7, 0));
        let mut second = StdRng::seed_from_u64(row_seed(7, 1));
        assert_ne!(first.gen::<u64>(), second.gen::<u64>());

        let mut again = StdRng::seed_from_u64(row_seed(7, 0));
        let mut first = StdRng::seed_from_u64(row_seed(7, 0));
        assert_eq!(first.gen::<u64>(), again.gen::<u64>());
    }

    #[test]
    fn test_render_pixel_is_display_range() {
        let settings = RenderSettings::default().with_resolution(16, 9).with_quality(4, 3);
        let camera = small_camera(&settings);
        let scene = small_scene();
        let mut rng = StdRng::seed_from_u64(3);

        for y in 0..settings.height {
            for x in 0..settings.width {
                let c = render_pixel(&camera, &scene, x, y, &settings, &mut rng);
                assert!(c.min_element() >= 0.0 && c.max_element() <= 1.0);
            }
        }
    }

    #[test]
    fn test_top_row_sees_sky() {
        let settings = RenderSettings::default()
            .with_resolution(8, 8)
            .with_quality(1, 3)
            .with_jitter(Jitter::Fixed(0.5));
        let mut scene = small_scene();
        scene.background = Color::new(0.0, 0.0, 1.0);
        let camera = small_camera(&settings);
        let mut rng = StdRng::seed_from_u64(0);

        let top = render_pixel(&camera, &scene, 0, 0, &settings, &mut rng);
        assert_eq!(top, Color::new(0.0, 0.0, 1.0));

        // Bottom row looks down at the floor
        let bottom = render_pixel(&camera, &scene, 0, 7, &settings, &mut rng);
        assert_ne!(bottom, Color::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_fixed_seed_is_reproducible() {
        let settings = RenderSettings::default()
            .with_resolution(24, 16)
            .with_quality(1, 3)
            .with_threads(4)
            .with_seed(1234);
        let scene = small_scene();
        let camera = small_camera(&settings);

        let first = render_frame(&scene, &settings, &camera).unwrap();
        let second = render_frame(&scene, &settings, &camera).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_thread_count_does_not_change_seeded_output() {
        let base = RenderSettings::default()
            .with_resolution(20, 12)
            .with_quality(2, 3)
            .with_seed(99);
        let scene = small_scene();
        let camera = small_camera(&base);

        let single = render_frame(&scene, &base.clone().with_threads(1), &camera).unwrap();
        let many = render_frame(&scene, &base.with_threads(5), &camera).unwrap();
        assert_eq!(single, many);
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let settings = RenderSettings::default().with_resolution(0, 4);
        let scene = small_scene();
        let camera = small_camera(&RenderSettings::default());
        assert!(matches!(
            render_frame(&scene, &settings, &camera),
            Err(RenderError::InvalidSettings(_))
        ));
    }

    #[test]
    fn test_more_threads_than_rows() {
        let settings = RenderSettings::default()
            .with_resolution(5, 2)
            .with_quality(1, 2)
            .with_threads(8);
        let scene = small_scene();
        let camera = small_camera(&settings);

        let frame = render_frame(&scene, &settings, &camera).unwrap();
        assert_eq!(frame.pixels.len(), 10);
    }
}
