//! glint - render the demonstration scene to an image file.

use anyhow::{Context, Result};
use clap::Parser;
use glint_renderer::{default_threads, render, RenderSettings};
use std::path::PathBuf;
use std::time::Instant;

mod demo;

/// Smallest accepted image side, in pixels.
const MIN_DIMENSION: u32 = 64;

#[derive(Parser, Debug)]
#[command(name = "glint")]
#[command(about = "Whitted-style ray tracer for spheres and checkered planes", long_about = None)]
struct Cli {
    /// Image width in pixels (at least 64)
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Image height in pixels (at least 64)
    #[arg(long, default_value_t = 450)]
    height: u32,

    /// Jittered samples per pixel
    #[arg(short, long, default_value_t = 4)]
    samples: u32,

    /// Worker threads (defaults to the number of hardware threads)
    #[arg(short, long)]
    threads: Option<usize>,

    /// Reflection bounce budget
    #[arg(long, default_value_t = 3)]
    max_depth: u32,

    /// Fixed seed for reproducible sample jitter
    #[arg(long)]
    seed: Option<u64>,

    /// Shade reflective surfaces locally only
    #[arg(long)]
    no_reflections: bool,

    /// Output file (format determined by extension: .ppm, .png)
    #[arg(short, long, default_value = "out.ppm")]
    output: PathBuf,
}

impl Cli {
    /// Clamp the options into a runnable configuration.
    fn settings(&self) -> RenderSettings {
        let mut settings = RenderSettings::default()
            .with_resolution(self.width.max(MIN_DIMENSION), self.height.max(MIN_DIMENSION))
            .with_quality(self.samples.max(1), self.max_depth)
            .with_threads(self.threads.unwrap_or_else(default_threads).max(1))
            .with_reflections(!self.no_reflections);
        if let Some(seed) = self.seed {
            settings = settings.with_seed(seed);
        }
        settings
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let settings = cli.settings();

    let scene = demo::build_scene();
    let camera = demo::build_camera(settings.aspect());

    let start = Instant::now();
    render(&scene, &settings, &camera, &cli.output)
        .with_context(|| format!("Failed to render {}", cli.output.display()))?;

    log::info!(
        "Rendered {}x{} spp={} threads={} in {:.3}s",
        settings.width,
        settings.height,
        settings.samples_per_pixel,
        settings.threads,
        start.elapsed().as_secs_f64()
    );
    if cli.output.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("ppm")) {
        log::info!(
            "Tip: view with `magick display {0}` or convert: `magick convert {0} out.png`",
            cli.output.display()
        );
    }

    Ok(())
}
