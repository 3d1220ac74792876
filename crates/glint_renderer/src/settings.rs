//! Frame configuration.

use crate::{RenderError, RenderResult};

/// Worker count used when hardware concurrency cannot be detected.
pub const FALLBACK_THREADS: usize = 4;

/// Sub-pixel offset applied to each sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Jitter {
    /// Independent uniform offset in [0, 1) per axis and sample
    Uniform,
    /// The same offset for every sample (0.5 samples pixel centers)
    Fixed(f64),
}

/// Render configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSettings {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Rays averaged into each pixel
    pub samples_per_pixel: u32,
    /// Reflection bounce budget handed to the shader
    pub max_depth: u32,
    /// When false, reflective materials shade locally only
    pub enable_reflections: bool,
    /// Number of render workers
    pub threads: usize,
    /// Fixed seed for reproducible jitter; `None` seeds from the clock
    pub seed: Option<u64>,
    pub jitter: Jitter,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 800,
            height: 450,
            samples_per_pixel: 4,
            max_depth: 3,
            enable_reflections: true,
            threads: default_threads(),
            seed: None,
            jitter: Jitter::Uniform,
        }
    }
}

impl RenderSettings {
    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set quality settings.
    pub fn with_quality(mut self, samples_per_pixel: u32, max_depth: u32) -> Self {
        self.samples_per_pixel = samples_per_pixel;
        self.max_depth = max_depth;
        self
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_jitter(mut self, jitter: Jitter) -> Self {
        self.jitter = jitter;
        self
    }

    pub fn with_reflections(mut self, enabled: bool) -> Self {
        self.enable_reflections = enabled;
        self
    }

    /// Width over height.
    pub fn aspect(&self) -> f64 {
        self.width as f64 / self.height.max(1) as f64
    }

    /// Reject configurations the frame driver cannot run.
    pub fn validate(&self) -> RenderResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(RenderError::InvalidSettings(format!(
                "resolution must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if self.samples_per_pixel == 0 {
            return Err(RenderError::InvalidSettings(
                "samples_per_pixel must be at least 1".into(),
            ));
        }
        if self.threads == 0 {
            return Err(RenderError::InvalidSettings("threads must be at least 1".into()));
        }
        Ok(())
    }
}

/// Detected hardware concurrency, or [`FALLBACK_THREADS`].
pub fn default_threads() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(FALLBACK_THREADS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = RenderSettings::default();
        assert_eq!(settings.width, 800);
        assert_eq!(settings.height, 450);
        assert_eq!(settings.samples_per_pixel, 4);
        assert_eq!(settings.max_depth, 3);
        assert!(settings.enable_reflections);
        assert!(settings.threads >= 1);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zeroes() {
        let base = RenderSettings::default();
        assert!(matches!(
            base.clone().with_resolution(0, 10).validate(),
            Err(RenderError::InvalidSettings(_))
        ));
        assert!(base.clone().with_quality(0, 3).validate().is_err());
        assert!(base.clone().with_threads(0).validate().is_err());
        // Zero depth is legal: every ray is absorbed
        assert!(base.with_quality(1, 0).validate().is_ok());
    }

    #[test]
    fn test_aspect() {
        let settings = RenderSettings::default().with_resolution(400, 200);
        assert_eq!(settings.aspect(), 2.0);
    }
}
