//! Frame storage and image encoding.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::{Color, RenderError, RenderResult};
use glint_math::clamp01;

/// Display-ready colors for a whole frame, row-major, top row first.
#[derive(Debug, Clone, PartialEq)]
pub struct Framebuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl Framebuffer {
    /// Create a new framebuffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Mutable rows, top to bottom.
    pub fn rows_mut(&mut self) -> std::slice::ChunksMut<'_, Color> {
        self.pixels.chunks_mut(self.width.max(1) as usize)
    }

    /// Packed 8-bit RGB triples.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgb8(*color));
        }
        bytes
    }

    /// Write binary PPM (P6).
    pub fn write_ppm<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        write!(writer, "P6\n{} {}\n255\n", self.width, self.height)?;
        writer.write_all(&self.to_rgb8())?;
        writer.flush()
    }

    /// Save to `path`, picking the encoding from the extension.
    ///
    /// `.ppm` writes binary PPM, `.png` goes through the `image` crate.
    pub fn save(&self, path: impl AsRef<Path>) -> RenderResult<()> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("ppm") => {
                let mut writer = BufWriter::new(File::create(path)?);
                self.write_ppm(&mut writer)?;
            }
            Some("png") => {
                let image = image::RgbImage::from_raw(self.width, self.height, self.to_rgb8())
                    .ok_or(RenderError::BufferSize {
                        width: self.width,
                        height: self.height,
                        len: self.pixels.len(),
                    })?;
                image.save_with_format(path, image::ImageFormat::Png)?;
            }
            _ => return Err(RenderError::UnsupportedFormat(path.display().to_string())),
        }

        log::info!("Wrote {}", path.display());
        Ok(())
    }
}

/// Convert a display color to 8-bit RGB, truncating `255.999 * c`.
pub fn color_to_rgb8(color: Color) -> [u8; 3] {
    let c = clamp01(color);
    [
        (255.999 * c.x) as u8,
        (255.999 * c.y) as u8,
        (255.999 * c.z) as u8,
    ]
}

/// Clamp to [0, 1] then apply the square-root gamma approximation.
#[inline]
pub fn gamma_correct(linear: Color) -> Color {
    let c = clamp01(linear);
    Color::new(c.x.sqrt(), c.y.sqrt(), c.z.sqrt())
}
