//! Errors raised by the frame driver and image output.

use thiserror::Error;

/// Errors that can occur while rendering or writing a frame.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Invalid render settings: {0}")]
    InvalidSettings(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Framebuffer holds {len} pixels, expected {width}x{height}")]
    BufferSize { width: u32, height: u32, len: usize },

    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to start worker pool: {0}")]
    ThreadPool(String),
}

pub type RenderResult<T> = Result<T, RenderError>;
