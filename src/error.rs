//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O, codec, resampler and config errors, and provides semantic
//! variants for invalid sizes and degenerate inputs.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image codec error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Image buffer error: {0}")]
    ImageBuffer(#[from] fast_image_resize::ImageBufferError),

    #[error("Resize error: {0}")]
    Resize(#[from] fast_image_resize::ResizeError),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Size must be greater than 0, got: {size}")]
    ZeroSize { size: u32 },

    #[error("Image {path:?} has a zero-length side ({width}x{height})")]
    ZeroDimension {
        path: PathBuf,
        width: u32,
        height: u32,
    },

    #[error("Processing error: {0}")]
    Processing(String),
}
