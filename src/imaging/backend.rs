//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the four pixel operations the pipeline
//! needs: decode, crop, resize, and sharpen. Everything operates on canonical
//! RGBA8 buffers (`image::RgbaImage`), so alpha survives every step.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend), built on the `image`
//! crate. Tests swap in a recording mock.

use super::calculations::CropRect;
use super::params::Sharpening;
use image::RgbaImage;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Decode failed: {0}")]
    Decode(String),
    #[error("Processing failed: {0}")]
    ProcessingFailed(String),
}

/// Trait for image processing backends.
///
/// Every backend must implement all four operations so the pipeline stays
/// backend-agnostic.
pub trait ImageBackend {
    /// Decode an image file into RGBA8, whatever its stored color type.
    fn decode(&self, path: &Path) -> Result<RgbaImage, BackendError>;

    /// Cut `rect` out of `image`.
    fn crop(&self, image: &RgbaImage, rect: CropRect) -> Result<RgbaImage, BackendError>;

    /// Resample a square image to exactly `side`×`side`.
    fn resize(&self, image: &RgbaImage, side: u32) -> Result<RgbaImage, BackendError>;

    /// Apply an unsharp mask.
    fn sharpen(&self, image: &RgbaImage, params: &Sharpening) -> Result<RgbaImage, BackendError>;
}
