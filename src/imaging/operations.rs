//! High-level image operations.
//!
//! These functions combine calculations with backend execution: they decide
//! what has to happen to the pixels (crop? which sizes? sharpen this one?) and
//! ask the backend to do it.

use super::backend::{BackendError, ImageBackend};
use super::calculations::calculate_square_crop;
use super::params::SharpenPolicy;
use crate::container::Variant;
use crate::types::SizeSet;
use image::RgbaImage;

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, BackendError>;

/// An RGBA image whose width equals its height.
///
/// Only [`normalize_square`] builds one, so holders can rely on the shape.
#[derive(Debug, Clone)]
pub struct SquareImage {
    image: RgbaImage,
    /// Source dimensions when a crop was needed.
    cropped_from: Option<(u32, u32)>,
}

impl SquareImage {
    pub fn side(&self) -> u32 {
        self.image.width()
    }

    pub fn as_rgba(&self) -> &RgbaImage {
        &self.image
    }

    /// Original `(width, height)` if the source was not square.
    pub fn cropped_from(&self) -> Option<(u32, u32)> {
        self.cropped_from
    }
}

/// Center-crop `source` to a square on its shorter side.
///
/// Square sources pass through untouched. Nothing is stretched or padded, so
/// content outside the centered square is lost.
pub fn normalize_square(backend: &impl ImageBackend, source: RgbaImage) -> Result<SquareImage> {
    let (width, height) = source.dimensions();
    if width == 0 || height == 0 {
        return Err(BackendError::ProcessingFailed(format!(
            "source image is empty ({width}x{height})"
        )));
    }

    match calculate_square_crop(width, height) {
        None => Ok(SquareImage {
            image: source,
            cropped_from: None,
        }),
        Some(rect) => Ok(SquareImage {
            image: backend.crop(&source, rect)?,
            cropped_from: Some((width, height)),
        }),
    }
}

/// Resample the square once per requested size, smallest first.
pub fn resample_variants(
    backend: &impl ImageBackend,
    square: &SquareImage,
    sizes: &SizeSet,
) -> Result<Vec<Variant>> {
    sizes
        .iter()
        .map(|side| {
            let image = backend.resize(square.as_rgba(), side)?;
            Ok(Variant::new(side, image))
        })
        .collect()
}

/// Sharpen `variant` if a policy is active and covers its side.
pub fn sharpen_variant(
    backend: &impl ImageBackend,
    variant: Variant,
    policy: Option<&SharpenPolicy>,
) -> Result<Variant> {
    match policy {
        Some(policy) if policy.applies_to(variant.side()) => {
            let sharpened = backend.sharpen(variant.image(), &policy.params)?;
            Ok(Variant::sharpened(variant.side(), sharpened))
        }
        _ => Ok(variant),
    }
}
