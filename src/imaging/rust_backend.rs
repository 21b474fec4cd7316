//! Pure Rust image processing backend.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (PNG, JPEG, GIF, BMP, TIFF, WebP, ICO) | `image::ImageReader` with content sniffing |
//! | Crop | `image::imageops::crop_imm` |
//! | Resize | `image::imageops::resize` with `Lanczos3` filter |
//! | Sharpening | `image::imageops::blur` + unsharp mask over the color channels |

use super::backend::{BackendError, ImageBackend};
use super::calculations::CropRect;
use super::params::Sharpening;
use image::imageops::{self, FilterType};
use image::{ImageReader, RgbaImage};
use std::path::Path;

/// Pure Rust backend using the `image` crate ecosystem.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Load and decode an image from disk.
///
/// The format is sniffed from the file header, so a PNG saved as `.img` still
/// decodes. Multi-frame formats yield their first frame.
fn load_image(path: &Path) -> Result<RgbaImage, BackendError> {
    let reader = ImageReader::open(path)
        .map_err(BackendError::Io)?
        .with_guessed_format()
        .map_err(BackendError::Io)?;
    let decoded = reader
        .decode()
        .map_err(|e| BackendError::Decode(format!("{}: {}", path.display(), e)))?;
    Ok(decoded.into_rgba8())
}

/// Unsharp mask: `out = orig + (orig - blur(orig)) * amount` where the
/// difference exceeds `threshold`.
///
/// Only the color channels are sharpened; alpha is copied through so icon
/// silhouettes keep their antialiased edge.
fn unsharp_mask(image: &RgbaImage, params: &Sharpening) -> RgbaImage {
    let blurred = imageops::blur(image, params.radius);
    let amount = params.amount();
    let mut sharpened = image.clone();

    for (out, (orig, soft)) in sharpened
        .pixels_mut()
        .zip(image.pixels().zip(blurred.pixels()))
    {
        for c in 0..3 {
            let diff = orig[c] as i32 - soft[c] as i32;
            if diff.abs() > params.threshold {
                let value = orig[c] as f32 + diff as f32 * amount;
                out[c] = value.round().clamp(0.0, 255.0) as u8;
            }
        }
    }

    sharpened
}

impl ImageBackend for RustBackend {
    fn decode(&self, path: &Path) -> Result<RgbaImage, BackendError> {
        load_image(path)
    }

    fn crop(&self, image: &RgbaImage, rect: CropRect) -> Result<RgbaImage, BackendError> {
        let (width, height) = image.dimensions();
        if rect.side == 0 || rect.right() > width || rect.bottom() > height {
            return Err(BackendError::ProcessingFailed(format!(
                "crop {}x{}+{}+{} outside {}x{} image",
                rect.side, rect.side, rect.left, rect.top, width, height
            )));
        }
        Ok(imageops::crop_imm(image, rect.left, rect.top, rect.side, rect.side).to_image())
    }

    fn resize(&self, image: &RgbaImage, side: u32) -> Result<RgbaImage, BackendError> {
        if side == 0 {
            return Err(BackendError::ProcessingFailed(
                "cannot resize to a zero-pixel side".into(),
            ));
        }
        Ok(imageops::resize(image, side, side, FilterType::Lanczos3))
    }

    fn sharpen(&self, image: &RgbaImage, params: &Sharpening) -> Result<RgbaImage, BackendError> {
        if params.radius <= 0.0 {
            return Err(BackendError::ProcessingFailed(format!(
                "unsharp radius must be positive, got {}",
                params.radius
            )));
        }
        Ok(unsharp_mask(image, params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{create_test_png, split_image};
    use image::{GrayImage, Luma, Rgba};

    #[test]
    fn decode_synthetic_png_keeps_alpha() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("logo.png");
        create_test_png(&path, 40, 30);

        let image = RustBackend::new().decode(&path).unwrap();
        assert_eq!(image.dimensions(), (40, 30));
        assert_eq!(image.get_pixel(0, 0)[3], 0);
        assert_eq!(image.get_pixel(20, 15)[3], 255);
    }

    #[test]
    fn decode_converts_grayscale_to_rgba() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("gray.png");
        GrayImage::from_pixel(8, 8, Luma([90])).save(&path).unwrap();

        let image = RustBackend::new().decode(&path).unwrap();
        assert_eq!(image.get_pixel(3, 3), &Rgba([90, 90, 90, 255]));
    }

    #[test]
    fn decode_sniffs_format_from_content() {
        let tmp = tempfile::TempDir::new().unwrap();
        let png = tmp.path().join("logo.png");
        create_test_png(&png, 12, 12);
        let renamed = tmp.path().join("logo.bin");
        std::fs::rename(&png, &renamed).unwrap();

        let image = RustBackend::new().decode(&renamed).unwrap();
        assert_eq!(image.dimensions(), (12, 12));
    }

    #[test]
    fn decode_nonexistent_file_is_io_error() {
        let result = RustBackend::new().decode(Path::new("/nonexistent/logo.png"));
        assert!(matches!(result, Err(BackendError::Io(_))));
    }

    #[test]
    fn decode_garbage_is_decode_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("broken.png");
        std::fs::write(&path, b"definitely not an image").unwrap();

        let result = RustBackend::new().decode(&path);
        assert!(matches!(result, Err(BackendError::Decode(_))));
    }

    #[test]
    fn crop_takes_requested_window() {
        let image = RgbaImage::from_fn(6, 4, |x, y| Rgba([x as u8, y as u8, 0, 255]));
        let cropped = RustBackend::new()
            .crop(&image, CropRect { left: 1, top: 0, side: 4 })
            .unwrap();

        assert_eq!(cropped.dimensions(), (4, 4));
        assert_eq!(cropped.get_pixel(0, 0), &Rgba([1, 0, 0, 255]));
        assert_eq!(cropped.get_pixel(3, 3), &Rgba([4, 3, 0, 255]));
    }

    #[test]
    fn crop_outside_bounds_errors() {
        let image = RgbaImage::new(10, 5);
        let result = RustBackend::new().crop(&image, CropRect { left: 6, top: 0, side: 5 });
        assert!(result.is_err());
    }

    #[test]
    fn resize_yields_exact_square() {
        let image = RgbaImage::from_pixel(100, 100, Rgba([10, 20, 30, 255]));
        let backend = RustBackend::new();
        for side in [16, 24, 48, 100, 256] {
            let resized = backend.resize(&image, side).unwrap();
            assert_eq!(resized.dimensions(), (side, side));
        }
    }

    #[test]
    fn resize_to_zero_errors() {
        let image = RgbaImage::new(8, 8);
        assert!(RustBackend::new().resize(&image, 0).is_err());
    }

    #[test]
    fn resize_keeps_transparent_and_opaque_regions() {
        // Left half fully transparent, right half opaque red.
        let image = RgbaImage::from_fn(64, 64, |x, _| {
            if x < 32 {
                Rgba([0, 0, 0, 0])
            } else {
                Rgba([255, 0, 0, 255])
            }
        });

        let resized = RustBackend::new().resize(&image, 16).unwrap();
        assert!(resized.get_pixel(0, 8)[3] <= 5);
        assert!(resized.get_pixel(15, 8)[3] >= 250);
    }

    #[test]
    fn sharpen_leaves_flat_image_untouched() {
        let image = RgbaImage::from_pixel(16, 16, Rgba([128, 128, 128, 255]));
        let sharpened = RustBackend::new()
            .sharpen(&image, &Sharpening::icon())
            .unwrap();
        assert_eq!(sharpened, image);
    }

    #[test]
    fn sharpen_boosts_contrast_across_edges() {
        let image = split_image(16, [64, 64, 64, 255], [192, 192, 192, 255]);
        let sharpened = RustBackend::new()
            .sharpen(&image, &Sharpening::icon())
            .unwrap();

        // Dark side of the edge gets darker, light side lighter.
        assert!(sharpened.get_pixel(7, 8)[0] < 64);
        assert!(sharpened.get_pixel(8, 8)[0] > 192);
        // Far from the edge nothing moves.
        assert_eq!(sharpened.get_pixel(0, 8), image.get_pixel(0, 8));
        assert_eq!(sharpened.get_pixel(15, 8), image.get_pixel(15, 8));
    }

    #[test]
    fn sharpen_preserves_alpha() {
        let image = split_image(16, [64, 64, 64, 200], [192, 192, 192, 200]);
        let sharpened = RustBackend::new()
            .sharpen(&image, &Sharpening::icon())
            .unwrap();
        assert!(sharpened.pixels().all(|p| p[3] == 200));
    }

    #[test]
    fn sharpen_high_threshold_is_noop() {
        let image = split_image(16, [64, 64, 64, 255], [192, 192, 192, 255]);
        let params = Sharpening {
            threshold: 255,
            ..Sharpening::icon()
        };
        let sharpened = RustBackend::new().sharpen(&image, &params).unwrap();
        assert_eq!(sharpened, image);
    }

    #[test]
    fn sharpen_rejects_non_positive_radius() {
        let image = RgbaImage::new(4, 4);
        let params = Sharpening {
            radius: 0.0,
            ..Sharpening::icon()
        };
        assert!(RustBackend::new().sharpen(&image, &params).is_err());
    }
}
