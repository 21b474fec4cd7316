//! Pure calculation functions for image dimensions.
//!
//! All functions here are pure and testable without any I/O or images.

/// A crop rectangle in source pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRect {
    pub left: u32,
    pub top: u32,
    pub side: u32,
}

impl CropRect {
    /// Right edge, exclusive.
    pub fn right(&self) -> u32 {
        self.left + self.side
    }

    /// Bottom edge, exclusive.
    pub fn bottom(&self) -> u32 {
        self.top + self.side
    }
}

/// Calculate the centered square crop for a source image.
///
/// Returns `None` when the source is already square and should pass through
/// untouched. Otherwise the square uses the shorter side, and the longer side
/// is trimmed evenly (integer division, so an odd surplus leaves the extra
/// pixel on the right/bottom).
///
/// # Examples
/// ```
/// # use icopack::imaging::{CropRect, calculate_square_crop};
/// // 200x100 landscape → 100x100 square starting at x=50
/// assert_eq!(
///     calculate_square_crop(200, 100),
///     Some(CropRect { left: 50, top: 0, side: 100 })
/// );
///
/// // Already square → no crop
/// assert_eq!(calculate_square_crop(64, 64), None);
/// ```
pub fn calculate_square_crop(width: u32, height: u32) -> Option<CropRect> {
    if width == height {
        return None;
    }
    let side = width.min(height);
    Some(CropRect {
        left: (width - side) / 2,
        top: (height - side) / 2,
        side,
    })
}
