//! Shared test utilities for the icopack unit tests.
//!
//! Fixture images are synthesized on the fly into a `TempDir`, and written
//! icons are read back entry by entry with the `ico` crate so assertions see
//! exactly what a consumer of the file would see.

use image::{Rgba, RgbaImage};
use std::path::Path;

// =========================================================================
// Fixture images
// =========================================================================

/// Write a `width`×`height` RGBA PNG: a 2px fully transparent frame around an
/// opaque gradient.
pub fn create_test_png(path: &Path, width: u32, height: u32) {
    test_image(width, height).save(path).unwrap();
}

/// The pixel content [`create_test_png`] writes.
pub fn test_image(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        let border = x < 2 || y < 2 || x + 2 >= width || y + 2 >= height;
        if border {
            Rgba([0, 0, 0, 0])
        } else {
            Rgba([(x % 256) as u8, (y % 256) as u8, 160, 255])
        }
    })
}

/// A `side`×`side` image whose left half is `left` and right half is `right`.
pub fn split_image(side: u32, left: [u8; 4], right: [u8; 4]) -> RgbaImage {
    RgbaImage::from_fn(side, side, |x, _| {
        if x < side / 2 {
            Rgba(left)
        } else {
            Rgba(right)
        }
    })
}

// =========================================================================
// Icon inspection
// =========================================================================

fn read_icon_dir(path: &Path) -> ico::IconDir {
    let file = std::fs::File::open(path)
        .unwrap_or_else(|e| panic!("cannot open icon {}: {e}", path.display()));
    ico::IconDir::read(file)
        .unwrap_or_else(|e| panic!("{} is not a valid icon: {e}", path.display()))
}

/// `(width, height)` of every directory entry, in file order.
pub fn ico_entry_dimensions(path: &Path) -> Vec<(u32, u32)> {
    read_icon_dir(path)
        .entries()
        .iter()
        .map(|e| (e.width(), e.height()))
        .collect()
}

/// Decode the entry with the given side. Panics if it is missing.
pub fn decode_ico_entry(path: &Path, side: u32) -> RgbaImage {
    let dir = read_icon_dir(path);
    let entry = dir
        .entries()
        .iter()
        .find(|e| e.width() == side)
        .unwrap_or_else(|| {
            let sides: Vec<u32> = dir.entries().iter().map(|e| e.width()).collect();
            panic!("no {side}px entry in {}. Available: {sides:?}", path.display())
        });
    let decoded = entry.decode().unwrap();
    RgbaImage::from_raw(decoded.width(), decoded.height(), decoded.rgba_data().to_vec()).unwrap()
}
