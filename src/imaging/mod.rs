//! Image processing on top of the `image` crate.
//!
//! | Step | Crate / function |
//! |---|---|
//! | **Decode** | `image::ImageReader` → RGBA8 |
//! | **Normalize** | centered square crop on the short side |
//! | **Resample** | `imageops::resize`, Lanczos3 |
//! | **Sharpen** | Gaussian blur + unsharp mask (small sizes only) |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for crop math (unit testable)
//! - **Parameters**: Data structures describing sharpening
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: High-level functions combining calculations + backend

pub mod backend;
mod calculations;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, ImageBackend};
pub use calculations::{CropRect, calculate_square_crop};
pub use operations::{SquareImage, normalize_square, resample_variants, sharpen_variant};
pub use params::{SharpenPolicy, Sharpening};
pub use rust_backend::RustBackend;
