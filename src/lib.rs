//! # icopack
//!
//! Pack a single raster image into a multi-resolution Windows icon (`.ico`).
//!
//! # Architecture: Linear Pipeline
//!
//! ```text
//! 1. Decode     source file   →  RGBA8 buffer
//! 2. Normalize  RGBA8         →  square (center crop on the short side)
//! 3. Resample   square        →  one variant per size (Lanczos3)
//! 4. Sharpen    variant ≤64px →  unsharp-masked variant (optional)
//! 5. Write      variants      →  .ico, one PNG entry per size
//! ```
//!
//! Each step is a plain function over owned buffers. Pixel work goes through
//! the [`imaging::ImageBackend`] trait and file output through the
//! [`container::ContainerWriter`] trait, so the pipeline logic is unit-tested
//! against recording mocks without decoding or encoding anything.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`pipeline`] | [`pipeline::convert`] — runs the steps above for one request |
//! | [`imaging`] | Crop math, sharpening parameters, the pixel backend |
//! | [`container`] | Variants keyed by side and the `.ico` writer |
//! | [`config`] | `IconConfig`: sizes and sharpening, loaded from TOML or defaults |
//! | [`types`] | [`types::SizeSet`] and the default size list |
//! | [`naming`] | Default output path (`logo.png` → `logo.ico`) |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Every Entry Is Written Verbatim
//!
//! Some ICO encoders take one large image plus a list of sizes and derive the
//! small entries themselves. That silently throws away any per-size work such
//! as sharpening. [`container::IcoWriter`] instead embeds exactly the buffers
//! it is handed, one per side.
//!
//! ## Crop, Never Stretch
//!
//! Icons are square. A non-square source is cut down to its centered square
//! rather than padded or squashed, so the aspect ratio of the artwork is
//! always kept.
//!
//! ## Configuration Is Passed In
//!
//! The default size list lives in [`config::IconConfig::default`] and reaches
//! the pipeline through [`pipeline::ConvertRequest`]; nothing reads a global.

pub mod config;
pub mod container;
pub mod imaging;
pub mod naming;
pub mod output;
pub mod pipeline;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
