//! Multi-resolution icon container.
//!
//! An [`IconContainer`] maps each side length to exactly one prepared
//! [`Variant`]. A [`ContainerWriter`] serializes that map as-is: every entry in
//! the output file is the variant's own pixel buffer, so sharpened small sizes
//! reach the file instead of being re-derived from the largest image.
//!
//! ## ICO layout
//!
//! [`IcoWriter`] stores each variant as a PNG-compressed directory entry
//! (`image::codecs::ico::IcoFrame::as_png`). PNG entries keep the full 8-bit
//! alpha channel and are readable by every ICO consumer since Windows Vista.
//! Entries are written smallest first.

use crate::types::SizeSet;
use image::ExtendedColorType;
use image::RgbaImage;
use image::codecs::ico::{IcoEncoder, IcoFrame};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use thiserror::Error;

/// Largest side an ICO directory entry can describe.
pub const MAX_ICO_SIDE: u32 = 256;

#[derive(Error, Debug)]
pub enum ContainerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("ICO encoding failed: {0}")]
    Encode(#[from] image::ImageError),
    #[error("ICO entries must be 1-{MAX_ICO_SIDE}px, got {0}px")]
    InvalidSize(u32),
    #[error("{side}px variant holds a {width}x{height} image")]
    ShapeMismatch { side: u32, width: u32, height: u32 },
    #[error("icon has no variants to write")]
    Empty,
}

/// One square rendition of the source at a specific side length.
#[derive(Debug, Clone, PartialEq)]
pub struct Variant {
    side: u32,
    image: RgbaImage,
    sharpened: bool,
}

impl Variant {
    pub fn new(side: u32, image: RgbaImage) -> Self {
        Self {
            side,
            image,
            sharpened: false,
        }
    }

    /// A variant that went through the unsharp mask.
    pub fn sharpened(side: u32, image: RgbaImage) -> Self {
        Self {
            side,
            image,
            sharpened: true,
        }
    }

    pub fn side(&self) -> u32 {
        self.side
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn is_sharpened(&self) -> bool {
        self.sharpened
    }
}

/// Variants keyed by side length, iterated smallest first.
#[derive(Debug, Clone, Default)]
pub struct IconContainer {
    variants: BTreeMap<u32, Variant>,
}

impl IconContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variant, replacing any earlier one with the same side.
    pub fn insert(&mut self, variant: Variant) -> Option<Variant> {
        self.variants.insert(variant.side, variant)
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    pub fn get(&self, side: u32) -> Option<&Variant> {
        self.variants.get(&side)
    }

    pub fn variants(&self) -> impl Iterator<Item = &Variant> {
        self.variants.values()
    }

    pub fn sizes(&self) -> SizeSet {
        self.variants.keys().copied().collect()
    }

    /// Sides of the variants that were sharpened.
    pub fn sharpened_sizes(&self) -> SizeSet {
        self.variants()
            .filter(|v| v.is_sharpened())
            .map(Variant::side)
            .collect()
    }

    /// The variant standing in for the whole icon.
    ///
    /// That is the one at `requested_max`; if no variant has that side, the
    /// largest variant present is used instead. `None` only when empty.
    pub fn base(&self, requested_max: u32) -> Option<&Variant> {
        self.get(requested_max)
            .or_else(|| self.variants.values().next_back())
    }
}

impl FromIterator<Variant> for IconContainer {
    fn from_iter<I: IntoIterator<Item = Variant>>(iter: I) -> Self {
        let mut container = Self::new();
        for variant in iter {
            container.insert(variant);
        }
        container
    }
}

/// Serializes a prepared [`IconContainer`] to disk.
pub trait ContainerWriter {
    /// Reject sizes the format cannot hold, before any pixel work happens.
    fn check_sizes(&self, sizes: &SizeSet) -> Result<(), ContainerError>;

    /// Write every variant verbatim to `path`, replacing any existing file.
    ///
    /// Returns the sizes actually embedded.
    fn write(&self, container: &IconContainer, path: &Path) -> Result<SizeSet, ContainerError>;
}

/// Windows `.ico` writer with PNG-compressed entries.
pub struct IcoWriter;

impl IcoWriter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for IcoWriter {
    fn default() -> Self {
        Self::new()
    }
}

fn check_side(side: u32) -> Result<(), ContainerError> {
    if side == 0 || side > MAX_ICO_SIDE {
        return Err(ContainerError::InvalidSize(side));
    }
    Ok(())
}

fn encode_frame(variant: &Variant) -> Result<IcoFrame<'static>, ContainerError> {
    let side = variant.side();
    check_side(side)?;
    let (width, height) = variant.image().dimensions();
    if width != side || height != side {
        return Err(ContainerError::ShapeMismatch {
            side,
            width,
            height,
        });
    }
    Ok(IcoFrame::as_png(
        variant.image().as_raw(),
        side,
        side,
        ExtendedColorType::Rgba8,
    )?)
}

impl ContainerWriter for IcoWriter {
    fn check_sizes(&self, sizes: &SizeSet) -> Result<(), ContainerError> {
        if sizes.is_empty() {
            return Err(ContainerError::Empty);
        }
        sizes.iter().try_for_each(check_side)
    }

    fn write(&self, container: &IconContainer, path: &Path) -> Result<SizeSet, ContainerError> {
        if container.is_empty() {
            return Err(ContainerError::Empty);
        }

        // Encode everything first so a bad variant never leaves a truncated file.
        let frames = container
            .variants()
            .map(encode_frame)
            .collect::<Result<Vec<_>, _>>()?;

        let mut writer = BufWriter::new(File::create(path)?);
        IcoEncoder::new(&mut writer).encode_images(&frames)?;
        writer.flush()?;

        Ok(container.sizes())
    }
}
