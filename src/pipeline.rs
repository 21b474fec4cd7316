//! Source image → `.ico` conversion.
//!
//! ```text
//! decode → normalize (square crop) → resample ×N → sharpen (small sizes) → write
//! ```
//!
//! [`convert`] is the single entry point. It takes its backend and writer as
//! parameters, and its sizes and sharpening through a [`ConvertRequest`], so
//! nothing depends on process-wide defaults. Requested sizes are checked
//! against the container format before the source is even decoded.

use crate::config::IconConfig;
use crate::container::{ContainerError, ContainerWriter, IconContainer, Variant};
use crate::imaging::{
    BackendError, ImageBackend, SharpenPolicy, normalize_square, resample_variants,
    sharpen_variant,
};
use crate::naming::default_output_path;
use crate::types::SizeSet;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("cannot read image {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: BackendError,
    },
    #[error("cannot write icon: {0}")]
    Encode(#[from] ContainerError),
    #[error("Imaging error: {0}")]
    Imaging(#[from] BackendError),
}

/// Everything one conversion needs.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertRequest {
    pub input: PathBuf,
    pub output: PathBuf,
    pub sizes: SizeSet,
    pub sharpen: Option<SharpenPolicy>,
}

impl ConvertRequest {
    /// Build a request from a resolved config.
    ///
    /// Without an explicit `output`, the icon goes next to `input`
    /// (see [`default_output_path`]).
    pub fn from_config(input: PathBuf, output: Option<PathBuf>, config: &IconConfig) -> Self {
        let output = output.unwrap_or_else(|| default_output_path(&input));
        Self {
            input,
            output,
            sizes: config.size_set(),
            sharpen: config.sharpen_policy(),
        }
    }
}

/// What a finished conversion produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertSummary {
    pub output: PathBuf,
    /// Sizes embedded in the written file.
    pub sizes: SizeSet,
    /// Subset of `sizes` that went through the unsharp mask.
    pub sharpened: SizeSet,
    /// Side of the base variant.
    pub base: u32,
    /// Source dimensions, when the source had to be cropped square.
    pub cropped_from: Option<(u32, u32)>,
    /// Side of the square every variant was resampled from.
    pub square_side: u32,
}

/// Run the whole conversion described by `request`.
pub fn convert(
    backend: &impl ImageBackend,
    writer: &impl ContainerWriter,
    request: &ConvertRequest,
) -> Result<ConvertSummary, ConvertError> {
    writer.check_sizes(&request.sizes)?;

    let source = backend
        .decode(&request.input)
        .map_err(|source| ConvertError::Decode {
            path: request.input.clone(),
            source,
        })?;

    let square = normalize_square(backend, source)?;
    let variants = resample_variants(backend, &square, &request.sizes)?;
    let container = variants
        .into_iter()
        .map(|variant| sharpen_variant(backend, variant, request.sharpen.as_ref()))
        .collect::<Result<IconContainer, _>>()?;

    let base = request
        .sizes
        .max()
        .and_then(|max| container.base(max))
        .map(Variant::side)
        .ok_or(ContainerError::Empty)?;

    let sizes = writer.write(&container, &request.output)?;

    Ok(ConvertSummary {
        output: request.output.clone(),
        sizes,
        sharpened: container.sharpened_sizes(),
        base,
        cropped_from: square.cropped_from(),
        square_side: square.side(),
    })
}
