//! Icon configuration.
//!
//! Every knob has a built-in default, so icopack runs without any config file.
//! A TOML file passed with `--config` overrides the defaults, and command-line
//! flags override the file.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! sizes = [16, 24, 32, 48, 64, 128, 256]  # Square sides to embed (1-256)
//! sharpen = false                         # Unsharp-mask small variants
//!
//! [sharpening]
//! max_size = 64     # Variants at or below this side get sharpened
//! radius = 1.0      # Gaussian sigma of the blur mask
//! percent = 120     # Strength (100 = add the full edge difference once)
//! threshold = 3     # Minimum channel difference that gets sharpened
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::container::MAX_ICO_SIDE;
use crate::imaging::{SharpenPolicy, Sharpening};
use crate::types::{DEFAULT_SIZES, SizeSet};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
    #[error("no valid sizes left after parsing --sizes {0:?}")]
    EmptySizes(String),
}

/// Icon configuration, loaded from TOML or built from defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IconConfig {
    /// Square side lengths to embed; duplicates are collapsed.
    pub sizes: Vec<u32>,
    /// Whether small variants are sharpened.
    pub sharpen: bool,
    /// Unsharp-mask settings, used when `sharpen` is on.
    pub sharpening: SharpeningConfig,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SIZES.to_vec(),
            sharpen: false,
            sharpening: SharpeningConfig::default(),
        }
    }
}

/// Unsharp-mask settings for small variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SharpeningConfig {
    pub max_size: u32,
    pub radius: f32,
    pub percent: u32,
    pub threshold: i32,
}

impl Default for SharpeningConfig {
    fn default() -> Self {
        let policy = SharpenPolicy::default();
        Self {
            max_size: policy.max_size,
            radius: policy.params.radius,
            percent: policy.params.percent,
            threshold: policy.params.threshold,
        }
    }
}

/// Values taken from the command line that override the config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides<'a> {
    /// Raw `--sizes` argument, if given.
    pub sizes: Option<&'a str>,
    /// `--sharpen` was passed.
    pub sharpen: bool,
}

impl IconConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sizes.is_empty() {
            return Err(ConfigError::Validation("sizes must not be empty".into()));
        }
        if let Some(&bad) = self
            .sizes
            .iter()
            .find(|&&s| s == 0 || s > MAX_ICO_SIDE)
        {
            return Err(ConfigError::Validation(format!(
                "sizes must be between 1 and {MAX_ICO_SIDE}, got {bad}"
            )));
        }
        if self.sharpening.radius.is_nan() || self.sharpening.radius <= 0.0 {
            return Err(ConfigError::Validation(
                "sharpening.radius must be positive".into(),
            ));
        }
        if self.sharpening.threshold < 0 {
            return Err(ConfigError::Validation(
                "sharpening.threshold must not be negative".into(),
            ));
        }
        Ok(())
    }

    /// Layer command-line values on top of this config.
    ///
    /// `--sizes` replaces the configured list outright. A list that filters
    /// down to nothing is an error rather than a silent fallback to defaults.
    /// Range checks on the surviving sizes are left to the container writer.
    pub fn apply_overrides(&mut self, overrides: &CliOverrides<'_>) -> Result<(), ConfigError> {
        if let Some(raw) = overrides.sizes {
            let parsed = SizeSet::parse_list(raw);
            if parsed.is_empty() {
                return Err(ConfigError::EmptySizes(raw.to_string()));
            }
            self.sizes = parsed.to_vec();
        }
        if overrides.sharpen {
            self.sharpen = true;
        }
        Ok(())
    }

    /// Requested sizes, deduplicated and sorted.
    pub fn size_set(&self) -> SizeSet {
        self.sizes.iter().copied().collect()
    }

    /// The sharpening to run, or `None` when sharpening is off.
    pub fn sharpen_policy(&self) -> Option<SharpenPolicy> {
        self.sharpen.then(|| SharpenPolicy {
            max_size: self.sharpening.max_size,
            params: Sharpening {
                radius: self.sharpening.radius,
                percent: self.sharpening.percent,
                threshold: self.sharpening.threshold,
            },
        })
    }
}

/// Load and validate a config file.
pub fn load_config(path: &Path) -> Result<IconConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: IconConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock config file with all keys and explanations.
///
/// Used by `--print-config`.
pub fn stock_config_toml() -> &'static str {
    r##"# icopack configuration
# =====================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Command-line flags override them:
#   --sizes 16,32,48  replaces `sizes`
#   --sharpen         turns `sharpen` on
#
# Unknown keys will cause an error.

# Square side lengths embedded in the icon, in pixels (1-256).
# Duplicates are collapsed; order does not matter.
sizes = [16, 24, 32, 48, 64, 128, 256]

# Sharpen the small variants after resampling. Downscaling softens fine
# detail; a light unsharp mask keeps 16-64px icons crisp.
sharpen = false

# ---------------------------------------------------------------------------
# Unsharp mask
# ---------------------------------------------------------------------------
[sharpening]
# Variants whose side is at or below this value are sharpened.
max_size = 64

# Standard deviation of the Gaussian blur used as the mask, in pixels.
radius = 1.0

# Strength: how much of the edge difference is added back (100 = 1x).
percent = 120

# Channel differences at or below this value are left alone, so flat
# areas and gentle gradients do not pick up noise.
threshold = 3
"##
}
