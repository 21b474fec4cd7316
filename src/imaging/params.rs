//! Parameter types for image operations.
//!
//! These structs describe *what* to do, not *how* to do it. They sit between
//! the high-level [`operations`](super::operations) module (which decides which
//! variants get which treatment) and the [`backend`](super::backend) (which
//! does the pixel work), so a mock backend can stand in during tests.
//!
//! ## Types
//!
//! - [`Sharpening`] — Unsharp-mask parameters (radius, strength, threshold).
//! - [`SharpenPolicy`] — Which variants get sharpened, and with what.

/// Unsharp-mask parameters.
///
/// - `radius`: Standard deviation of the Gaussian blur used as the mask
/// - `percent`: How much of the edge difference is added back (100 = 1×)
/// - `threshold`: Minimum per-channel difference before a pixel is touched
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sharpening {
    pub radius: f32,
    pub percent: u32,
    pub threshold: i32,
}

impl Sharpening {
    /// Mild sharpening that keeps 16–64px icons legible.
    pub fn icon() -> Self {
        Self {
            radius: 1.0,
            percent: 120,
            threshold: 3,
        }
    }

    /// Strength as a multiplier (`120` → `1.2`).
    pub fn amount(&self) -> f32 {
        self.percent as f32 / 100.0
    }
}

impl Default for Sharpening {
    fn default() -> Self {
        Self::icon()
    }
}

/// Sharpening applied to every variant whose side is at most `max_size`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SharpenPolicy {
    pub max_size: u32,
    pub params: Sharpening,
}

impl SharpenPolicy {
    pub fn applies_to(&self, side: u32) -> bool {
        side <= self.max_size
    }
}

impl Default for SharpenPolicy {
    fn default() -> Self {
        Self {
            max_size: 64,
            params: Sharpening::icon(),
        }
    }
}
