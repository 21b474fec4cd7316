//! Output filename convention.
//!
//! When no output path is given, the icon lands next to its source:
//! - `logo.png` → `logo.ico`
//! - `Logo.PNG` → `Logo.ico`
//! - `art/mark.svg.png` → `art/mark.svg.ico`
//! - `photo.jpg` → `photo.jpg.ico`
//! - `badge` → `badge.ico`

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Derive the default `.ico` destination for `input`.
///
/// A trailing `.png` extension (any case) is swapped for `.ico`; every other
/// name keeps its full text and gains an `.ico` suffix.
pub fn default_output_path(input: &Path) -> PathBuf {
    let is_png = input
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));

    if is_png {
        input.with_extension("ico")
    } else {
        let mut raw = OsString::from(input.as_os_str());
        raw.push(".ico");
        PathBuf::from(raw)
    }
}
