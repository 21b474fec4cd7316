//! CLI output formatting.
//!
//! Every message icopack prints is built here. Each one has a `format_*`
//! function (returns `Vec<String>` or `String`) for testability and a
//! `print_*` wrapper that writes to stdout. Format functions are pure — no
//! I/O, no side effects.
//!
//! # Output Format
//!
//! ```text
//! Saved logo.ico with sizes: [16, 32, 48, 256]
//!     Cropped: 200x100 → 100x100
//!     Sharpened: [16, 32, 48]
//!     Base: 256px
//! ```
//!
//! The first line is always present; the indented context lines appear only
//! when they carry information.

use crate::pipeline::ConvertSummary;

const BIN: &str = env!("CARGO_PKG_NAME");

/// Format the result of a successful conversion.
pub fn format_summary(summary: &ConvertSummary) -> Vec<String> {
    let mut lines = vec![format!(
        "Saved {} with sizes: {}",
        summary.output.display(),
        summary.sizes
    )];

    if let Some((width, height)) = summary.cropped_from {
        let side = summary.square_side;
        lines.push(format!("    Cropped: {width}x{height} → {side}x{side}"));
    }
    if !summary.sharpened.is_empty() {
        lines.push(format!("    Sharpened: {}", summary.sharpened));
    }
    if summary.sizes.len() > 1 {
        lines.push(format!("    Base: {}px", summary.base));
    }

    lines
}

/// Print conversion output to stdout.
pub fn print_summary(summary: &ConvertSummary) {
    for line in format_summary(summary) {
        println!("{}", line);
    }
}

/// Format the notice for a command-line token that was not understood.
pub fn format_unknown_arg(arg: &str) -> String {
    format!("Unknown arg: {arg}")
}

pub fn print_unknown_arg(arg: &str) {
    println!("{}", format_unknown_arg(arg));
}

/// Format the short usage shown when the input path is missing.
pub fn format_usage() -> Vec<String> {
    vec![
        format!("Usage: {BIN} input.png [output.ico] [--sizes 16,32,48] [--sharpen]"),
        format!("Example: {BIN} logo.png app.ico --sizes 16,32,48,256 --sharpen"),
    ]
}

pub fn print_usage() {
    for line in format_usage() {
        println!("{}", line);
    }
}

/// Format a usage error: the problem, then the usage lines.
pub fn format_usage_error(message: &str) -> Vec<String> {
    let mut lines = vec![format!("error: {message}")];
    lines.extend(format_usage());
    lines
}

pub fn print_usage_error(message: &str) {
    for line in format_usage_error(message) {
        println!("{}", line);
    }
}
