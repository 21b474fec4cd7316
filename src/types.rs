//! Shared types used across the pipeline stages.

use std::collections::BTreeSet;
use std::fmt;

/// Side lengths shipped when neither the config file nor `--sizes` says otherwise.
pub const DEFAULT_SIZES: [u32; 7] = [16, 24, 32, 48, 64, 128, 256];

/// Set of square side lengths to embed in the icon.
///
/// Duplicates collapse on insert and iteration is always ascending, so the
/// resampler and the container see the same deterministic order no matter how
/// the sizes were written on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SizeSet(BTreeSet<u32>);

impl SizeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a comma-separated list such as `"16,32,48"`.
    ///
    /// Tokens are trimmed; anything that is not made entirely of ASCII digits
    /// (or does not fit a `u32`) is dropped without complaint:
    /// - `"16,32"` → {16, 32}
    /// - `"abc,16"` → {16}
    /// - `" 24 ,,-8"` → {24}
    /// - `"abc"` → {}
    pub fn parse_list(list: &str) -> Self {
        list.split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()))
            .filter_map(|token| token.parse::<u32>().ok())
            .collect()
    }

    pub fn insert(&mut self, size: u32) -> bool {
        self.0.insert(size)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, size: u32) -> bool {
        self.0.contains(&size)
    }

    /// Largest requested side, the nominal base of the icon.
    pub fn max(&self) -> Option<u32> {
        self.0.last().copied()
    }

    /// Sizes in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<u32> {
        self.iter().collect()
    }
}

impl FromIterator<u32> for SizeSet {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<&[u32]> for SizeSet {
    fn from(sizes: &[u32]) -> Self {
        sizes.iter().copied().collect()
    }
}

/// Renders as `[16, 32, 48]`.
impl fmt::Display for SizeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.to_vec())
    }
}
