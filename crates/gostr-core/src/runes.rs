//! Code-point sequences.

use alloc::string::String;
use alloc::vec::Vec;

use crate::index::{normalize_index, NormalizedRange};

/// The code points of a string, in order.
///
/// This is the unit of indexing for every operation in the crate; byte
/// offsets are never exposed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Runes {
    chars: Vec<char>,
}

impl Runes {
    pub fn new(s: &str) -> Self {
        Self {
            chars: s.chars().collect(),
        }
    }

    /// Number of code points.
    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }

    #[inline]
    pub fn get(&self, i: usize) -> Option<char> {
        self.chars.get(i).copied()
    }

    /// Code point at a signed index; negative counts from the end.
    pub fn at(&self, index: i64) -> Option<char> {
        normalize_index(index, self.len()).map(|i| self.chars[i])
    }

    /// Render a normalized slice back into a string.
    ///
    /// The range must have been normalized against `self.len()`.
    pub fn render(&self, range: NormalizedRange) -> String {
        self.chars[range.as_range()].iter().collect()
    }

    pub fn into_vec(self) -> Vec<char> {
        self.chars
    }
}

impl From<&str> for Runes {
    fn from(s: &str) -> Self {
        Runes::new(s)
    }
}

/// Decompose `s` into its code points.
pub fn runes(s: &str) -> Vec<char> {
    s.chars().collect()
}

/// Number of code points in `s`.
#[inline]
pub fn length(s: &str) -> usize {
    s.chars().count()
}
