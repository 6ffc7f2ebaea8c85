//! Case folding for case-insensitive comparison.
//!
//! Folding is a simple per-code-point lowercase mapping, not full Unicode
//! case folding and not locale aware. Each code point maps to exactly one
//! code point, so folded strings keep their length.

use alloc::borrow::Cow;
use alloc::string::String;

/// Simple lowercase mapping of a single code point.
#[inline]
pub fn to_lower(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Lowercase every code point of `s`.
pub fn to_lower_str(s: &str) -> String {
    s.chars().map(to_lower).collect()
}

/// `s` as compared under the given case sensitivity.
///
/// Borrows when `case_sensitive` is set or when nothing would change.
pub fn fold(s: &str, case_sensitive: bool) -> Cow<'_, str> {
    if case_sensitive || !s.chars().any(|c| to_lower(c) != c) {
        Cow::Borrowed(s)
    } else {
        Cow::Owned(to_lower_str(s))
    }
}
