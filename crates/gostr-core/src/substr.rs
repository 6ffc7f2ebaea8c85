//! Substring extraction by code point.

use alloc::string::String;

use crate::index::{normalize_index, normalize_range};
use crate::runes::{length, Runes};

/// Character at `index` in `s`, or `""` if nothing lives there.
///
/// Negative indices count from the end.
pub fn at(s: &str, index: i64) -> String {
    Runes::new(s).at(index).map(String::from).unwrap_or_default()
}

/// Character at `index` in an already decomposed sequence.
pub fn at_runes(r: &[char], index: i64) -> String {
    normalize_index(index, r.len())
        .map(|i| String::from(r[i]))
        .unwrap_or_default()
}

/// Part of `s` from `start` to the end.
pub fn substr(s: &str, start: i64) -> String {
    substr_len(s, start, length(s) as i64)
}

/// Part of `s` of `length` code points beginning at `start`.
///
/// A negative `start` counts from the end; a negative `length` stops that
/// many code points short of the end. Invalid combinations give `""`.
pub fn substr_len(s: &str, start: i64, length: i64) -> String {
    let r = Runes::new(s);
    let range = normalize_range(start, length, r.len());
    if range.is_empty() {
        return String::new();
    }
    r.render(range)
}
