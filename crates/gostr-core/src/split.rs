//! Delimiter splitting and substring location.

use alloc::vec::Vec;

/// Split `s` on every literal occurrence of `sep`, keeping empty fragments.
///
/// An empty `sep` splits `s` into its code points. Always returns at least
/// one fragment for a non-empty separator.
pub fn split<'a>(s: &'a str, sep: &str) -> Vec<&'a str> {
    if sep.is_empty() {
        s.char_indices()
            .map(|(i, c)| &s[i..i + c.len_utf8()])
            .collect()
    } else {
        s.split(sep).collect()
    }
}

/// Whitespace-separated fields of `s`; runs of whitespace count as one.
pub fn fields(s: &str) -> Vec<&str> {
    s.split_whitespace().collect()
}

/// Code-point index of the first occurrence of `needle` in `s`.
pub fn index_of(s: &str, needle: &str) -> Option<usize> {
    s.find(needle).map(|byte| s[..byte].chars().count())
}
