//! Prefix and suffix normalization.

use alloc::string::String;

use crate::runes::length;
use crate::search::{ends_with, starts_with};
use crate::substr::{substr, substr_len};

/// Prepend `substr` to `s` unless `s` already starts with it.
pub fn ensure_left(s: &str, substr: &str, case_sensitive: bool) -> String {
    if starts_with(s, substr, case_sensitive) {
        String::from(s)
    } else {
        let mut out = String::with_capacity(substr.len() + s.len());
        out.push_str(substr);
        out.push_str(s);
        out
    }
}

/// Append `substr` to `s` unless `s` already ends with it.
pub fn ensure_right(s: &str, substr: &str, case_sensitive: bool) -> String {
    if ends_with(s, substr, case_sensitive) {
        String::from(s)
    } else {
        let mut out = String::with_capacity(s.len() + substr.len());
        out.push_str(s);
        out.push_str(substr);
        out
    }
}

/// Remove `prefix` from the start of `s` if present.
pub fn remove_left(s: &str, prefix: &str, case_sensitive: bool) -> String {
    if starts_with(s, prefix, case_sensitive) {
        substr(s, length(prefix) as i64)
    } else {
        String::from(s)
    }
}

/// Remove `suffix` from the end of `s` if present.
pub fn remove_right(s: &str, suffix: &str, case_sensitive: bool) -> String {
    if ends_with(s, suffix, case_sensitive) {
        substr_len(s, 0, length(s) as i64 - length(suffix) as i64)
    } else {
        String::from(s)
    }
}
