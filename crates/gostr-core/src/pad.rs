//! Padding and surrounding with cyclically repeated pad characters.

use alloc::string::String;

use crate::runes::{length, runes};

/// Surround `s` with characters of `pad`, repeated cyclically.
///
/// `left` and `right` are the number of pad code points on each side; the
/// cycle restarts at the first pad character on each side. An empty `pad`
/// leaves `s` unchanged, and negative counts add nothing.
pub fn surround_pad(s: &str, pad: &str, left: i64, right: i64) -> String {
    let r = runes(pad);
    if r.is_empty() {
        return String::from(s);
    }

    let left = usize::try_from(left).unwrap_or(0);
    let right = usize::try_from(right).unwrap_or(0);

    let mut out = String::with_capacity(s.len());
    out.extend(r.iter().cycle().take(left));
    out.push_str(s);
    out.extend(r.iter().cycle().take(right));
    out
}

/// Pad `s` on the left to `target` code points.
pub fn padding_left(s: &str, pad: &str, target: i64) -> String {
    match pad_len(s, target) {
        Some(n) => surround_pad(s, pad, n, 0),
        None => String::from(s),
    }
}

/// Pad `s` on the right to `target` code points.
pub fn padding_right(s: &str, pad: &str, target: i64) -> String {
    match pad_len(s, target) {
        Some(n) => surround_pad(s, pad, 0, n),
        None => String::from(s),
    }
}

/// Pad `s` on both sides to `target` code points.
///
/// The left side gets `floor(n / 2)`, the right side the remainder.
pub fn padding_both(s: &str, pad: &str, target: i64) -> String {
    match pad_len(s, target) {
        Some(n) => {
            let left = n / 2;
            surround_pad(s, pad, left, n - left)
        }
        None => String::from(s),
    }
}

/// Code points missing to reach `target`, if any.
fn pad_len(s: &str, target: i64) -> Option<i64> {
    let len = length(s) as i64;
    if target < 0 || target <= len {
        None
    } else {
        Some(target - len)
    }
}
