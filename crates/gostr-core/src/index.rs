//! Index normalization.
//!
//! Turns caller-supplied signed positions into bounds that are always safe to
//! slice a sequence of `n` code points with. Negative values count from the
//! end (Python style); anything out of range is clamped or yields an empty
//! range. Nothing here fails.

use core::ops::Range;

/// A validated slice of a sequence of known length.
///
/// Only produced by [`normalize_range`], so `start + len <= n` always holds
/// for the `n` it was normalized against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NormalizedRange {
    start: usize,
    len: usize,
}

impl NormalizedRange {
    const EMPTY: NormalizedRange = NormalizedRange { start: 0, len: 0 };

    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Exclusive end position.
    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn as_range(&self) -> Range<usize> {
        self.start..self.end()
    }
}

/// Resolve a single signed index against a sequence of `n` code points.
///
/// Negative indices are taken from the end. Returns `None` when no element
/// lives at the resolved position.
pub fn normalize_index(idx: i64, n: usize) -> Option<usize> {
    let n = seq_len(n);
    let idx = if idx < 0 { idx + n } else { idx };
    if idx < 0 || idx > n - 1 {
        return None;
    }
    Some(idx as usize)
}

/// Resolve a signed `(start, length)` pair against `n` code points.
///
/// A negative `start` counts from the end. A negative `length` means "stop
/// this many code points short of the end". The guards run in a fixed order;
/// later clamps rely on earlier ones having bounded `start` and `length`.
pub fn normalize_range(start: i64, length: i64, n: usize) -> NormalizedRange {
    let n = seq_len(n);
    let mut start = start;
    let mut length = length;

    if length < 0 && length.unsigned_abs() > n as u64 {
        return NormalizedRange::EMPTY;
    } else if length > n {
        length = n;
    }

    if start > n {
        return NormalizedRange::EMPTY;
    } else if start < 0 && start.unsigned_abs() > n as u64 {
        start = 0;
    }

    // Both operands are within [-n, n] here, so the sum cannot overflow.
    if length < 0 && length + n - start < 0 {
        return NormalizedRange::EMPTY;
    }

    if start < 0 {
        start = (n + start).max(0);
    }

    if length < 0 {
        length = (n - start + length).max(0);
    }

    if start + length > n {
        length = n - start;
    }

    NormalizedRange {
        start: start as usize,
        len: length as usize,
    }
}

#[inline]
fn seq_len(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}
