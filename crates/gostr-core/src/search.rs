//! Search and comparison, optionally case-insensitive.
//!
//! With `case_sensitive == false` both operands go through [`fold`] first.

use crate::fold::fold;

// ==================== Containment ====================

/// Report whether `substr` is within `s`.
pub fn contains(s: &str, substr: &str, case_sensitive: bool) -> bool {
    fold(s, case_sensitive).contains(&*fold(substr, case_sensitive))
}

/// Report whether every code point of `chars` is within `s`.
///
/// An empty `chars` is never contained.
pub fn contains_all(s: &str, chars: &str, case_sensitive: bool) -> bool {
    if chars.is_empty() {
        return false;
    }
    let s = fold(s, case_sensitive);
    fold(chars, case_sensitive).chars().all(|c| s.contains(c))
}

/// Report whether any code point of `chars` is within `s`.
pub fn contains_any(s: &str, chars: &str, case_sensitive: bool) -> bool {
    let s = fold(s, case_sensitive);
    fold(chars, case_sensitive).chars().any(|c| s.contains(c))
}

/// Count non-overlapping occurrences of `sep` in `s`.
///
/// An empty `sep` matches between every code point: `length(s) + 1`.
pub fn count_substr(s: &str, sep: &str, case_sensitive: bool) -> usize {
    let s = fold(s, case_sensitive);
    let sep = fold(sep, case_sensitive);
    if sep.is_empty() {
        s.chars().count() + 1
    } else {
        s.matches(&*sep).count()
    }
}

// ==================== Prefix / Suffix ====================

/// Test whether `s` starts with `search`.
pub fn starts_with(s: &str, search: &str, case_sensitive: bool) -> bool {
    fold(s, case_sensitive).starts_with(&*fold(search, case_sensitive))
}

/// Test whether `s` ends with `search`.
pub fn ends_with(s: &str, search: &str, case_sensitive: bool) -> bool {
    fold(s, case_sensitive).ends_with(&*fold(search, case_sensitive))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_contains() {
        for (s, sub, cs, want) in [
            ("foo bar", "foo", false, true),
            ("bar FOO", "foo", true, false),
            ("foobar", "foo", false, true),
            ("FOO", "foo", false, true),
            ("Hello, 世界", "世", false, true),
            ("foo", "", true, true),
        ] {
            assert_eq!(contains(s, sub, cs), want, "contains({s:?}, {sub:?}, {cs})");
        }
    }

    #[test]
    fn test_contains_all() {
        for (s, chars, cs, want) in [
            ("foo bar", "", false, false),
            ("bar foo", "", true, false),
            ("foobar", "", false, false),
            ("foo bar", "foo", false, true),
            ("bar foo", "bar", false, true),
            ("foobar", "oba", false, true),
            ("foo bar", "dleitee", false, false),
            ("foobar", "dleitee", false, false),
            ("foo bar", "FOO", true, false),
            ("bar foo", "BAR", true, false),
            ("foobar", "OBA", true, false),
            ("foo bar", "FOO", false, true),
            ("bar foo", "BAR", false, true),
            ("foobar", "OBA", false, true),
            ("Hello, 世界", "世", false, true),
        ] {
            assert_eq!(
                contains_all(s, chars, cs),
                want,
                "contains_all({s:?}, {chars:?}, {cs})"
            );
        }
    }

    #[test]
    fn test_contains_any() {
        for (s, chars, cs, want) in [
            ("foo bar", "", false, false),
            ("foobar", "", true, false),
            ("foo bar", "f", false, true),
            ("bar foo", "b", false, true),
            ("foobar", "o", false, true),
            ("foo bar", "xyz", false, false),
            ("foo bar", "F", true, false),
            ("bar foo", "B", true, false),
            ("foo bar", "F", false, true),
            ("foobar", "O", false, true),
            ("Hello, 世界", "世", false, true),
        ] {
            assert_eq!(
                contains_any(s, chars, cs),
                want,
                "contains_any({s:?}, {chars:?}, {cs})"
            );
        }
    }

    #[test]
    fn test_count_substr() {
        for (s, sep, cs, want) in [
            ("aaaaaAaaAA", "a", true, 7),
            ("faaaAAaaaaAA", "a", true, 7),
            ("aaAAaaaaafA", "a", true, 7),
            ("AAaaafaaaaAAAA", "a", true, 7),
            ("aaaaaaa", "a", false, 7),
            ("faaaaaaa", "a", false, 7),
            ("aaafaaaa", "a", false, 7),
            ("aaaaaAaaAA", "a", false, 10),
            ("aaaa", "aa", true, 2),
            ("Hello, 世界", "世", false, 1),
            ("Hello, 世界", "", true, 10),
        ] {
            assert_eq!(
                count_substr(s, sep, cs),
                want,
                "count_substr({s:?}, {sep:?}, {cs})"
            );
        }
    }

    #[test]
    fn test_starts_with() {
        for (s, search, cs, want) in [
            ("bar foo", "bar", false, true),
            ("bar", "bar", false, true),
            ("bar foo", "dleitee", false, false),
            ("bar", "dleitee", false, false),
            ("bar foo", "BAR", false, true),
            ("bar", "BAR", false, true),
            ("bar foo", "BAR", true, false),
            ("bar", "BAR", true, false),
            ("世界, Hello", "世", false, true),
        ] {
            assert_eq!(
                starts_with(s, search, cs),
                want,
                "starts_with({s:?}, {search:?}, {cs})"
            );
        }
    }

    #[test]
    fn test_ends_with() {
        for (s, search, cs, want) in [
            ("foo bar", "bar", false, true),
            ("bar", "bar", false, true),
            ("foo bar", "dleitee", false, false),
            ("bar", "dleitee", false, false),
            ("foo bar", "BAR", false, true),
            ("bar", "BAR", false, true),
            ("foo bar", "BAR", true, false),
            ("bar", "BAR", true, false),
            ("Hello, 世界", "界", false, true),
        ] {
            assert_eq!(
                ends_with(s, search, cs),
                want,
                "ends_with({s:?}, {search:?}, {cs})"
            );
        }
    }
}
