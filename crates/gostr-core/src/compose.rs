//! Concatenation, splicing, delimiter extraction and shuffling.

use alloc::string::String;
use alloc::vec::Vec;

use crate::rand::RandSource;
use crate::runes::{length, Runes};
use crate::split::{fields, index_of, split};
use crate::substr::{substr, substr_len};

// ==================== Concatenation ====================

/// Concatenate `parts` in order.
pub fn append<S: AsRef<str>>(parts: &[S]) -> String {
    join(parts)
}

/// `s` followed by `parts`.
pub fn append_array<S: AsRef<str>>(s: &str, parts: &[S]) -> String {
    let mut out = String::from(s);
    for p in parts {
        out.push_str(p.as_ref());
    }
    out
}

/// `parts` followed by `s`.
pub fn prepend<S: AsRef<str>>(s: &str, parts: &[S]) -> String {
    let mut out = join(parts);
    out.push_str(s);
    out
}

/// `parts` followed by `s`; slice form of [`prepend`].
pub fn prepend_array<S: AsRef<str>>(s: &str, parts: &[S]) -> String {
    prepend(s, parts)
}

/// `wrap` on both sides of `s`.
pub fn surround(s: &str, wrap: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2 * wrap.len());
    out.push_str(wrap);
    out.push_str(s);
    out.push_str(wrap);
    out
}

fn join<S: AsRef<str>>(parts: &[S]) -> String {
    parts.iter().map(AsRef::as_ref).collect()
}

// ==================== Whitespace ====================

/// Replace each run of whitespace with a single space.
///
/// Leading and trailing whitespace is dropped.
pub fn collapse_whitespace(s: &str) -> String {
    fields(s).join(" ")
}

// ==================== Splicing ====================

/// Insert `ins` into `s` at code-point position `index`.
///
/// `s` is returned unchanged when `index` is past its end. A negative
/// `index` follows the substring rules for the two halves.
pub fn insert(s: &str, ins: &str, index: i64) -> String {
    let len = length(s) as i64;
    if index > len {
        return String::from(s);
    }
    let mut out = substr_len(s, 0, index);
    out.push_str(ins);
    out.push_str(&substr_len(s, index, len));
    out
}

// ==================== Delimiters ====================

/// Strings between each `start` and the following `end`.
///
/// `s` is split on every `end`; from each fragment everything after the
/// first `start` is kept. The fragment after the last `end` never has a
/// closing delimiter and is dropped, so an `s` without `end` yields nothing.
/// A fragment without `start` is cut at `length(start) - 1`.
pub fn between(s: &str, start: &str, end: &str) -> Vec<String> {
    let start_len = length(start) as i64;
    let mut result: Vec<String> = split(s, end)
        .into_iter()
        .map(|frag| {
            let at = index_of(frag, start).map_or(-1, |i| i as i64);
            substr(frag, at + start_len)
        })
        .collect();
    result.pop();
    result
}

// ==================== Shuffle ====================

/// `s` with its code points in uniformly random order drawn from `rng`.
pub fn shuffle_with<R: RandSource + ?Sized>(s: &str, rng: &mut R) -> String {
    let mut r = Runes::new(s).into_vec();
    for i in (1..r.len()).rev() {
        let j = rng.below(i + 1);
        r.swap(i, j);
    }
    r.into_iter().collect()
}

/// `s` with its code points in random order.
///
/// Each call uses its own generator, so concurrent callers share no state.
#[cfg(feature = "rand")]
pub fn shuffle(s: &str) -> String {
    shuffle_with(s, &mut fastrand::Rng::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rand::Lcg;
    use alloc::vec;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_append() {
        assert_eq!(append(&["f", "o", "o", "b", "a", "r"]), "foobar");
        assert_eq!(append(&["foobar"]), "foobar");
        assert_eq!(append(&["", "foobar"]), "foobar");
        assert_eq!(append::<&str>(&[]), "");
    }

    #[test]
    fn test_append_array() {
        assert_eq!(append_array("", &["f", "o", "o", "b", "a", "r"]), "foobar");
        assert_eq!(append_array("foo", &["", "bar"]), "foobar");
        let owned = vec![String::from("bar"), String::from("baz")];
        assert_eq!(append_array("foo", &owned), "foobarbaz");
    }

    #[test]
    fn test_prepend() {
        assert_eq!(prepend("bar", &["f", "o", "o"]), "foobar");
        assert_eq!(prepend("bar", &["", "foo"]), "foobar");
        assert_eq!(prepend_array("bar", &["foo", ""]), "foobar");
        assert_eq!(prepend_array::<&str>("bar", &[]), "bar");
    }

    #[test]
    fn test_surround() {
        assert_eq!(surround("foo", "*"), "*foo*");
        assert_eq!(surround("foo", ""), "foo");
        assert_eq!(surround("", "<>"), "<><>");
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("foo    bar"), "foo bar");
        assert_eq!(collapse_whitespace("Fòô     Bàř"), "Fòô Bàř");
        assert_eq!(collapse_whitespace("   世  界   "), "世 界");
        assert_eq!(collapse_whitespace("a\t\n b"), "a b");
        assert_eq!(collapse_whitespace(""), "");
    }

    #[test]
    fn test_insert() {
        assert_eq!(insert("foobar", "X", 0), "Xfoobar");
        assert_eq!(insert("foobar", "X", 3), "fooXbar");
        assert_eq!(insert("foobar", "X", 6), "foobarX");
        assert_eq!(insert("foobar", "X", 7), "foobar");
        assert_eq!(insert("世界", "-", 1), "世-界");
        assert_eq!(insert("foobar", "X", -1), "foobaXr");
    }

    #[test]
    fn test_between() {
        for (s, start, end, want) in [
            ("[foo]", "[", "]", vec!["foo"]),
            ("<span>foo</span>", "<span>", "</span>", vec!["foo"]),
            (
                "<span>bar</span><span>foo</span>",
                "<span>",
                "</span>",
                vec!["bar", "foo"],
            ),
            (
                "<span>bar</span><span>foo</span>",
                "<span>",
                "</span",
                vec!["bar", "foo"],
            ),
            ("[a][b][c]", "[", "]", vec!["a", "b", "c"]),
            ("«世»«界»", "«", "»", vec!["世", "界"]),
        ] {
            assert_eq!(between(s, start, end), want, "between({s:?}, {start:?}, {end:?})");
        }
    }

    #[test]
    fn test_between_without_end() {
        assert!(between("[foo", "[", "]").is_empty());
        assert!(between("", "[", "]").is_empty());
        // Empty `s` and `end`: the split has no fragments at all.
        assert!(between("", "x", "").is_empty());
    }

    #[test]
    fn test_between_empty_end_splits_code_points() {
        assert_eq!(between("abc", "", ""), vec!["a", "b"]);
        assert_eq!(between("世界!", "", ""), vec!["世", "界"]);
    }

    #[test]
    fn test_between_without_start() {
        // No start: the fragment is cut at length(start) - 1.
        assert_eq!(between("foo]", "[", "]"), vec!["foo"]);
        assert_eq!(between("foo]", "<<", "]"), vec!["oo"]);
    }

    #[test]
    fn test_shuffle_with_is_deterministic() {
        let a = shuffle_with("Hello, 世界", &mut Lcg::new(3));
        let b = shuffle_with("Hello, 世界", &mut Lcg::new(3));
        assert_eq!(a, b);
        assert_eq!(shuffle_with("", &mut Lcg::new(3)), "");
        assert_eq!(shuffle_with("x", &mut Lcg::new(3)), "x");
    }

    fn sorted(s: &str) -> Vec<char> {
        let mut v: Vec<char> = s.chars().collect();
        v.sort_unstable();
        v
    }

    quickcheck::quickcheck! {
        fn prop_shuffle_is_permutation(s: String, seed: u64) -> bool {
            let out = shuffle_with(&s, &mut Lcg::new(seed));
            length(&out) == length(&s) && sorted(&out) == sorted(&s)
        }

        fn prop_insert_at_len_appends(s: String, ins: String) -> bool {
            insert(&s, &ins, length(&s) as i64) == append(&[s.as_str(), ins.as_str()])
        }
    }

    #[cfg(feature = "rand")]
    #[test]
    fn test_shuffle_keeps_code_points() {
        let s = "Hello, 世界";
        let out = shuffle(s);
        assert_eq!(sorted(&out), sorted(s));
    }
}
