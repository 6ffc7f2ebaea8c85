//! # gostr-core
//!
//! String helpers indexed by code point (Unicode scalar value), never by byte.
//!
//! This crate provides the pure logic; `gostr-extern` binds it to a
//! name-dispatched calling convention.
//! - `runes` - code-point sequence of a string (`Runes`)
//! - `index` - signed index and (start, length) normalization
//! - `substr` - `substr`, `substr_len`, `at`
//! - `fold` / `split` - case folding and delimiter splitting contracts
//! - `search`, `affix`, `pad`, `compose` - operations built on the above
//! - `rand` - random source capability used by `shuffle`
//!
//! No operation returns an error: out-of-range indices and lengths resolve
//! to a clamped or empty result.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod affix;
pub mod compose;
pub mod fold;
pub mod index;
pub mod pad;
pub mod rand;
pub mod runes;
pub mod search;
pub mod split;
pub mod substr;

pub use affix::{ensure_left, ensure_right, remove_left, remove_right};
#[cfg(feature = "rand")]
pub use compose::shuffle;
pub use compose::{
    append, append_array, between, collapse_whitespace, insert, prepend, prepend_array,
    shuffle_with, surround,
};
pub use index::{normalize_index, normalize_range, NormalizedRange};
pub use pad::{padding_both, padding_left, padding_right, surround_pad};
pub use rand::{Lcg, RandSource};
pub use runes::{length, runes, Runes};
pub use search::{contains, contains_all, contains_any, count_substr, ends_with, starts_with};
pub use substr::{at, at_runes, substr, substr_len};
