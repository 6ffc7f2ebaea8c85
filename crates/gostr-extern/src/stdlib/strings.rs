//! gostr package extern functions.
//!
//! Variadic string parameters are passed as a single `[]string` argument.

use gostr_core as gostr;

use crate::ffi::{ExternCall, ExternEntry, ExternResult};

// ==================== Concatenation ====================

/// gostr.Append(strs []string) string
fn native_append(call: &mut ExternCall) -> ExternResult {
    let strs = call.arg_str_list(0)?;
    call.ret(gostr::append(strs));
    Ok(())
}

/// gostr.AppendArray(s string, strs []string) string
fn native_append_array(call: &mut ExternCall) -> ExternResult {
    let s = call.arg_str(0)?;
    let strs = call.arg_str_list(1)?;
    call.ret(gostr::append_array(s, strs));
    Ok(())
}

/// gostr.Prepend(s string, strs []string) string
fn native_prepend(call: &mut ExternCall) -> ExternResult {
    let s = call.arg_str(0)?;
    let strs = call.arg_str_list(1)?;
    call.ret(gostr::prepend(s, strs));
    Ok(())
}

/// gostr.PrependArray(s string, strs []string) string
fn native_prepend_array(call: &mut ExternCall) -> ExternResult {
    let s = call.arg_str(0)?;
    let strs = call.arg_str_list(1)?;
    call.ret(gostr::prepend_array(s, strs));
    Ok(())
}

/// gostr.Surround(s, substr string) string
fn native_surround(call: &mut ExternCall) -> ExternResult {
    let s = call.arg_str(0)?;
    let substr = call.arg_str(1)?;
    call.ret(gostr::surround(s, substr));
    Ok(())
}

/// gostr.CollapseWhitespace(s string) string
fn native_collapse_whitespace(call: &mut ExternCall) -> ExternResult {
    let s = call.arg_str(0)?;
    call.ret(gostr::collapse_whitespace(s));
    Ok(())
}

// ==================== Indexing ====================

/// gostr.Length(s string) int
fn native_length(call: &mut ExternCall) -> ExternResult {
    let s = call.arg_str(0)?;
    call.ret(gostr::length(s));
    Ok(())
}

/// gostr.Runes(s string) []string
fn native_runes(call: &mut ExternCall) -> ExternResult {
    let s = call.arg_str(0)?;
    let runes: Vec<String> = gostr::runes(s).into_iter().map(String::from).collect();
    call.ret(runes);
    Ok(())
}

/// gostr.At(s string, index int) string
fn native_at(call: &mut ExternCall) -> ExternResult {
    let s = call.arg_str(0)?;
    let index = call.arg_i64(1)?;
    call.ret(gostr::at(s, index));
    Ok(())
}

/// gostr.Substr(s string, start int) string
fn native_substr(call: &mut ExternCall) -> ExternResult {
    let s = call.arg_str(0)?;
    let start = call.arg_i64(1)?;
    call.ret(gostr::substr(s, start));
    Ok(())
}

/// gostr.SubstrLen(s string, start, length int) string
fn native_substr_len(call: &mut ExternCall) -> ExternResult {
    let s = call.arg_str(0)?;
    let start = call.arg_i64(1)?;
    let length = call.arg_i64(2)?;
    call.ret(gostr::substr_len(s, start, length));
    Ok(())
}

/// gostr.Insert(s, substr string, index int) string
fn native_insert(call: &mut ExternCall) -> ExternResult {
    let s = call.arg_str(0)?;
    let substr = call.arg_str(1)?;
    let index = call.arg_i64(2)?;
    call.ret(gostr::insert(s, substr, index));
    Ok(())
}

/// gostr.Between(s, start, end string) []string
fn native_between(call: &mut ExternCall) -> ExternResult {
    let s = call.arg_str(0)?;
    let start = call.arg_str(1)?;
    let end = call.arg_str(2)?;
    call.ret(gostr::between(s, start, end));
    Ok(())
}

// ==================== Search ====================

/// gostr.Contains(s, substr string, caseSensitive bool) bool
fn native_contains(call: &mut ExternCall) -> ExternResult {
    let s = call.arg_str(0)?;
    let substr = call.arg_str(1)?;
    let case_sensitive = call.arg_bool(2)?;
    call.ret(gostr::contains(s, substr, case_sensitive));
    Ok(())
}

/// gostr.ContainsAll(s, chars string, caseSensitive bool) bool
fn native_contains_all(call: &mut ExternCall) -> ExternResult {
    let s = call.arg_str(0)?;
    let chars = call.arg_str(1)?;
    let case_sensitive = call.arg_bool(2)?;
    call.ret(gostr::contains_all(s, chars, case_sensitive));
    Ok(())
}

/// gostr.ContainsAny(s, chars string, caseSensitive bool) bool
fn native_contains_any(call: &mut ExternCall) -> ExternResult {
    let s = call.arg_str(0)?;
    let chars = call.arg_str(1)?;
    let case_sensitive = call.arg_bool(2)?;
    call.ret(gostr::contains_any(s, chars, case_sensitive));
    Ok(())
}

/// gostr.CountSubstr(s, sep string, caseSensitive bool) int
fn native_count_substr(call: &mut ExternCall) -> ExternResult {
    let s = call.arg_str(0)?;
    let sep = call.arg_str(1)?;
    let case_sensitive = call.arg_bool(2)?;
    call.ret(gostr::count_substr(s, sep, case_sensitive));
    Ok(())
}

/// gostr.StartsWith(s, search string, caseSensitive bool) bool
fn native_starts_with(call: &mut ExternCall) -> ExternResult {
    let s = call.arg_str(0)?;
    let search = call.arg_str(1)?;
    let case_sensitive = call.arg_bool(2)?;
    call.ret(gostr::starts_with(s, search, case_sensitive));
    Ok(())
}

/// gostr.EndsWith(s, search string, caseSensitive bool) bool
fn native_ends_with(call: &mut ExternCall) -> ExternResult {
    let s = call.arg_str(0)?;
    let search = call.arg_str(1)?;
    let case_sensitive = call.arg_bool(2)?;
    call.ret(gostr::ends_with(s, search, case_sensitive));
    Ok(())
}

// ==================== Affixes ====================

/// gostr.EnsureLeft(s, substr string, caseSensitive bool) string
fn native_ensure_left(call: &mut ExternCall) -> ExternResult {
    let s = call.arg_str(0)?;
    let substr = call.arg_str(1)?;
    let case_sensitive = call.arg_bool(2)?;
    call.ret(gostr::ensure_left(s, substr, case_sensitive));
    Ok(())
}

/// gostr.EnsureRight(s, substr string, caseSensitive bool) string
fn native_ensure_right(call: &mut ExternCall) -> ExternResult {
    let s = call.arg_str(0)?;
    let substr = call.arg_str(1)?;
    let case_sensitive = call.arg_bool(2)?;
    call.ret(gostr::ensure_right(s, substr, case_sensitive));
    Ok(())
}

/// gostr.RemoveLeft(s, substr string, caseSensitive bool) string
fn native_remove_left(call: &mut ExternCall) -> ExternResult {
    let s = call.arg_str(0)?;
    let substr = call.arg_str(1)?;
    let case_sensitive = call.arg_bool(2)?;
    call.ret(gostr::remove_left(s, substr, case_sensitive));
    Ok(())
}

/// gostr.RemoveRight(s, substr string, caseSensitive bool) string
fn native_remove_right(call: &mut ExternCall) -> ExternResult {
    let s = call.arg_str(0)?;
    let substr = call.arg_str(1)?;
    let case_sensitive = call.arg_bool(2)?;
    call.ret(gostr::remove_right(s, substr, case_sensitive));
    Ok(())
}

// ==================== Padding ====================

/// gostr.SurroundPad(s, pad string, leftPad, rightPad int) string
fn native_surround_pad(call: &mut ExternCall) -> ExternResult {
    let s = call.arg_str(0)?;
    let pad = call.arg_str(1)?;
    let left = call.arg_i64(2)?;
    let right = call.arg_i64(3)?;
    call.ret(gostr::surround_pad(s, pad, left, right));
    Ok(())
}

/// gostr.PaddingLeft(s, pad string, length int) string
fn native_padding_left(call: &mut ExternCall) -> ExternResult {
    let s = call.arg_str(0)?;
    let pad = call.arg_str(1)?;
    let length = call.arg_i64(2)?;
    call.ret(gostr::padding_left(s, pad, length));
    Ok(())
}

/// gostr.PaddingRight(s, pad string, length int) string
fn native_padding_right(call: &mut ExternCall) -> ExternResult {
    let s = call.arg_str(0)?;
    let pad = call.arg_str(1)?;
    let length = call.arg_i64(2)?;
    call.ret(gostr::padding_right(s, pad, length));
    Ok(())
}

/// gostr.PaddingBoth(s, pad string, length int) string
fn native_padding_both(call: &mut ExternCall) -> ExternResult {
    let s = call.arg_str(0)?;
    let pad = call.arg_str(1)?;
    let length = call.arg_i64(2)?;
    call.ret(gostr::padding_both(s, pad, length));
    Ok(())
}

// ==================== Random ====================

/// gostr.Shuffle(s string) string
fn native_shuffle(call: &mut ExternCall) -> ExternResult {
    let s = call.arg_str(0)?;
    let shuffled = gostr::shuffle_with(s, call.rng());
    call.ret(shuffled);
    Ok(())
}

/// All gostr extern functions.
pub const ENTRIES: &[ExternEntry] = &[
    ExternEntry { name: "gostr.Append", func: native_append },
    ExternEntry { name: "gostr.AppendArray", func: native_append_array },
    ExternEntry { name: "gostr.Prepend", func: native_prepend },
    ExternEntry { name: "gostr.PrependArray", func: native_prepend_array },
    ExternEntry { name: "gostr.Surround", func: native_surround },
    ExternEntry { name: "gostr.CollapseWhitespace", func: native_collapse_whitespace },
    ExternEntry { name: "gostr.Length", func: native_length },
    ExternEntry { name: "gostr.Runes", func: native_runes },
    ExternEntry { name: "gostr.At", func: native_at },
    ExternEntry { name: "gostr.Substr", func: native_substr },
    ExternEntry { name: "gostr.SubstrLen", func: native_substr_len },
    ExternEntry { name: "gostr.Insert", func: native_insert },
    ExternEntry { name: "gostr.Between", func: native_between },
    ExternEntry { name: "gostr.Contains", func: native_contains },
    ExternEntry { name: "gostr.ContainsAll", func: native_contains_all },
    ExternEntry { name: "gostr.ContainsAny", func: native_contains_any },
    ExternEntry { name: "gostr.CountSubstr", func: native_count_substr },
    ExternEntry { name: "gostr.StartsWith", func: native_starts_with },
    ExternEntry { name: "gostr.EndsWith", func: native_ends_with },
    ExternEntry { name: "gostr.EnsureLeft", func: native_ensure_left },
    ExternEntry { name: "gostr.EnsureRight", func: native_ensure_right },
    ExternEntry { name: "gostr.RemoveLeft", func: native_remove_left },
    ExternEntry { name: "gostr.RemoveRight", func: native_remove_right },
    ExternEntry { name: "gostr.SurroundPad", func: native_surround_pad },
    ExternEntry { name: "gostr.PaddingLeft", func: native_padding_left },
    ExternEntry { name: "gostr.PaddingRight", func: native_padding_right },
    ExternEntry { name: "gostr.PaddingBoth", func: native_padding_both },
    ExternEntry { name: "gostr.Shuffle", func: native_shuffle },
];
