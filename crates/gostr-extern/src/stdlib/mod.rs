//! Extern bindings for the gostr functions.
//!
//! Each package exposes an `ENTRIES` constant; `ffi::EXTERN_TABLE` collects them.

pub mod strings;
