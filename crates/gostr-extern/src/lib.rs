//! Name-dispatched access to the gostr string functions.
//!
//! Every public operation of `gostr-core` is listed under a qualified name
//! (`"gostr.SubstrLen"`) in a static table, and can be called with a
//! dynamically typed argument vector. This is the binding an interpreter or
//! scripting host uses; Rust callers should use `gostr-core` directly.
//!
//! ```text
//! gostr-core            <- pure logic
//!    │
//!    └── gostr-extern   <- EXTERN_TABLE + ExternRegistry (this crate)
//! ```
//!
//! # Example
//!
//! ```
//! use gostr_extern::{ExternRegistry, Value};
//!
//! let mut registry = ExternRegistry::new();
//! let rets = registry
//!     .call("gostr.SubstrLen", &["foobar".into(), Value::Int(-3), Value::Int(2)])
//!     .unwrap();
//! assert_eq!(rets, vec![Value::from("ba")]);
//! ```

pub mod error;
pub mod ffi;
pub mod registry;
pub mod stdlib;
pub mod value;

pub use error::ExternError;
pub use ffi::{
    extern_entries, lookup_extern, ExternCall, ExternEntry, ExternFn, ExternResult, EXTERN_TABLE,
};
pub use registry::ExternRegistry;
pub use value::Value;
