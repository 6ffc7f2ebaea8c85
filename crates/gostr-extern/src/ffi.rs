//! Extern calling convention.
//!
//! An extern function reads its arguments from an [`ExternCall`] and pushes
//! its return values onto it. Each package lists its functions in an
//! `ENTRIES` constant, and [`EXTERN_TABLE`] lists the packages.
//!
//! ```ignore
//! fn native_length(call: &mut ExternCall) -> ExternResult {
//!     let s = call.arg_str(0)?;
//!     call.ret(gostr_core::length(s));
//!     Ok(())
//! }
//!
//! pub const ENTRIES: &[ExternEntry] = &[
//!     ExternEntry { name: "gostr.Length", func: native_length },
//! ];
//! ```

use crate::error::ExternError;
use crate::stdlib;
use crate::value::Value;

pub type ExternResult = Result<(), ExternError>;

/// Extern function signature.
pub type ExternFn = fn(&mut ExternCall<'_>) -> ExternResult;

/// A named extern function.
#[derive(Clone, Copy)]
pub struct ExternEntry {
    pub name: &'static str,
    pub func: ExternFn,
}

impl std::fmt::Debug for ExternEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExternEntry").field("name", &self.name).finish()
    }
}

/// Entry slices of every package.
pub static EXTERN_TABLE: &[&[ExternEntry]] = &[stdlib::strings::ENTRIES];

/// Every entry of [`EXTERN_TABLE`].
pub fn extern_entries() -> impl Iterator<Item = &'static ExternEntry> {
    EXTERN_TABLE.iter().flat_map(|entries| entries.iter())
}

/// Find an extern function in [`EXTERN_TABLE`] by qualified name.
pub fn lookup_extern(name: &str) -> Option<ExternFn> {
    extern_entries()
        .find(|entry| entry.name == name)
        .map(|entry| entry.func)
}

/// Arguments, return values and random source of one extern call.
pub struct ExternCall<'a> {
    name: &'a str,
    args: &'a [Value],
    rets: Vec<Value>,
    rng: &'a mut fastrand::Rng,
}

impl<'a> ExternCall<'a> {
    pub fn new(name: &'a str, args: &'a [Value], rng: &'a mut fastrand::Rng) -> Self {
        Self {
            name,
            args,
            rets: Vec::new(),
            rng,
        }
    }

    /// Qualified name of the function being called.
    #[inline]
    pub fn name(&self) -> &str {
        self.name
    }

    #[inline]
    pub fn arg_count(&self) -> usize {
        self.args.len()
    }

    pub fn arg(&self, index: usize) -> Result<&'a Value, ExternError> {
        self.args.get(index).ok_or_else(|| ExternError::MissingArg {
            func: self.name.to_string(),
            index,
        })
    }

    pub fn arg_i64(&self, index: usize) -> Result<i64, ExternError> {
        let v = self.arg(index)?;
        v.as_i64().ok_or_else(|| self.mismatch(index, "int", v))
    }

    pub fn arg_bool(&self, index: usize) -> Result<bool, ExternError> {
        let v = self.arg(index)?;
        v.as_bool().ok_or_else(|| self.mismatch(index, "bool", v))
    }

    pub fn arg_str(&self, index: usize) -> Result<&'a str, ExternError> {
        let v = self.arg(index)?;
        v.as_str().ok_or_else(|| self.mismatch(index, "string", v))
    }

    pub fn arg_str_list(&self, index: usize) -> Result<&'a [String], ExternError> {
        let v = self.arg(index)?;
        v.as_str_list().ok_or_else(|| self.mismatch(index, "[]string", v))
    }

    /// Push a return value.
    #[inline]
    pub fn ret(&mut self, value: impl Into<Value>) {
        self.rets.push(value.into());
    }

    /// Random source owned by the calling registry.
    #[inline]
    pub fn rng(&mut self) -> &mut fastrand::Rng {
        &mut *self.rng
    }

    pub fn into_rets(self) -> Vec<Value> {
        self.rets
    }

    fn mismatch(&self, index: usize, expected: &'static str, found: &Value) -> ExternError {
        ExternError::TypeMismatch {
            func: self.name.to_string(),
            index,
            expected,
            found: found.kind(),
        }
    }
}
