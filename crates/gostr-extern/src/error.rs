//! Calling-convention errors.
//!
//! Out-of-range indices are not errors; these only cover calls that do not
//! match a registered signature.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExternError {
    /// No function registered under this name
    #[error("unknown extern function: {0}")]
    UnknownFunction(String),
    /// Fewer arguments than the function reads
    #[error("{func}: missing argument {index}")]
    MissingArg { func: String, index: usize },
    /// Argument of the wrong kind
    #[error("{func}: argument {index} expected {expected}, found {found}")]
    TypeMismatch {
        func: String,
        index: usize,
        expected: &'static str,
        found: &'static str,
    },
    /// Name already taken in the registry
    #[error("extern function registered twice: {0}")]
    Duplicate(String),
}
