//! Error types.
//!
//! Most misuse of the manager (dangling handles, compound nodes in a variable
//! list, too many variables) is a programming error and panics at the call
//! site. [`LogicError`] covers the inputs a caller may reasonably assemble at
//! runtime.

use std::fmt;

/// Errors reported by the argument API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicError {
    /// An argument was built without any premise.
    NoPremises,
}

impl fmt::Display for LogicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogicError::NoPremises => write!(f, "An argument needs at least one premise"),
        }
    }
}

impl std::error::Error for LogicError {}
