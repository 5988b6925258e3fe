//! Type-safe wrappers for variables and their values.
//!
//! [`Var`] identifies a slot in the manager's variable table, while
//! [`Ref`][crate::reference::Ref] identifies a node in the expression arena.
//! Keeping them apart prevents passing a compound expression where a
//! variable is expected.

use std::fmt;

/// A variable identifier (0-indexed).
///
/// Variables are numbered in creation order. The identifier is independent
/// of any ordered variable list used for enumeration.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Var(u32);

impl Var {
    /// Creates a variable identifier from its index in the variable table.
    pub const fn new(index: u32) -> Self {
        Var(index)
    }

    /// Returns the raw identifier as a `u32`.
    pub const fn id(self) -> u32 {
        self.0
    }

    /// Returns the position in the variable table.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// A boolean variable stored in the manager.
///
/// The name is for display only and need not be unique.
/// The value is the ambient state read by evaluation.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Variable {
    pub name: String,
    pub value: bool,
}

impl Variable {
    pub const DEFAULT_NAME: &'static str = "unnamed variable";

    pub fn new(name: impl Into<String>, value: bool) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

impl Default for Variable {
    fn default() -> Self {
        Self::new(Self::DEFAULT_NAME, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_var_creation() {
        let v0 = Var::new(0);
        let v1 = Var::new(1);
        assert_eq!(v0.id(), 0);
        assert_eq!(v1.index(), 1);
        assert!(v0 < v1);
        assert_eq!(v1.to_string(), "v1");
    }

    #[test]
    fn test_variable_default() {
        let v = Variable::default();
        assert_eq!(v.name, "unnamed variable");
        assert!(!v.value);
    }
}
