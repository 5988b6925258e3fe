//! Truth-table rows and their enumeration.
//!
//! An [`Assignment`] is one row of a truth table over an ordered variable
//! list. Row number `i` sets `variables[j]` to bit `j` of `i`, so variable 0
//! is the least-significant bit, and [`Assignment::value`] recovers `i`.
//! Every truth set built over the same ordered list uses this encoding, which
//! is what makes them comparable.
//!
//! ```
//! use entail_rs::logic::Logic;
//!
//! let logic = Logic::default();
//! let p = logic.mk_var("P");
//! let q = logic.mk_var("Q");
//!
//! let rows = logic.all_ordered_combinations(&[p, q]);
//! assert_eq!(rows.len(), 4);
//! assert_eq!(rows[2].to_string(), "v0=0 v1=1");
//! assert_eq!(rows[2].value(), 2);
//! ```

use std::collections::HashSet;
use std::fmt;

use log::debug;

use crate::logic::Logic;
use crate::reference::Ref;
use crate::types::Var;
use crate::utils::bit;

/// Largest number of variables that can be enumerated.
///
/// Rows are encoded as `u64` and counted up to `2^n`.
pub const MAX_VARS: usize = 63;

/// A saved value for one variable.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct VarValue {
    pub var: Var,
    pub value: bool,
}

impl VarValue {
    pub const fn new(var: Var, value: bool) -> Self {
        Self { var, value }
    }
}

/// One row of a truth table.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Assignment {
    values: Vec<VarValue>,
}

impl Assignment {
    pub fn new(values: Vec<VarValue>) -> Self {
        Self { values }
    }

    /// Builds row number `index` over `vars`.
    pub fn from_index(vars: &[Var], index: u64) -> Self {
        let values = vars
            .iter()
            .enumerate()
            .map(|(j, &var)| VarValue::new(var, bit(index, j)))
            .collect();
        Self { values }
    }

    /// Numeric encoding of the row: `Σ_j 2^j * bit(j)`.
    pub fn value(&self) -> u64 {
        self.values
            .iter()
            .enumerate()
            .filter(|(_, vv)| vv.value)
            .fold(0u64, |acc, (j, _)| acc | (1u64 << j))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, VarValue> {
        self.values.iter()
    }

    pub fn values(&self) -> &[VarValue] {
        &self.values
    }

    /// The value this row gives to `var`, if `var` is part of the row.
    pub fn get(&self, var: Var) -> Option<bool> {
        self.values.iter().find(|vv| vv.var == var).map(|vv| vv.value)
    }
}

impl<'a> IntoIterator for &'a Assignment {
    type Item = &'a VarValue;
    type IntoIter = std::slice::Iter<'a, VarValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, vv) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}={}", vv.var, vv.value as u8)?;
        }
        Ok(())
    }
}

/// Lazy enumeration of all `2^n` rows in increasing [`Assignment::value`] order.
///
/// Created by [`Logic::combinations()`].
#[derive(Debug, Clone)]
pub struct Combinations {
    vars: Vec<Var>,
    next: u64,
    end: u64,
}

impl Combinations {
    pub fn new(vars: Vec<Var>) -> Self {
        assert!(
            vars.len() <= MAX_VARS,
            "Cannot enumerate {} variables (at most {})",
            vars.len(),
            MAX_VARS
        );
        let end = 1u64 << vars.len();
        Self { vars, next: 0, end }
    }

    pub fn vars(&self) -> &[Var] {
        &self.vars
    }
}

impl Iterator for Combinations {
    type Item = Assignment;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let row = Assignment::from_index(&self.vars, self.next);
        self.next += 1;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.next;
        match usize::try_from(remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl Logic {
    /// Resolves an ordered list of variable leaves.
    ///
    /// # Panics
    ///
    /// Panics if an entry is not a variable leaf or appears twice.
    pub fn ordered_vars(&self, variables: &[Ref]) -> Vec<Var> {
        let mut seen = HashSet::with_capacity(variables.len());
        variables
            .iter()
            .map(|&f| {
                let var = self.variable(f);
                assert!(seen.insert(var), "Variable {} is listed twice", f);
                var
            })
            .collect()
    }

    /// Writes every value of `row` into its variable.
    pub fn assign(&self, row: &Assignment) {
        let mut variables = self.variables.borrow_mut();
        for vv in row {
            variables[vv.var.index()].value = vv.value;
        }
    }

    /// Lazily enumerates every row over `variables`.
    pub fn combinations(&self, variables: &[Ref]) -> Combinations {
        Combinations::new(self.ordered_vars(variables))
    }

    /// Every row over `variables`, in increasing encoding order.
    ///
    /// No variable is modified; use [`Logic::assign`] to apply a row.
    pub fn all_ordered_combinations(&self, variables: &[Ref]) -> Vec<Assignment> {
        debug!("all_ordered_combinations(n = {})", variables.len());
        self.combinations(variables).collect()
    }

    /// Renders a row with display names, e.g. `P=1, Q=0`.
    pub fn assignment_to_string(&self, row: &Assignment) -> String {
        row.iter()
            .map(|vv| format!("{}={}", self.var_name(vv.var), vv.value as u8))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    #[test]
    fn test_zero_vars() {
        let logic = Logic::default();
        let rows = logic.all_ordered_combinations(&[]);
        assert_eq!(rows.len(), 1);
        assert!(rows[0].is_empty());
        assert_eq!(rows[0].value(), 0);
    }

    #[test]
    fn test_bit_order() {
        let logic = Logic::default();
        let a = logic.mk_var("A");
        let b = logic.mk_var("B");
        let c = logic.mk_var("C");

        let rows = logic.all_ordered_combinations(&[a, b, c]);
        assert_eq!(rows.len(), 8);

        // Row 6 = 0b110: A=0, B=1, C=1.
        let va = logic.variable(a);
        let vb = logic.variable(b);
        let vc = logic.variable(c);
        assert_eq!(rows[6].get(va), Some(false));
        assert_eq!(rows[6].get(vb), Some(true));
        assert_eq!(rows[6].get(vc), Some(true));
    }

    #[test]
    fn test_all_rows_distinct_and_increasing() {
        let logic = Logic::default();
        let vars: Vec<Ref> = (0..5).map(|i| logic.mk_var(format!("x{}", i))).collect();

        let rows = logic.all_ordered_combinations(&vars);
        assert_eq!(rows.len(), 32);
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), 5);
            assert_eq!(row.value(), i as u64);
        }
    }

    #[test]
    fn test_order_follows_list_not_creation() {
        let logic = Logic::default();
        let a = logic.mk_var("A");
        let b = logic.mk_var("B");

        let rows = logic.all_ordered_combinations(&[b, a]);
        // Row 1: first listed variable (B) is the low bit.
        assert_eq!(rows[1].get(logic.variable(b)), Some(true));
        assert_eq!(rows[1].get(logic.variable(a)), Some(false));
    }

    #[test]
    fn test_enumeration_does_not_assign() {
        let logic = Logic::default();
        let a = logic.mk_var("A");

        let _ = logic.all_ordered_combinations(&[a]);
        assert!(!logic.value(a));
    }

    #[test]
    fn test_assign() {
        let logic = Logic::default();
        let a = logic.mk_var("A");
        let b = logic.mk_var("B");

        let rows = logic.all_ordered_combinations(&[a, b]);
        logic.assign(&rows[1]);
        assert!(logic.value(a));
        assert!(!logic.value(b));
        logic.assign(&rows[2]);
        assert!(!logic.value(a));
        assert!(logic.value(b));
    }

    #[test]
    fn test_combinations_size_hint() {
        let logic = Logic::default();
        let a = logic.mk_var("A");
        let b = logic.mk_var("B");

        let mut it = logic.combinations(&[a, b]);
        assert_eq!(it.size_hint(), (4, Some(4)));
        it.next();
        assert_eq!(it.size_hint(), (3, Some(3)));
    }

    #[test]
    fn test_assignment_to_string() {
        let logic = Logic::default();
        let p = logic.mk_var("P");
        let q = logic.mk_var("Q");

        let rows = logic.all_ordered_combinations(&[p, q]);
        assert_eq!(logic.assignment_to_string(&rows[1]), "P=1, Q=0");
        assert_eq!(rows[3].to_string(), "v0=1 v1=1");
    }

    #[test]
    #[should_panic(expected = "Cannot enumerate")]
    fn test_too_many_variables_rejected() {
        let logic = Logic::default();
        let vars: Vec<Ref> = (0..=MAX_VARS).map(|i| logic.mk_var(format!("x{}", i))).collect();
        assert_eq!(vars.len(), 64);
        logic.combinations(&vars);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_max_variables_size_hint() {
        let logic = Logic::default();
        let vars: Vec<Ref> = (0..MAX_VARS).map(|i| logic.mk_var(format!("x{}", i))).collect();

        let it = logic.combinations(&vars);
        assert_eq!(it.vars().len(), 63);
        assert_eq!(it.size_hint(), (1 << 63, Some(1 << 63)));
    }

    #[test]
    fn test_combinations_vars_follow_list_order() {
        let logic = Logic::default();
        let a = logic.mk_var("A");
        let b = logic.mk_var("B");

        let it = logic.combinations(&[b, a]);
        assert_eq!(it.vars(), &[logic.variable(b), logic.variable(a)]);
    }

    #[test]
    fn test_assignment_new_matches_from_index() {
        let x = Var::new(0);
        let y = Var::new(1);

        let row = Assignment::new(vec![VarValue::new(x, false), VarValue::new(y, true)]);
        assert_eq!(row, Assignment::from_index(&[x, y], 2));
        assert_eq!(row.value(), 2);
        assert_eq!(row.values()[1], VarValue::new(y, true));
    }

    #[test]
    #[should_panic(expected = "is listed twice")]
    fn test_duplicate_variable_rejected() {
        let logic = Logic::default();
        let a = logic.mk_var("A");
        logic.combinations(&[a, a]);
    }

    #[test]
    #[should_panic(expected = "is not a variable")]
    fn test_compound_in_variable_list_rejected() {
        let logic = Logic::default();
        let a = logic.mk_var("A");
        let f = logic.mk_not(a);
        logic.combinations(&[a, f]);
    }
}
