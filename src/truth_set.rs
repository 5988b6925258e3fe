//! Truth sets and their merge-join algebra.
//!
//! The truth set of an expression over an ordered variable list is the
//! subsequence of [`Logic::all_ordered_combinations`] under which the
//! expression is true. It inherits the enumeration order, so its rows are
//! strictly increasing in [`Assignment::value`]. Intersection and difference
//! rely on that ordering and run in linear time.
//!
//! Two truth sets are only comparable when they were built over the *same*
//! variable list in the *same* order. Mixing lists is not detected and gives
//! wrong (typically too small) results.
//!
//! ```
//! use entail_rs::logic::Logic;
//! use entail_rs::truth_set::truth_set_intersection;
//!
//! let logic = Logic::default();
//! let p = logic.mk_var("P");
//! let q = logic.mk_var("Q");
//! let vars = [p, q];
//!
//! let ts_p = logic.truth_set(p, &vars);
//! let ts_q = logic.truth_set(q, &vars);
//! let both = truth_set_intersection(&ts_p, &ts_q);
//! assert_eq!(both.values().collect::<Vec<_>>(), vec![3]);
//! ```

use std::cmp::Ordering;
use std::ops::Index;

use log::debug;

use crate::assignment::Assignment;
use crate::logic::Logic;
use crate::reference::Ref;

/// Rows of a truth table, in strictly increasing encoding order.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct TruthSet {
    rows: Vec<Assignment>,
}

impl TruthSet {
    /// Wraps rows that are already sorted by [`Assignment::value`].
    pub fn from_sorted(rows: Vec<Assignment>) -> Self {
        debug_assert!(
            rows.windows(2).all(|w| w[0].value() < w[1].value()),
            "Truth set rows must be strictly increasing"
        );
        Self { rows }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Assignment> {
        self.rows.iter()
    }

    pub fn rows(&self) -> &[Assignment] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Assignment> {
        self.rows
    }

    /// Encodings of the rows, ascending.
    pub fn values(&self) -> impl Iterator<Item = u64> + '_ {
        self.rows.iter().map(Assignment::value)
    }

    /// Checks whether the row with encoding `value` is present.
    pub fn contains_value(&self, value: u64) -> bool {
        self.rows.binary_search_by_key(&value, Assignment::value).is_ok()
    }

    /// Rows present in both `self` and `other`.
    pub fn intersect(&self, other: &TruthSet) -> TruthSet {
        truth_set_intersection(self, other)
    }

    /// Rows present in `self` but not in `other`.
    pub fn difference(&self, other: &TruthSet) -> TruthSet {
        let a = &self.rows;
        let b = &other.rows;
        let mut rows = Vec::new();
        let (mut i, mut j) = (0, 0);

        while i < a.len() {
            if j >= b.len() {
                rows.extend_from_slice(&a[i..]);
                break;
            }
            match a[i].value().cmp(&b[j].value()) {
                Ordering::Equal => {
                    i += 1;
                    j += 1;
                }
                Ordering::Less => {
                    rows.push(a[i].clone());
                    i += 1;
                }
                Ordering::Greater => j += 1,
            }
        }

        TruthSet { rows }
    }
}

impl Index<usize> for TruthSet {
    type Output = Assignment;

    fn index(&self, index: usize) -> &Self::Output {
        &self.rows[index]
    }
}

impl<'a> IntoIterator for &'a TruthSet {
    type Item = &'a Assignment;
    type IntoIter = std::slice::Iter<'a, Assignment>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl IntoIterator for TruthSet {
    type Item = Assignment;
    type IntoIter = std::vec::IntoIter<Assignment>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

/// Merge-join intersection of two truth sets.
///
/// Both inputs must be sorted ascending by [`Assignment::value`] and built over
/// the same ordered variable list. The result is sorted the same way.
pub fn truth_set_intersection(a: &TruthSet, b: &TruthSet) -> TruthSet {
    let (a, b) = (&a.rows, &b.rows);
    let mut rows = Vec::new();
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        match a[i].value().cmp(&b[j].value()) {
            Ordering::Equal => {
                rows.push(a[i].clone());
                i += 1;
                j += 1;
            }
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
        }
    }

    TruthSet { rows }
}

/// Left-folded intersection: `((s1 ∩ s2) ∩ s3) ...`.
///
/// Returns `None` when there are no sets to intersect.
pub fn truth_set_intersection_all<'a>(sets: impl IntoIterator<Item = &'a TruthSet>) -> Option<TruthSet> {
    let mut sets = sets.into_iter();
    let first = sets.next()?.clone();
    Some(sets.fold(first, |acc, s| truth_set_intersection(&acc, s)))
}

impl Logic {
    /// Rows over `variables` under which `f` evaluates to true.
    ///
    /// Each row is applied to the variables right before evaluation, so the
    /// variables are left holding the last row afterwards.
    pub fn truth_set(&self, f: Ref, variables: &[Ref]) -> TruthSet {
        let ev = self.evaluator(f);
        let mut rows = Vec::new();

        for row in self.combinations(variables) {
            self.assign(&row);
            if ev.eval() {
                rows.push(row);
            }
        }

        debug!(
            "truth_set({}, n = {}) -> {} rows",
            f,
            variables.len(),
            rows.len()
        );
        TruthSet { rows }
    }

    /// Checks whether `f` holds under every row over `variables`.
    pub fn is_tautology(&self, f: Ref, variables: &[Ref]) -> bool {
        let total = self.combinations(variables).size_hint().0;
        self.truth_set(f, variables).len() == total
    }

    /// Checks whether `f` holds under no row over `variables`.
    pub fn is_contradiction(&self, f: Ref, variables: &[Ref]) -> bool {
        self.truth_set(f, variables).is_empty()
    }
}
