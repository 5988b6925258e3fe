//! The expression manager.
//!
//! [`Logic`] owns every expression node and every variable. Expressions are
//! referred to by lightweight [`Ref`] handles; all construction and analysis
//! goes through the manager.
//!
//! # Node sharing
//!
//! Nodes are hash-consed: building the same connective over the same children
//! twice yields the same handle. A node can only be built from children that
//! already exist, so node indices always form a topological order and an
//! expression DAG can never contain a cycle.
//!
//! # Variable state
//!
//! Each variable carries a mutable value. Evaluation reads the current values;
//! [`Logic::assign`] writes a whole row of a truth table at once. This makes a
//! manager non-reentrant: two enumerations over the same manager must not be
//! interleaved. Clone the manager to work on an independent copy; handles
//! created before cloning stay valid in both copies.
//!
//! # Examples
//!
//! ```
//! use entail_rs::logic::Logic;
//!
//! let logic = Logic::default();
//! let p = logic.mk_var("P");
//! let q = logic.mk_var("Q");
//! let f = logic.mk_imply(p, q);
//!
//! logic.set_value(p, true);
//! assert!(!logic.evaluate(f));
//! logic.set_value(q, true);
//! assert!(logic.evaluate(f));
//! assert_eq!(logic.to_infix_string(f), "(P → Q)");
//! ```

use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};
use std::fmt::Debug;
use std::sync::atomic::{AtomicU32, Ordering};

use log::debug;

use crate::node::Node;
use crate::reference::Ref;
use crate::table::Table;
use crate::types::{Var, Variable};

type Storage = Table<Node>;

/// Source of manager ids; 0 is left for handles that belong to no manager.
static NEXT_ID: AtomicU32 = AtomicU32::new(1);

#[derive(Clone)]
pub struct Logic {
    id: u32,
    storage: RefCell<Storage>,
    pub(crate) variables: RefCell<Vec<Variable>>,
}

impl Logic {
    /// Creates a manager able to hold `2^storage_bits - 1` nodes.
    pub fn new(storage_bits: usize) -> Self {
        assert!(
            storage_bits <= 31,
            "Storage bits should be in the range 0..=31"
        );

        Self {
            id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
            storage: RefCell::new(Storage::new(storage_bits)),
            variables: RefCell::new(Vec::new()),
        }
    }
}

impl Default for Logic {
    fn default() -> Self {
        Logic::new(20)
    }
}

impl Debug for Logic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let storage = self.storage.borrow();
        f.debug_struct("Logic")
            .field("id", &self.id)
            .field("capacity", &storage.capacity())
            .field("size", &storage.size())
            .field("variables", &self.variables.borrow().len())
            .finish()
    }
}

impl Logic {
    /// Returns the node behind a handle.
    pub fn node(&self, f: Ref) -> Node {
        self.check(f);
        *self.storage.borrow().value(f.index())
    }

    /// Checks whether `f` names a node of this manager.
    ///
    /// Handles allocated by another manager are never contained, even when
    /// their index is in range.
    pub fn contains(&self, f: Ref) -> bool {
        f.manager() == self.id && self.storage.borrow().contains(f.index())
    }

    fn check(&self, f: Ref) {
        assert!(self.contains(f), "Node {} does not belong to this manager", f);
    }

    /// Number of nodes allocated so far.
    pub fn num_nodes(&self) -> usize {
        self.storage.borrow().size()
    }

    /// Number of variables created so far.
    pub fn num_vars(&self) -> usize {
        self.variables.borrow().len()
    }

    pub fn is_var(&self, f: Ref) -> bool {
        self.node(f).is_var()
    }

    /// Returns the variable behind a leaf node.
    ///
    /// # Panics
    ///
    /// Panics if `f` is not a variable leaf.
    pub fn variable(&self, f: Ref) -> Var {
        match self.node(f) {
            Node::Var(v) => v,
            _ => panic!("Node {} is not a variable", f),
        }
    }
}

// Variables
impl Logic {
    /// Creates a new variable with the given display name and value `false`.
    pub fn mk_var(&self, name: impl Into<String>) -> Ref {
        self.mk_var_with_value(name, false)
    }

    /// Creates a new variable named `"unnamed variable"`.
    pub fn mk_unnamed_var(&self) -> Ref {
        self.mk_var(Variable::DEFAULT_NAME)
    }

    /// Creates a new variable with the given display name and initial value.
    pub fn mk_var_with_value(&self, name: impl Into<String>, value: bool) -> Ref {
        let var = Var::new(self.num_vars() as u32);
        let f = self.mk_node(Node::Var(var));
        self.variables.borrow_mut().push(Variable::new(name, value));
        debug!("mk_var: {} -> {}", var, f);
        f
    }

    /// Current value of the variable behind the leaf `f`.
    pub fn value(&self, f: Ref) -> bool {
        self.var_value(self.variable(f))
    }

    /// Overwrites the value of the variable behind the leaf `f`.
    pub fn set_value(&self, f: Ref, value: bool) {
        self.set_var_value(self.variable(f), value);
    }

    /// Display name of the variable behind the leaf `f`.
    pub fn name(&self, f: Ref) -> String {
        self.var_name(self.variable(f))
    }

    pub fn var_value(&self, var: Var) -> bool {
        self.variables.borrow()[var.index()].value
    }

    pub fn set_var_value(&self, var: Var, value: bool) {
        self.variables.borrow_mut()[var.index()].value = value;
    }

    pub fn var_name(&self, var: Var) -> String {
        self.variables.borrow()[var.index()].name.clone()
    }
}

// Connectives
impl Logic {
    fn mk_node(&self, node: Node) -> Ref {
        for &child in node.children() {
            self.check(child);
        }
        let i = self.storage.borrow_mut().put(node);
        Ref::with_manager(i as u32, self.id)
    }

    pub fn mk_not(&self, a: Ref) -> Ref {
        let f = self.mk_node(Node::Not(a));
        debug!("mk_not({}) -> {}", a, f);
        f
    }

    pub fn mk_and(&self, a: Ref, b: Ref) -> Ref {
        let f = self.mk_node(Node::And(a, b));
        debug!("mk_and({}, {}) -> {}", a, b, f);
        f
    }

    pub fn mk_or(&self, a: Ref, b: Ref) -> Ref {
        let f = self.mk_node(Node::Or(a, b));
        debug!("mk_or({}, {}) -> {}", a, b, f);
        f
    }

    /// Material implication `antecedent → consequent`.
    pub fn mk_imply(&self, antecedent: Ref, consequent: Ref) -> Ref {
        let f = self.mk_node(Node::Imply(antecedent, consequent));
        debug!("mk_imply({}, {}) -> {}", antecedent, consequent, f);
        f
    }

    /// Biconditional `a ↔ b`.
    pub fn mk_iff(&self, a: Ref, b: Ref) -> Ref {
        let f = self.mk_node(Node::Iff(a, b));
        debug!("mk_iff({}, {}) -> {}", a, b, f);
        f
    }

    /// Left-folded conjunction. Returns `None` for an empty input.
    pub fn mk_and_all(&self, items: impl IntoIterator<Item = Ref>) -> Option<Ref> {
        items.into_iter().reduce(|acc, x| self.mk_and(acc, x))
    }

    /// Left-folded disjunction. Returns `None` for an empty input.
    pub fn mk_or_all(&self, items: impl IntoIterator<Item = Ref>) -> Option<Ref> {
        items.into_iter().reduce(|acc, x| self.mk_or(acc, x))
    }
}

// Structure
impl Logic {
    /// All nodes reachable from `roots`, in ascending (topological) order.
    pub fn descendants(&self, roots: impl IntoIterator<Item = Ref>) -> Vec<Ref> {
        let mut visited = BTreeSet::new();
        let mut stack: Vec<Ref> = roots.into_iter().collect();

        while let Some(f) = stack.pop() {
            if visited.insert(f) {
                stack.extend(self.node(f).children().copied());
            }
        }

        visited.into_iter().collect()
    }

    /// Number of distinct nodes in the DAG rooted at `f`.
    pub fn size(&self, f: Ref) -> usize {
        self.descendants([f]).len()
    }

    /// Variables occurring in `f`, in creation order.
    pub fn support(&self, f: Ref) -> Vec<Var> {
        self.descendants([f])
            .into_iter()
            .filter_map(|g| match self.node(g) {
                Node::Var(v) => Some(v),
                _ => None,
            })
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Renders `f` as a fully parenthesized infix formula.
    pub fn to_infix_string(&self, f: Ref) -> String {
        let mut rendered: HashMap<Ref, String> = HashMap::new();
        for g in self.descendants([f]) {
            let node = self.node(g);
            let s = match node {
                Node::Var(v) => self.var_name(v),
                Node::Not(a) => format!("{}{}", node.symbol(), rendered[&a]),
                Node::And(a, b) | Node::Or(a, b) | Node::Imply(a, b) | Node::Iff(a, b) => {
                    format!("({} {} {})", rendered[&a], node.symbol(), rendered[&b])
                }
            };
            rendered.insert(g, s);
        }
        rendered.remove(&f).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn test_var() {
        let logic = Logic::default();

        let p = logic.mk_var("P");

        assert!(logic.is_var(p));
        assert_eq!(logic.variable(p), Var::new(0));
        assert_eq!(logic.name(p), "P");
        assert!(!logic.value(p));

        logic.set_value(p, true);
        assert!(logic.value(p));
    }

    #[test]
    fn test_var_with_value() {
        let logic = Logic::default();

        let p = logic.mk_var_with_value("P", true);
        let u = logic.mk_unnamed_var();

        assert!(logic.value(p));
        assert_eq!(logic.name(u), "unnamed variable");
        assert_eq!(logic.num_vars(), 2);
    }

    #[test]
    fn test_same_name_distinct_vars() {
        let logic = Logic::default();

        let a = logic.mk_var("X");
        let b = logic.mk_var("X");

        assert_ne!(a, b);
        logic.set_value(a, true);
        assert!(!logic.value(b));
    }

    #[test]
    fn test_hash_consing() {
        let logic = Logic::default();

        let p = logic.mk_var("P");
        let q = logic.mk_var("Q");

        let f = logic.mk_and(p, q);
        let g = logic.mk_and(p, q);
        let h = logic.mk_and(q, p);

        assert_eq!(f, g);
        assert_ne!(f, h);
        assert_eq!(logic.num_nodes(), 4);
    }

    #[test]
    fn test_children_before_parents() {
        let logic = Logic::default();

        let p = logic.mk_var("P");
        let q = logic.mk_var("Q");
        let f = logic.mk_or(logic.mk_not(p), q);

        for g in logic.descendants([f]) {
            for &child in logic.node(g).children() {
                assert!(child < g);
            }
        }
    }

    #[test]
    #[should_panic(expected = "does not belong to this manager")]
    fn test_dangling_child_rejected() {
        let logic = Logic::default();

        let p = logic.mk_var("P");
        logic.mk_and(p, Ref::new(42));
    }

    #[test]
    #[should_panic(expected = "does not belong to this manager")]
    fn test_foreign_child_rejected() {
        let a = Logic::default();
        let b = Logic::default();

        a.mk_var("A1");
        let a2 = a.mk_var("A2");
        let b1 = b.mk_var("B1");
        b.mk_var("B2");

        // Same index as B2 in `b`, but allocated by `a`.
        assert_eq!(a2.get(), 2);
        assert!(!b.contains(a2));
        b.mk_and(b1, a2);
    }

    #[test]
    fn test_storage_full_keeps_variables_in_sync() {
        let logic = Logic::new(2);
        for i in 0..3 {
            logic.mk_var(format!("x{}", i));
        }

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| logic.mk_var("x3")));
        assert!(result.is_err());
        assert_eq!(logic.num_vars(), 3);
        assert_eq!(logic.num_nodes(), 3);
    }

    #[test]
    #[should_panic(expected = "is not a variable")]
    fn test_set_value_on_compound() {
        let logic = Logic::default();

        let p = logic.mk_var("P");
        let f = logic.mk_not(p);
        logic.set_value(f, true);
    }

    #[test]
    fn test_fold_helpers() {
        let logic = Logic::default();

        let p = logic.mk_var("P");
        let q = logic.mk_var("Q");
        let r = logic.mk_var("R");

        let f = logic.mk_and_all([p, q, r]).unwrap();
        assert_eq!(f, logic.mk_and(logic.mk_and(p, q), r));
        assert_eq!(logic.mk_or_all(Vec::<Ref>::new()), None);
        assert_eq!(logic.mk_or_all([p]), Some(p));
    }

    #[test]
    fn test_size_and_support() {
        let logic = Logic::default();

        let p = logic.mk_var("P");
        let q = logic.mk_var("Q");
        let _r = logic.mk_var("R");

        // Shared subexpression counted once.
        let np = logic.mk_not(p);
        let f = logic.mk_iff(logic.mk_and(np, q), np);

        assert_eq!(logic.size(f), 5);
        assert_eq!(logic.support(f), vec![Var::new(0), Var::new(1)]);
    }

    #[test]
    fn test_to_infix_string() {
        let logic = Logic::default();

        let p = logic.mk_var("P");
        let q = logic.mk_var("Q");

        let f = logic.mk_iff(logic.mk_not(logic.mk_and(p, q)), logic.mk_or(logic.mk_not(p), logic.mk_not(q)));
        assert_eq!(logic.to_infix_string(f), "(¬(P ∧ Q) ↔ (¬P ∨ ¬Q))");
        assert_eq!(logic.to_infix_string(logic.mk_imply(p, q)), "(P → Q)");
    }

    #[test]
    fn test_clone_is_independent() {
        let logic = Logic::default();
        let p = logic.mk_var("P");

        let other = logic.clone();
        other.set_value(p, true);

        assert!(!logic.value(p));
        assert!(other.value(p));
    }
}
