//! Expression evaluation.
//!
//! Evaluation reads the *current* value of every variable reachable from the
//! root; it never writes. Since node indices are topologically ordered, an
//! expression is evaluated by a single bottom-up pass over its descendants,
//! each shared subexpression computed once.

use std::collections::HashMap;

use crate::logic::Logic;
use crate::node::Node;
use crate::reference::Ref;

/// An expression compiled for repeated evaluation.
///
/// Compiling resolves every child handle to a slot in a flat program, so that
/// evaluating the same expression under many assignments does not touch the
/// node table again.
#[derive(Debug, Clone)]
pub struct Evaluator<'a> {
    logic: &'a Logic,
    root: Ref,
    /// Bottom-up program; children always point to earlier slots.
    program: Vec<Node<usize>>,
}

impl<'a> Evaluator<'a> {
    pub fn new(logic: &'a Logic, root: Ref) -> Self {
        let order = logic.descendants([root]);
        let slots: HashMap<Ref, usize> = order.iter().enumerate().map(|(i, &f)| (f, i)).collect();
        let program = order.iter().map(|&f| logic.node(f).fmap(|child| slots[&child])).collect();

        Self { logic, root, program }
    }

    pub fn root(&self) -> Ref {
        self.root
    }

    /// Evaluates the compiled expression under the current variable values.
    pub fn eval(&self) -> bool {
        let variables = self.logic.variables.borrow();
        let mut results: Vec<bool> = Vec::with_capacity(self.program.len());

        for node in self.program.iter() {
            let value = node
                .fmap(|slot| results[slot])
                .combine(|v| variables[v.index()].value);
            results.push(value);
        }

        // The root has the largest index, hence the last slot.
        results.last().copied().unwrap_or(false)
    }
}

impl Logic {
    /// Evaluates `f` under the current variable values.
    pub fn evaluate(&self, f: Ref) -> bool {
        Evaluator::new(self, f).eval()
    }

    /// Compiles `f` for repeated evaluation.
    pub fn evaluator(&self, f: Ref) -> Evaluator<'_> {
        Evaluator::new(self, f)
    }
}
