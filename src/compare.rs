//! Pointwise comparison of expressions.
//!
//! [`Logic::compare`] finds every row on which two expressions disagree. Unlike
//! entailment, which only looks at the rows where the premises are true, this
//! difference is symmetric.

use log::debug;

use crate::assignment::Assignment;
use crate::logic::Logic;
use crate::reference::Ref;

impl Logic {
    /// Rows over `variables` where `a` and `b` evaluate differently, in enumeration order.
    pub fn compare(&self, a: Ref, b: Ref, variables: &[Ref]) -> Vec<Assignment> {
        let ea = self.evaluator(a);
        let eb = self.evaluator(b);
        let mut collisions = Vec::new();

        for row in self.combinations(variables) {
            self.assign(&row);
            if ea.eval() != eb.eval() {
                collisions.push(row);
            }
        }

        debug!("compare({}, {}) -> {} collisions", a, b, collisions.len());
        collisions
    }

    /// Checks whether `a` and `b` agree on every row over `variables`.
    ///
    /// Stops at the first disagreement.
    pub fn equivalent(&self, a: Ref, b: Ref, variables: &[Ref]) -> bool {
        let ea = self.evaluator(a);
        let eb = self.evaluator(b);

        self.combinations(variables).all(|row| {
            self.assign(&row);
            ea.eval() == eb.eval()
        })
    }
}
