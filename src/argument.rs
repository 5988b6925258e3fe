//! Validity and satisfiability of arguments.
//!
//! An [`Argument`] is a conclusion together with a non-empty list of
//! premises. It is *valid* when every row satisfying all premises also
//! satisfies the conclusion (premises ⊨ conclusion), and *satisfiable* when at
//! least one row satisfies the premises and the conclusion together.
//!
//! Both checks work on truth sets: the premises' truth sets are intersected
//! left to right starting from the first premise, then compared against the
//! conclusion's truth set.
//!
//! ```
//! use entail_rs::argument::Argument;
//! use entail_rs::logic::Logic;
//!
//! let logic = Logic::default();
//! let p = logic.mk_var("P");
//! let q = logic.mk_var("Q");
//!
//! // P ⊨ P ∨ Q
//! let arg = Argument::new(logic.mk_or(p, q), [p]).unwrap();
//! assert!(logic.valid(&[p, q], &arg));
//!
//! // P ⊭ P ∧ Q, but the two are jointly satisfiable.
//! let arg = Argument::new(logic.mk_and(p, q), [p]).unwrap();
//! assert!(!logic.valid(&[p, q], &arg));
//! assert!(logic.satisfiable(&[p, q], &arg));
//! ```

use log::debug;

use crate::error::LogicError;
use crate::logic::Logic;
use crate::reference::Ref;
use crate::truth_set::{truth_set_intersection, TruthSet};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    conclusion: Ref,
    premises: Vec<Ref>,
}

impl Argument {
    /// Creates an argument.
    ///
    /// Returns [`LogicError::NoPremises`] if `premises` is empty.
    pub fn new(conclusion: Ref, premises: impl IntoIterator<Item = Ref>) -> Result<Self, LogicError> {
        let premises: Vec<Ref> = premises.into_iter().collect();
        if premises.is_empty() {
            return Err(LogicError::NoPremises);
        }
        Ok(Self { conclusion, premises })
    }

    pub fn conclusion(&self) -> Ref {
        self.conclusion
    }

    /// Premises in the order they were given; never empty.
    pub fn premises(&self) -> &[Ref] {
        &self.premises
    }
}

/// Truth sets of both sides of an argument over one variable list.
struct Sides {
    conclusion: TruthSet,
    premises: TruthSet,
}

impl Logic {
    fn sides(&self, variables: &[Ref], argument: &Argument) -> Sides {
        let conclusion = self.truth_set(argument.conclusion, variables);

        let (first, rest) = argument
            .premises
            .split_first()
            .expect("Argument always has at least one premise");
        let premises = rest.iter().fold(self.truth_set(*first, variables), |acc, &p| {
            truth_set_intersection(&acc, &self.truth_set(p, variables))
        });

        Sides { conclusion, premises }
    }

    /// Checks whether the premises entail the conclusion over `variables`.
    ///
    /// Premises that contradict each other entail anything.
    pub fn valid(&self, variables: &[Ref], argument: &Argument) -> bool {
        let sides = self.sides(variables, argument);
        let both = truth_set_intersection(&sides.conclusion, &sides.premises);
        let valid = sides.premises.len() == both.len();
        debug!(
            "valid: {} premise rows, {} shared with conclusion -> {}",
            sides.premises.len(),
            both.len(),
            valid
        );
        valid
    }

    /// Checks whether some row satisfies every premise and the conclusion.
    pub fn satisfiable(&self, variables: &[Ref], argument: &Argument) -> bool {
        let satisfiable = !self.witnesses(variables, argument).is_empty();
        debug!("satisfiable -> {}", satisfiable);
        satisfiable
    }

    /// Rows satisfying every premise and the conclusion.
    pub fn witnesses(&self, variables: &[Ref], argument: &Argument) -> TruthSet {
        let sides = self.sides(variables, argument);
        truth_set_intersection(&sides.conclusion, &sides.premises)
    }

    /// Rows satisfying every premise but not the conclusion.
    ///
    /// Empty exactly when the argument is valid.
    pub fn counterexamples(&self, variables: &[Ref], argument: &Argument) -> TruthSet {
        let sides = self.sides(variables, argument);
        sides.premises.difference(&sides.conclusion)
    }
}
