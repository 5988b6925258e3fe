//! Operator sugar for building expressions.
//!
//! Handles do not know their manager, so `p & q` cannot allocate a node by
//! itself. Instead the operators produce small op values which
//! [`Logic::build`] materializes:
//!
//! | operator | connective    |
//! |----------|---------------|
//! | `a & b`  | conjunction   |
//! | `a \| b` | disjunction   |
//! | `!a`     | negation      |
//! | `a >> b` | implication   |
//! | `a % b`  | biconditional |
//!
//! ```
//! use entail_rs::logic::Logic;
//!
//! let logic = Logic::default();
//! let p = logic.mk_var("P");
//! let q = logic.mk_var("Q");
//!
//! let f = logic.build(p >> q);
//! assert_eq!(f, logic.mk_imply(p, q));
//! ```

use std::ops::{BitAnd, BitOr, Not, Rem, Shr};

use crate::logic::Logic;
use crate::reference::Ref;

pub struct AndOp {
    f: Ref,
    g: Ref,
}

impl BitAnd for Ref {
    type Output = AndOp;

    fn bitand(self, rhs: Self) -> Self::Output {
        AndOp { f: self, g: rhs }
    }
}

pub struct OrOp {
    f: Ref,
    g: Ref,
}

impl BitOr for Ref {
    type Output = OrOp;

    fn bitor(self, rhs: Self) -> Self::Output {
        OrOp { f: self, g: rhs }
    }
}

pub struct NotOp {
    f: Ref,
}

impl Not for Ref {
    type Output = NotOp;

    fn not(self) -> Self::Output {
        NotOp { f: self }
    }
}

pub struct ImplyOp {
    f: Ref,
    g: Ref,
}

impl Shr for Ref {
    type Output = ImplyOp;

    fn shr(self, rhs: Self) -> Self::Output {
        ImplyOp { f: self, g: rhs }
    }
}

pub struct IffOp {
    f: Ref,
    g: Ref,
}

impl Rem for Ref {
    type Output = IffOp;

    fn rem(self, rhs: Self) -> Self::Output {
        IffOp { f: self, g: rhs }
    }
}

pub trait Build {
    fn build(&self, logic: &Logic) -> Ref;
}

impl Logic {
    pub fn build(&self, value: impl Build) -> Ref {
        value.build(self)
    }
}

impl Build for Ref {
    fn build(&self, _logic: &Logic) -> Ref {
        *self
    }
}

impl Build for AndOp {
    fn build(&self, logic: &Logic) -> Ref {
        logic.mk_and(self.f, self.g)
    }
}

impl Build for OrOp {
    fn build(&self, logic: &Logic) -> Ref {
        logic.mk_or(self.f, self.g)
    }
}

impl Build for NotOp {
    fn build(&self, logic: &Logic) -> Ref {
        logic.mk_not(self.f)
    }
}

impl Build for ImplyOp {
    fn build(&self, logic: &Logic) -> Ref {
        logic.mk_imply(self.f, self.g)
    }
}

impl Build for IffOp {
    fn build(&self, logic: &Logic) -> Ref {
        logic.mk_iff(self.f, self.g)
    }
}
