use crate::reference::Ref;
use crate::types::Var;
use crate::utils::{pairing2, pairing3, MyHash};

/// A node of an expression DAG.
///
/// Children are addressed by `I`, which is a [`Ref`] inside the arena and a
/// slot index inside a compiled [`Evaluator`][crate::eval::Evaluator].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Node<I = Ref> {
    Var(Var),
    Not(I),
    And(I, I),
    Or(I, I),
    /// Material implication: antecedent, consequent.
    Imply(I, I),
    Iff(I, I),
}

impl<A> Node<A> {
    #[inline(always)]
    pub fn fmap<B, F>(self, mut f: F) -> Node<B>
    where
        F: FnMut(A) -> B,
    {
        match self {
            Node::Var(v) => Node::Var(v),
            Node::Not(a) => Node::Not(f(a)),
            Node::And(a, b) => Node::And(f(a), f(b)),
            Node::Or(a, b) => Node::Or(f(a), f(b)),
            Node::Imply(a, b) => Node::Imply(f(a), f(b)),
            Node::Iff(a, b) => Node::Iff(f(a), f(b)),
        }
    }

    /// Returns the children in left-to-right order.
    pub fn children(&self) -> impl Iterator<Item = &A> {
        let (a, b) = match self {
            Node::Var(_) => (None, None),
            Node::Not(a) => (Some(a), None),
            Node::And(a, b) | Node::Or(a, b) | Node::Imply(a, b) | Node::Iff(a, b) => (Some(a), Some(b)),
        };
        a.into_iter().chain(b)
    }

    pub fn is_var(&self) -> bool {
        matches!(self, Node::Var(_))
    }

    /// Connective symbol used by the renderers.
    pub fn symbol(&self) -> &'static str {
        match self {
            Node::Var(_) => "",
            Node::Not(_) => "¬",
            Node::And(..) => "∧",
            Node::Or(..) => "∨",
            Node::Imply(..) => "→",
            Node::Iff(..) => "↔",
        }
    }

    fn tag(&self) -> u64 {
        match self {
            Node::Var(_) => 0,
            Node::Not(_) => 1,
            Node::And(..) => 2,
            Node::Or(..) => 3,
            Node::Imply(..) => 4,
            Node::Iff(..) => 5,
        }
    }
}

impl Node<bool> {
    /// Combines already evaluated children. `Var` leaves are resolved by the caller.
    #[inline]
    pub fn combine(self, leaf: impl FnOnce(Var) -> bool) -> bool {
        match self {
            Node::Var(v) => leaf(v),
            Node::Not(a) => !a,
            Node::And(a, b) => a && b,
            Node::Or(a, b) => a || b,
            Node::Imply(a, b) => !a || b,
            Node::Iff(a, b) => a == b,
        }
    }
}

impl MyHash for Node {
    fn hash(&self) -> u64 {
        match *self {
            Node::Var(v) => pairing2(self.tag(), v.id() as u64),
            Node::Not(a) => pairing2(self.tag(), a.get() as u64),
            Node::And(a, b) | Node::Or(a, b) | Node::Imply(a, b) | Node::Iff(a, b) => {
                pairing3(self.tag(), a.get() as u64, b.get() as u64)
            }
        }
    }
}
