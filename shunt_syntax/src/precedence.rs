//! Contains the comparison of operator precedences used to decide when the operator stack is
//! drained.

use std::cmp::Ordering;

use shunt_lexical::node::{Associativity, Operator};

/// Is the outcome of comparing the precedence of a first operator against a second one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Precedence {
    /// The first operator binds tighter.
    Greater,

    /// The first operator binds looser.
    Lesser,

    /// Both operators share a tier and at least one of them is right-associative.
    Same,

    /// Both operators share a tier and both are left-associative.
    SameLeftAssoc,
}

impl Precedence {
    /// Returns `true` if an operator already on the stack with this precedence relative to the
    /// incoming operator has to be emitted first.
    #[must_use]
    pub fn pops(self) -> bool { matches!(self, Self::Greater | Self::SameLeftAssoc) }
}

/// Compares the precedence of `first` against the precedence of `second`.
#[must_use]
pub fn compare(first: Operator, second: Operator) -> Precedence {
    // the lower the tier, the tighter the operator binds
    match first.tier().cmp(&second.tier()) {
        Ordering::Less => Precedence::Greater,
        Ordering::Greater => Precedence::Lesser,
        Ordering::Equal => {
            if first.associativity() == Associativity::Left
                && second.associativity() == Associativity::Left
            {
                Precedence::SameLeftAssoc
            } else {
                Precedence::Same
            }
        }
    }
}
