//! Contains all kinds of errors that can occur while converting an expression to postfix order.

use std::fmt::Display;

use derive_more::From;
use enum_as_inner::EnumAsInner;
use shunt_base::{
    error::OutOfMemory,
    log::{Message, Severity},
};
use shunt_lexical::node::NodeKind;

/// One of the stacks used by the conversion could not grow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoExpr {
    /// The allocation failure.
    pub source: OutOfMemory,
}

impl Display for NoExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            Message::new(Severity::Error, "Insufficient expression capacity")
        )
    }
}

/// Is the parenthesis left without a counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Unmatched {
    LeftParen,
    RightParen,
}

/// A right parenthesis closes nothing, or a left parenthesis is never closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MismatchedParen {
    /// The index of the offending parenthesis in the token buffer.
    pub index: usize,

    /// Which parenthesis lacks its counterpart.
    pub unmatched: Unmatched,
}

impl Display for MismatchedParen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = match self.unmatched {
            Unmatched::LeftParen => format!(
                "Mismatched parenthesis: token {} opens a group that is never closed",
                self.index
            ),
            Unmatched::RightParen => format!(
                "Mismatched parenthesis: token {} closes a group that was never opened",
                self.index
            ),
        };

        write!(f, "{}", Message::new(Severity::Error, message))
    }
}

/// A token that a successful tokenization never produces reached the conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InternalError {
    /// The index of the offending token in the token buffer.
    pub index: usize,

    /// The kind of the offending node, or [`None`] if its handle does not resolve.
    pub found: Option<NodeKind>,
}

impl Display for InternalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            Message::new(Severity::Error, "Internal error; please report!")
        )
    }
}

/// Is an enumeration containing all kinds of errors that can occur while converting an expression
/// to postfix order.
#[derive(Debug, Clone, PartialEq, Eq, EnumAsInner, From, thiserror::Error)]
#[allow(missing_docs)]
pub enum Error {
    #[error("{0}")]
    NoExpr(NoExpr),

    #[error("{0}")]
    MismatchedParen(MismatchedParen),

    #[error("{0}")]
    InternalError(InternalError),
}

impl From<OutOfMemory> for Error {
    fn from(source: OutOfMemory) -> Self { Self::NoExpr(NoExpr { source }) }
}
