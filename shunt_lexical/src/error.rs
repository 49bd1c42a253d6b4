//! Contains all kinds of lexical errors that can occur while tokenizing an expression.

use std::fmt::Display;

use derive_more::From;
use enum_as_inner::EnumAsInner;
use shunt_base::{
    error::OutOfMemory,
    log::{Message, Severity},
};

/// Every arena of the chain has been exhausted before the end of the expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NoNode {
    /// The byte offset of the token that could not get a node.
    pub position: usize,
}

impl Display for NoNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Message::new(Severity::Error, "Insufficient nodes"))
    }
}

/// The character at the given position does not start any token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BadSymbol {
    /// The byte offset of the unrecognised character.
    pub position: usize,

    /// The unrecognised character.
    pub symbol: char,
}

impl Display for BadSymbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            Message::new(
                Severity::Error,
                format!("Unexpected symbol {:?}", self.symbol)
            )
        )
    }
}

/// The token buffer could not grow to hold another token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoExpr {
    /// The byte offset of the token that could not be committed.
    pub position: usize,

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

/// Is an enumeration containing all kinds of lexical errors that can occur while tokenizing an
/// expression.
#[derive(Debug, Clone, PartialEq, Eq, EnumAsInner, From)]
#[allow(missing_docs)]
pub enum Error {
    NoNode(NoNode),
    BadSymbol(BadSymbol),
    NoExpr(NoExpr),
}

impl Error {
    /// Gets the byte offset of the expression at which tokenization stopped.
    #[must_use]
    pub fn position(&self) -> usize {
        match self {
            Self::NoNode(err) => err.position,
            Self::BadSymbol(err) => err.position,
            Self::NoExpr(err) => err.position,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoNode(err) => write!(f, "{err}"),
            Self::BadSymbol(err) => write!(f, "{err}"),
            Self::NoExpr(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {}
