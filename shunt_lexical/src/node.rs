//! Is a module containing the [`Node`] type and all of its related types.

use std::{collections::HashMap, fmt::Display, str::FromStr};

use enum_as_inner::EnumAsInner;
use lazy_static::lazy_static;
use shunt_base::arena::Handle;
use strum::IntoEnumIterator;
use strum_macros::{EnumDiscriminants, EnumIter};
use thiserror::Error;

/// Is the type of the value carried by a literal [`Node`].
pub type Number = f64;

/// Is a handle to a [`Node`] owned by an arena chain.
pub type NodeRef = Handle<Node>;

/// Is the grouping rule applied between operators of the same tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Associativity {
    Left,
    Right,
}

/// Is an enumeration of the supported binary operators, in descending order of precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
#[allow(missing_docs)]
pub enum Operator {
    Power,
    Divide,
    Multiply,
    Add,
    Subtract,
}

/// Is an error that is returned when a string cannot be parsed into an [`Operator`] in [`FromStr`]
/// trait implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Error)]
#[error("invalid string representation of operator.")]
pub struct OperatorParseError;

impl FromStr for Operator {
    type Err = OperatorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();

        match (chars.next(), chars.next()) {
            (Some(symbol), None) => Self::from_symbol(symbol).ok_or(OperatorParseError),
            _ => Err(OperatorParseError),
        }
    }
}

impl Operator {
    /// Gets the operator written with the given character, if any.
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        lazy_static! {
            static ref SYMBOL_OPERATOR_MAP: HashMap<char, Operator> =
                Operator::iter().map(|operator| (operator.symbol(), operator)).collect();
        }

        SYMBOL_OPERATOR_MAP.get(&symbol).copied()
    }

    /// Gets the character the operator is written with.
    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Self::Power => '^',
            Self::Divide => '/',
            Self::Multiply => '*',
            Self::Add => '+',
            Self::Subtract => '-',
        }
    }

    /// Gets the name of the operator as a `&str`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Power => "Power",
            Self::Divide => "Divide",
            Self::Multiply => "Multiply",
            Self::Add => "Add",
            Self::Subtract => "Subtract",
        }
    }

    /// Gets the precedence tier of the operator.
    ///
    /// Tier 1 binds the tightest.
    #[must_use]
    pub fn tier(self) -> u32 {
        match self {
            Self::Power => 1,
            Self::Divide | Self::Multiply => 2,
            Self::Add | Self::Subtract => 3,
        }
    }

    /// Gets the [`Associativity`] of the operator.
    #[must_use]
    pub fn associativity(self) -> Associativity {
        match self {
            Self::Power => Associativity::Right,
            Self::Divide | Self::Multiply | Self::Add | Self::Subtract => Associativity::Left,
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(self.as_str()) }
}

/// Represents a single lexical token of an arithmetic expression.
///
/// Freshly allocated arena slots hold [`Node::Unknown`]; the tokenizer overwrites them with the
/// token it recognises. The payload of a node can only be read by matching the variant carrying
/// it.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, EnumAsInner, EnumDiscriminants)]
#[strum_discriminants(name(NodeKind), derive(Hash, PartialOrd, Ord, EnumIter))]
#[strum_discriminants(allow(missing_docs))]
#[allow(missing_docs)]
pub enum Node {
    #[default]
    Unknown,
    Literal(Number),
    Operator(Operator),
    LeftParen,
    RightParen,
}

impl Node {
    /// Gets the [`NodeKind`] of the node.
    #[must_use]
    pub fn kind(&self) -> NodeKind { self.into() }
}

impl Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal(value) => write!(f, "Literal: {value:.3}"),
            Self::Operator(operator) => write!(f, "Operator: {operator}"),
            Self::LeftParen => f.write_str("Left Parenthesis"),
            Self::RightParen => f.write_str("Right Parenthesis"),
            Self::Unknown => f.write_str("Not Implemented"),
        }
    }
}
