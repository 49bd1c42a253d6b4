use std::{
    cmp::Ordering,
    fmt::{Display, Write},
};

use proptest::{
    prelude::Arbitrary,
    prop_assert, prop_assert_eq, prop_oneof, proptest,
    strategy::{BoxedStrategy, Strategy},
    test_runner::TestCaseResult,
};
use shunt_base::{
    arena::{Arena, Chain},
    config::Config,
};
use shunt_lexical::{
    node::{Associativity, Node, NodeKind, Operator},
    tokenizer::tokenize,
};
use shunt_test::input::Input;
use strum::IntoEnumIterator;

use super::to_postfix;
use crate::error::{Error, InternalError, MismatchedParen, Unmatched};

fn chain_for(source: &str) -> Chain<Node> {
    Chain::new(vec![Arena::with_capacity(source.len().max(1)).unwrap()])
}

fn convert_with(source: &str, config: &Config) -> Result<Vec<Node>, Error> {
    let mut chain = chain_for(source);
    let tokens = tokenize(source, &mut chain).unwrap();
    let postfix = to_postfix(&tokens, &chain, config)?;

    Ok(postfix.iter().map(|node| chain[*node]).collect())
}

/// Converts the expression and renders the postfix sequence with one space between tokens.
fn convert(source: &str) -> Result<String, Error> {
    let nodes = convert_with(source, &Config::default())?;

    let mut rendered = String::new();
    for node in nodes {
        if !rendered.is_empty() {
            rendered.push(' ');
        }

        match node {
            Node::Literal(value) => write!(rendered, "{value}").unwrap(),
            Node::Operator(operator) => rendered.push(operator.symbol()),
            node => panic!("unexpected {node:?} in postfix output"),
        }
    }

    Ok(rendered)
}

#[test]
fn tighter_operator_is_emitted_first() {
    assert_eq!(convert("2+3*4").unwrap(), "2 3 4 * +");
    assert_eq!(convert("2*3+4").unwrap(), "2 3 * 4 +");
    assert_eq!(convert("1+2*3^4-5").unwrap(), "1 2 3 4 ^ * + 5 -");
}

#[test]
fn parentheses_override_precedence() {
    assert_eq!(convert("(2+3)*4").unwrap(), "2 3 + 4 *");
    assert_eq!(convert("2^(3-1)").unwrap(), "2 3 1 - ^");
    assert_eq!(convert("((7))").unwrap(), "7");
}

#[test]
fn power_groups_to_the_right() {
    assert_eq!(convert("2^3^2").unwrap(), "2 3 2 ^ ^");
}

#[test]
fn left_associative_operators_group_to_the_left() {
    assert_eq!(convert("8/4/2").unwrap(), "8 4 / 2 /");
    assert_eq!(convert("8/4*2").unwrap(), "8 4 / 2 *");
    assert_eq!(convert("8-4+2").unwrap(), "8 4 - 2 +");
}

#[test]
fn well_formedness_is_not_checked() {
    assert_eq!(convert("").unwrap(), "");
    assert_eq!(convert("2+").unwrap(), "2 +");
    assert_eq!(convert("+*").unwrap(), "* +");
}

#[test]
fn unclosed_left_paren() {
    assert_eq!(
        convert("(2+3").unwrap_err(),
        Error::MismatchedParen(MismatchedParen {
            index: 0,
            unmatched: Unmatched::LeftParen
        })
    );
}

#[test]
fn unopened_right_paren() {
    assert_eq!(
        convert("2+3)").unwrap_err(),
        Error::MismatchedParen(MismatchedParen {
            index: 3,
            unmatched: Unmatched::RightParen
        })
    );
    assert_eq!(
        convert(")(").unwrap_err(),
        Error::MismatchedParen(MismatchedParen {
            index: 0,
            unmatched: Unmatched::RightParen
        })
    );
}

#[test]
fn unknown_node_is_an_internal_error() {
    let mut chain = Chain::new(vec![Arena::with_capacity(4).unwrap()]);
    let mut tokens = tokenize("2+3", &mut chain).unwrap().dissolve();

    // a freshly acquired slot still holds the default node
    tokens.insert(1, chain.acquire().unwrap());

    assert_eq!(
        to_postfix(&tokens, &chain, &Config::default()).unwrap_err(),
        Error::InternalError(InternalError {
            index: 1,
            found: Some(NodeKind::Unknown)
        })
    );
}

#[test]
fn dangling_handle_is_an_internal_error() {
    let mut other = chain_for("1");
    let handle = other.acquire().unwrap();

    let chain = chain_for("1");

    assert_eq!(
        to_postfix(&[handle], &chain, &Config::default()).unwrap_err(),
        Error::InternalError(InternalError {
            index: 0,
            found: None
        })
    );
}

#[test]
fn conversion_is_repeatable() {
    let source = "(1+2)*3^4^5/(6-7)";

    let mut first_chain = chain_for(source);
    let first_tokens = tokenize(source, &mut first_chain).unwrap();
    let first = to_postfix(&first_tokens, &first_chain, &Config::default()).unwrap();

    let mut second_chain = chain_for(source);
    let second_tokens = tokenize(source, &mut second_chain).unwrap();
    let second = to_postfix(&second_tokens, &second_chain, &Config::default()).unwrap();

    assert_eq!(
        first.iter().map(|node| first_chain[*node]).collect::<Vec<_>>(),
        second.iter().map(|node| second_chain[*node]).collect::<Vec<_>>()
    );
    assert_eq!(first.dissolve(), second.dissolve());
}

#[test]
fn unreservable_stack_is_no_expr() {
    let error = convert_with("1+2", &Config::new(0, 1, usize::MAX)).unwrap_err();

    assert!(error.is_no_expr());
    assert!(error
        .to_string()
        .contains("Insufficient expression capacity"));
}

#[test]
fn stacks_grow_past_configured_capacity() {
    let source = "1+(2*(3^(4-5)))";
    let small = Config::new(0, 1, 1);

    assert_eq!(
        convert_with(source, &small).unwrap(),
        convert_with(source, &Config::default()).unwrap()
    );
}

#[test]
fn error_messages() {
    let unclosed = convert("(1").unwrap_err().to_string();
    assert!(unclosed.contains("Mismatched parenthesis"));

    let internal = Error::InternalError(InternalError {
        index: 0,
        found: None,
    })
    .to_string();
    assert!(internal.contains("Internal error; please report!"));

    let boxed: Box<dyn std::error::Error> = Box::new(convert(")").unwrap_err());
    assert!(boxed.to_string().contains("Mismatched parenthesis"));
    assert!(boxed.source().is_none());
}

/// Represents an input expression tree; its post-order traversal is the expected postfix output.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Expression {
    Literal(u16),
    Binary(Box<Expression>, Operator, Box<Expression>),
    Parenthesized(Box<Expression>),
}

impl Expression {
    /// Returns `true` if the expression has to be wrapped in parentheses to appear on the given
    /// side of `operator`.
    fn needs_parens(&self, operator: Operator, side: Associativity) -> bool {
        let Self::Binary(_, inner, _) = self else {
            return false;
        };

        match inner.tier().cmp(&operator.tier()) {
            Ordering::Less => false,
            Ordering::Greater => true,
            Ordering::Equal => operator.associativity() != side,
        }
    }

    fn write_operand(
        &self,
        f: &mut std::fmt::Formatter<'_>,
        operator: Operator,
        side: Associativity,
    ) -> std::fmt::Result {
        if self.needs_parens(operator, side) {
            write!(f, "({self})")
        } else {
            write!(f, "{self}")
        }
    }

    fn post_order(&self, nodes: &mut Vec<Node>) {
        match self {
            Self::Literal(value) => nodes.push(Node::Literal(f64::from(*value))),
            Self::Binary(left, operator, right) => {
                left.post_order(nodes);
                right.post_order(nodes);
                nodes.push(Node::Operator(*operator));
            }
            Self::Parenthesized(inner) => inner.post_order(nodes),
        }
    }
}

impl Arbitrary for Expression {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        let leaf = proptest::num::u16::ANY.prop_map(Self::Literal);

        leaf.prop_recursive(8, 64, 2, |inner| {
            prop_oneof![
                3 => (
                    inner.clone(),
                    proptest::sample::select(Operator::iter().collect::<Vec<_>>()),
                    inner.clone()
                )
                    .prop_map(|(left, operator, right)| {
                        Self::Binary(Box::new(left), operator, Box::new(right))
                    }),
                1 => inner.prop_map(|inner| Self::Parenthesized(Box::new(inner))),
            ]
        })
        .boxed()
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal(value) => write!(f, "{value}"),
            Self::Binary(left, operator, right) => {
                left.write_operand(f, *operator, Associativity::Left)?;
                f.write_char(operator.symbol())?;
                right.write_operand(f, *operator, Associativity::Right)
            }
            Self::Parenthesized(inner) => write!(f, "({inner})"),
        }
    }
}

impl Input<&[Node]> for &Expression {
    fn assert(self, output: &[Node]) -> TestCaseResult {
        let mut expected = Vec::new();
        self.post_order(&mut expected);

        prop_assert_eq!(expected.as_slice(), output);
        Ok(())
    }
}

proptest! {
    #[test]
    fn postfix_is_post_order(
        expression in Expression::arbitrary(),
        stack_capacity in 0usize..4
    ) {
        let source = expression.to_string();
        let nodes = convert_with(&source, &Config::new(0, 1, stack_capacity))?;

        prop_assert!(nodes
            .iter()
            .all(|node| matches!(node, Node::Literal(..) | Node::Operator(..))));

        expression.assert(nodes.as_slice())?;
    }

    #[test]
    fn redundant_parentheses_change_nothing(expression in Expression::arbitrary()) {
        let bare = convert_with(&expression.to_string(), &Config::default())?;
        let wrapped = convert_with(&format!("(({expression}))"), &Config::default())?;

        prop_assert_eq!(bare, wrapped);
    }
}
