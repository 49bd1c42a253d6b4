//! Contains the Shunting-Yard conversion of a token sequence into postfix order.

use log::debug;
use shunt_base::{arena::Chain, config::Config, stack::Stack};
use shunt_lexical::node::{Node, NodeRef, Operator};

use crate::{
    error::{Error, InternalError, MismatchedParen, Unmatched},
    precedence::compare,
};

/// Is an entry of the operator stack: the index of the token in the input sequence together with
/// its handle. Only operators and left parentheses are ever pushed.
type Pending = (usize, NodeRef);

/// Holds the state of a single conversion.
#[derive(Debug)]
struct Converter<'a> {
    nodes: &'a Chain<Node>,
    operators: Stack<Pending>,
    output: Stack<NodeRef>,
}

impl Converter<'_> {
    fn resolve(&self, index: usize, handle: NodeRef) -> Result<Node, Error> {
        self.nodes.get(handle).copied().ok_or_else(|| {
            InternalError {
                index,
                found: None,
            }
            .into()
        })
    }

    /// Moves operators from the operator stack to the output while they bind at least as tight
    /// as `incoming`, then pushes `incoming`.
    fn handle_operator(
        &mut self,
        index: usize,
        handle: NodeRef,
        incoming: Operator,
    ) -> Result<(), Error> {
        while let Some(&(top_index, top)) = self.operators.peek() {
            let top_operator = match self.resolve(top_index, top)? {
                Node::Operator(operator) => operator,
                Node::LeftParen => break,
                node => {
                    return Err(InternalError {
                        index: top_index,
                        found: Some(node.kind()),
                    }
                    .into())
                }
            };

            if !compare(top_operator, incoming).pops() {
                break;
            }

            self.operators.pop();
            self.output.push(top)?;
        }

        self.operators.push((index, handle))?;
        Ok(())
    }

    /// Moves operators to the output until the matching left parenthesis, which is discarded along
    /// with the right parenthesis itself.
    fn handle_right_paren(&mut self, index: usize) -> Result<(), Error> {
        loop {
            let Some((top_index, top)) = self.operators.pop() else {
                return Err(MismatchedParen {
                    index,
                    unmatched: Unmatched::RightParen,
                }
                .into());
            };

            if self.resolve(top_index, top)? == Node::LeftParen {
                return Ok(());
            }

            self.output.push(top)?;
        }
    }

    /// Moves every remaining operator to the output.
    fn drain(mut self) -> Result<Stack<NodeRef>, Error> {
        while let Some((index, top)) = self.operators.pop() {
            if self.resolve(index, top)? == Node::LeftParen {
                return Err(MismatchedParen {
                    index,
                    unmatched: Unmatched::LeftParen,
                }
                .into());
            }

            self.output.push(top)?;
        }

        Ok(self.output)
    }
}

/// Converts the given infix token sequence into postfix order.
///
/// Literals go straight to the output. An operator first moves to the output every stacked
/// operator that binds tighter, or equally tight when both are left-associative, up to the nearest
/// left parenthesis. A right parenthesis moves every stacked operator to the output down to the
/// matching left parenthesis; neither parenthesis is ever emitted. The returned stack holds the
/// postfix sequence from the bottom (first) to the top (last).
///
/// Both stacks start with the configured stack capacity and double when full. The input is not
/// checked for being a well-formed expression: `2+` converts to `2 +`.
///
/// # Errors
/// - [`Error::NoExpr`]: one of the stacks could not be created or grown.
/// - [`Error::MismatchedParen`]: a right parenthesis closes nothing, or a left parenthesis is
///   never closed.
/// - [`Error::InternalError`]: a node that tokenization never produces, such as
///   [`Node::Unknown`], or a handle that does not resolve in `nodes`.
pub fn to_postfix(
    tokens: &[NodeRef],
    nodes: &Chain<Node>,
    config: &Config,
) -> Result<Stack<NodeRef>, Error> {
    let config = config.resolved();

    let mut converter = Converter {
        nodes,
        operators: Stack::with_capacity(config.stack_capacity())?,
        output: Stack::with_capacity(config.stack_capacity())?,
    };

    for (index, token) in tokens.iter().copied().enumerate() {
        match converter.resolve(index, token)? {
            Node::Literal(..) => converter.output.push(token)?,
            Node::Operator(operator) => converter.handle_operator(index, token, operator)?,
            Node::LeftParen => converter.operators.push((index, token))?,
            Node::RightParen => converter.handle_right_paren(index)?,
            node @ Node::Unknown => {
                return Err(InternalError {
                    index,
                    found: Some(node.kind()),
                }
                .into())
            }
        }
    }

    let output = converter.drain()?;

    debug!(
        "{} tokens converted into {} postfix nodes",
        tokens.len(),
        output.len()
    );

    Ok(output)
}

#[cfg(test)]
mod tests;
