//! This crate wires the tokenizer and the postfix converter together behind a command-line
//! interface.

use std::process::ExitCode;

pub use clap::Parser;
use log::debug;
use shunt_base::{
    arena::Chain,
    config::Config,
    log::{Message, Severity, SourceCodeDisplay},
};
use shunt_lexical::{
    error as lexical,
    node::Node,
    tokenizer::{encode_next, tokenize},
};
use shunt_syntax::{
    error::{self as syntax, Unmatched},
    postfix::to_postfix,
};

/// The arguments to the program.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, clap::Parser)]
#[clap(
    name = "shunt",
    about = "Converts an infix arithmetic expression into postfix order."
)]
pub struct Argument {
    /// The expression to convert, written without whitespace.
    #[clap(allow_hyphen_values = true)]
    pub expression: String,

    /// The number of nodes each arena can hold; zero selects the default.
    #[clap(long = "arena-capacity", default_value_t = 0)]
    pub arena_capacity: usize,

    /// The number of arenas the tokenizer may draw nodes from.
    #[clap(long = "arena-count", default_value_t = 1)]
    pub arena_count: usize,

    /// The initial capacity of the conversion stacks; zero selects the default.
    #[clap(long = "stack-capacity", default_value_t = 0)]
    pub stack_capacity: usize,

    /// Prints out the whole postfix output stack instead of one node per line.
    #[clap(long = "dump-stack")]
    pub dump_stack: bool,
}

impl Argument {
    /// Gets the [`Config`] described by the capacity flags.
    #[must_use]
    pub fn config(&self) -> Config {
        Config::new(self.arena_capacity, self.arena_count, self.stack_capacity)
    }
}

/// Gets the byte offset of the token with the given index.
///
/// Tokens are contiguous, so the offset is found by encoding the tokens preceding it again.
fn token_offset(source: &str, index: usize) -> usize {
    let mut node = Node::default();
    let mut cursor = 0;

    for _ in 0..index {
        let next = encode_next(&mut node, source, cursor);
        if next == cursor {
            break;
        }

        cursor = next;
    }

    cursor
}

/// Renders a tokenization failure together with the location it happened at.
fn describe_lexical_error(source: &str, error: &lexical::Error) -> String {
    let position = error.position();

    match error {
        lexical::Error::BadSymbol(..) => format!(
            "{error} starting at \"{}\"\n{}",
            &source[position..],
            SourceCodeDisplay::new(source, position, Some("no token starts here"))
        ),
        lexical::Error::NoNode(..) => format!(
            "{error}\n{}",
            SourceCodeDisplay::new(source, position, Some("every arena is exhausted"))
        ),
        lexical::Error::NoExpr(..) => format!(
            "{error}\n{}",
            SourceCodeDisplay::new(source, position, None::<&str>)
        ),
    }
}

/// Renders a conversion failure together with the location it happened at.
fn describe_syntax_error(source: &str, error: &syntax::Error) -> String {
    match error {
        syntax::Error::MismatchedParen(mismatched) => {
            let help = match mismatched.unmatched {
                Unmatched::LeftParen => "this parenthesis is never closed",
                Unmatched::RightParen => "this parenthesis closes nothing",
            };

            format!(
                "{error}\n{}",
                SourceCodeDisplay::new(source, token_offset(source, mismatched.index), Some(help))
            )
        }
        syntax::Error::NoExpr(..) | syntax::Error::InternalError(..) => error.to_string(),
    }
}

/// Tokenizes and converts the expression of the given arguments.
///
/// Returns the rendered postfix output, or the rendered diagnostic of the first failure.
///
/// # Errors
/// Any failure of the arena creation, the tokenization or the conversion, rendered for the user.
pub fn convert(argument: &Argument) -> Result<String, String> {
    let source = argument.expression.as_str();
    let config = argument.config().resolved();

    debug!("converting {source:?} with {config:?}");

    let mut chain = Chain::<Node>::from_config(&config)
        .map_err(|error| Message::new(Severity::Error, error).to_string())?;

    let tokens = tokenize(source, &mut chain)
        .map_err(|error| describe_lexical_error(source, error.error()))?;

    let postfix = to_postfix(&tokens, &chain, &config)
        .map_err(|error| describe_syntax_error(source, &error))?;

    if argument.dump_stack {
        return Ok(postfix.dump(|handle| chain[*handle]).to_string());
    }

    Ok(postfix
        .iter()
        .map(|handle| format!("{}\n", chain[*handle]))
        .collect())
}

/// Runs the program with the given arguments.
pub fn run(argument: &Argument) -> ExitCode {
    match convert(argument) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(report) => {
            eprintln!("{report}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests;
