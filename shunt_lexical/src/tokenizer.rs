//! Contains the logic encoding an expression string into [`Node`]s.

use getset::Getters;
use log::debug;
use shunt_base::arena::Chain;

use crate::{
    error::{BadSymbol, Error, NoExpr, NoNode},
    node::{Node, Number, Operator},
    token_buffer::TokenBuffer,
};

/// Is the error returned by [`tokenize`]: the failure itself together with the tokens committed
/// before it happened.
#[derive(Debug, Clone, PartialEq, Eq, Getters, thiserror::Error)]
#[error("{error}")]
pub struct TokenizeError {
    /// Gets the failure that stopped the tokenization.
    #[get = "pub"]
    error: Error,

    /// Gets the tokens committed before the failure, in source order.
    #[get = "pub"]
    committed: TokenBuffer,
}

impl TokenizeError {
    /// Dissolves this struct into a tuple of its components.
    #[must_use]
    pub fn dissolve(self) -> (Error, TokenBuffer) { (self.error, self.committed) }
}

/// Counts the ASCII digits starting at the given byte offset.
fn count_digits(bytes: &[u8], start: usize) -> usize {
    bytes
        .get(start..)
        .map_or(0, |rest| rest.iter().take_while(|byte| byte.is_ascii_digit()).count())
}

/// Counts the ASCII hexadecimal digits starting at the given byte offset.
fn count_hex_digits(bytes: &[u8], start: usize) -> usize {
    bytes.get(start..).map_or(0, |rest| {
        rest.iter()
            .take_while(|byte| byte.is_ascii_hexdigit())
            .count()
    })
}

/// Scans the longest floating-point literal starting at `cursor`.
///
/// Three forms are accepted, tried in this order:
/// - the words `infinity`, `inf` and `nan`, in any case;
/// - hexadecimal literals `0x hexdigits [ '.' [hexdigits] ] [ ('p' | 'P') [sign] digits ]`, with
///   at least one hexadecimal digit;
/// - decimal literals `digits [ '.' [digits] ] [ exponent ]` or `'.' digits [ exponent ]`, where
///   `exponent` is `('e' | 'E') [ '+' | '-' ] digits`.
///
/// An exponent marker that is not followed by digits is not part of the literal. Returns the value
/// and the offset right after the literal, or [`None`] if nothing could be consumed or a numeric
/// value overflows.
fn scan_literal(source: &str, cursor: usize) -> Option<(Number, usize)> {
    if let Some(word) = scan_word(source, cursor) {
        return Some(word);
    }

    let (value, end) =
        scan_hexadecimal(source, cursor).or_else(|| scan_decimal(source, cursor))?;

    // out of range literals are rejected rather than silently saturated
    value.is_finite().then_some((value, end))
}

/// Scans one of the special value words.
fn scan_word(source: &str, cursor: usize) -> Option<(Number, usize)> {
    const WORDS: [(&str, Number); 3] = [
        ("infinity", Number::INFINITY),
        ("inf", Number::INFINITY),
        ("nan", Number::NAN),
    ];

    let rest = source.get(cursor..)?;

    WORDS.iter().find_map(|(word, value)| {
        rest.get(..word.len())
            .filter(|head| head.eq_ignore_ascii_case(word))
            .map(|_| (*value, cursor + word.len()))
    })
}

/// Scans a hexadecimal literal with an optional binary exponent.
///
/// The value may be infinite; [`scan_literal`] rejects it.
fn scan_hexadecimal(source: &str, cursor: usize) -> Option<(Number, usize)> {
    let bytes = source.as_bytes();

    if bytes.get(cursor) != Some(&b'0') || !matches!(bytes.get(cursor + 1), Some(b'x' | b'X')) {
        return None;
    }

    let integer_start = cursor + 2;
    let integer_digits = count_hex_digits(bytes, integer_start);
    let mut end = integer_start + integer_digits;

    let mut fraction = &bytes[end..end];
    if bytes.get(end) == Some(&b'.') {
        let fraction_digits = count_hex_digits(bytes, end + 1);
        fraction = &bytes[end + 1..end + 1 + fraction_digits];
        end += 1 + fraction_digits;
    }

    // `0x` alone is the literal `0` followed by whatever comes next
    if integer_digits + fraction.len() == 0 {
        return None;
    }

    let hex_value = |byte: &u8| Number::from(char::from(*byte).to_digit(16).unwrap_or_default());

    let mut value = bytes[integer_start..integer_start + integer_digits]
        .iter()
        .fold(0.0, |value: Number, byte| value.mul_add(16.0, hex_value(byte)));

    let mut scale = 1.0 / 16.0;
    for byte in fraction {
        value = hex_value(byte).mul_add(scale, value);
        scale /= 16.0;
    }

    let mut exponent = 0_i32;
    if matches!(bytes.get(end), Some(b'p' | b'P')) {
        let mut start = end + 1;
        let negative = bytes.get(start) == Some(&b'-');
        if matches!(bytes.get(start), Some(b'+' | b'-')) {
            start += 1;
        }

        let exponent_digits = count_digits(bytes, start);
        if exponent_digits > 0 {
            let magnitude = bytes[start..start + exponent_digits]
                .iter()
                .fold(0_i32, |magnitude, byte| {
                    magnitude
                        .saturating_mul(10)
                        .saturating_add(i32::from(*byte - b'0'))
                });

            exponent = if negative { -magnitude } else { magnitude };
            end = start + exponent_digits;
        }
    }

    // scaled in three steps so that no single factor overflows on its own
    let exponent = exponent.clamp(-2100, 2100);
    let third = exponent / 3;
    let value = value
        * Number::powi(2.0, third)
        * Number::powi(2.0, third)
        * Number::powi(2.0, exponent - 2 * third);

    Some((value, end))
}

/// Scans a decimal literal with an optional decimal exponent.
fn scan_decimal(source: &str, cursor: usize) -> Option<(Number, usize)> {
    let bytes = source.as_bytes();

    let integer_digits = count_digits(bytes, cursor);
    let mut end = cursor + integer_digits;

    if bytes.get(end) == Some(&b'.') {
        let fraction_digits = count_digits(bytes, end + 1);

        if integer_digits + fraction_digits > 0 {
            end += 1 + fraction_digits;
        }
    }

    if end == cursor {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent = end + 1;
        if matches!(bytes.get(exponent), Some(b'+' | b'-')) {
            exponent += 1;
        }

        let exponent_digits = count_digits(bytes, exponent);
        if exponent_digits > 0 {
            end = exponent + exponent_digits;
        }
    }

    let value = source[cursor..end].parse::<Number>().ok()?;

    Some((value, end))
}

/// Encodes the token starting at `cursor` into the given node and returns the offset right after
/// it.
///
/// The node is reset to [`Node::Unknown`] first. Parentheses and operators are a single character
/// long; anything else is attempted as a literal. If no token starts at `cursor`, the node stays
/// [`Node::Unknown`] and `cursor` is returned unchanged.
#[must_use]
pub fn encode_next(node: &mut Node, source: &str, cursor: usize) -> usize {
    *node = Node::Unknown;

    let Some(character) = source.get(cursor..).and_then(|rest| rest.chars().next()) else {
        return cursor;
    };

    match character {
        '(' => {
            *node = Node::LeftParen;
            cursor + 1
        }
        ')' => {
            *node = Node::RightParen;
            cursor + 1
        }
        character => {
            if let Some(operator) = Operator::from_symbol(character) {
                *node = Node::Operator(operator);
                cursor + 1
            } else if let Some((value, end)) = scan_literal(source, cursor) {
                *node = Node::Literal(value);
                end
            } else {
                cursor
            }
        }
    }
}

/// Tokenizes the given expression, pulling one node per token from the chain.
///
/// The whole expression must be made of tokens: there is no whitespace skipping, so a space is an
/// unexpected symbol like any other unrecognised character.
///
/// # Errors
/// The first failure stops the tokenization; the returned [`TokenizeError`] carries it together
/// with the tokens committed so far.
/// - [`Error::NoNode`]: every arena of the chain is exhausted.
/// - [`Error::BadSymbol`]: no token starts at the current position.
/// - [`Error::NoExpr`]: the token buffer could not grow.
pub fn tokenize(source: &str, chain: &mut Chain<Node>) -> Result<TokenBuffer, TokenizeError> {
    let mut committed = TokenBuffer::new();
    let mut cursor = 0;

    while cursor < source.len() {
        match next_token(source, cursor, chain, &mut committed) {
            Ok(next) => cursor = next,
            Err(error) => {
                debug!(
                    "expression tokenised with faults: {} nodes committed, stopped at byte {cursor}",
                    committed.len()
                );

                return Err(TokenizeError { error, committed });
            }
        }
    }

    debug!("expression tokenised into {} nodes", committed.len());

    Ok(committed)
}

/// Acquires, encodes and commits the token starting at `cursor`.
fn next_token(
    source: &str,
    cursor: usize,
    chain: &mut Chain<Node>,
    committed: &mut TokenBuffer,
) -> Result<usize, Error> {
    let handle = chain.acquire().ok_or(NoNode { position: cursor })?;

    let next = encode_next(&mut chain[handle], source, cursor);
    if next == cursor {
        return Err(BadSymbol {
            position: cursor,
            symbol: source[cursor..].chars().next().unwrap_or_default(),
        }
        .into());
    }

    committed
        .push(handle)
        .map_err(|source| NoExpr {
            position: cursor,
            source,
        })?;

    Ok(next)
}
