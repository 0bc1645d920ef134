use std::{iter::Peekable, ops::Range};

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Spanned, tokenize},
        parser::binary::parse_additive,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete expression from source text.
///
/// The text is tokenized, parsed from the lowest precedence level, and must
/// be consumed entirely. This does not apply the structural rules of
/// [`validate`](crate::interpreter::validator::validate); callers evaluating
/// user input run the validator first.
///
/// # Errors
/// Returns a `ParseError` for unlexable input, misplaced tokens, malformed
/// function calls, missing closing brackets or trailing tokens.
///
/// # Example
/// ```
/// use reckon::{ast::{BinaryOperator, Expr}, interpreter::parser::parse};
///
/// let expr = parse("1 + 2 * 3 - 4").unwrap();
/// let Expr::Chain { rest, .. } = expr else { panic!("expected a chain") };
///
/// let operators = rest.iter().map(|operation| operation.op).collect::<Vec<_>>();
/// assert_eq!(operators, [BinaryOperator::Add, BinaryOperator::Sub]);
/// ```
pub fn parse(source: &str) -> ParseResult<Expr> {
    let tokens = tokenize(source)?;
    let mut iter = tokens.iter().peekable();

    let parsed = parse_expression(&mut iter).and_then(|expr| match iter.next() {
        Some((token, span)) => Err(ParseError::UnexpectedToken { token:    token.to_string(),
                                                                 position: column(span), }),
        None => Ok(expr),
    });

    parsed.map_err(|e| match e {
        ParseError::UnexpectedEndOfInput { .. } => {
            ParseError::UnexpectedEndOfInput { position: source.len() + 1 }
        },
        other => other,
    })
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, addition and subtraction, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := additive`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, span)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned>
{
    parse_additive(tokens)
}

/// Converts a byte span into the 1-based column of its first character.
pub(crate) const fn column(span: &Range<usize>) -> usize {
    span.start + 1
}
