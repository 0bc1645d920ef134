use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr, Operation},
    interpreter::{
        lexer::{Spanned, Token},
        parser::{
            core::{ParseResult, column},
            unary::parse_unary,
        },
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with span information.
///
/// # Returns
/// An `Expr::Chain` holding every operand of the level, or the single
/// operand when no operator follows it.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned>
{
    parse_level(tokens, BinaryOperator::Add.precedence(), parse_multiplicative)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*` and `/`, so `8 / 2 * 2` is
/// `(8 / 2) * 2`.
///
/// The rule is: `multiplicative := unary (("*" | "/") unary)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned>
{
    parse_level(tokens, BinaryOperator::Mul.precedence(), parse_unary)
}

/// Collects a left-associative run of operators sharing one precedence level
/// into a single [`Expr::Chain`].
fn parse_level<'a, I>(tokens: &mut Peekable<I>,
                      precedence: u8,
                      parse_operand: impl Fn(&mut Peekable<I>) -> ParseResult<Expr>)
                      -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned>
{
    let first = parse_operand(tokens)?;
    let mut rest = Vec::new();

    while let Some((token, span)) = tokens.peek()
          && let Some(op) = token_to_binary_operator(token)
          && op.precedence() == precedence
    {
        let position = column(span);
        tokens.next();
        let operand = parse_operand(tokens)?;
        rest.push(Operation { op,
                              operand,
                              position });
    }

    if rest.is_empty() {
        return Ok(first);
    }
    Ok(Expr::Chain { position: first.position(),
                     first: Box::new(first),
                     rest })
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token is one of `+ - * /` and
/// `None` for all other tokens.
///
/// # Example
/// ```
/// use reckon::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}
