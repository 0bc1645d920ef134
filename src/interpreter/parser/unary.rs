use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    error::{ParseError, Rule},
    interpreter::{
        evaluator::function::core::is_reserved_identifier,
        lexer::{Spanned, Token},
        parser::core::{ParseResult, column, parse_expression},
    },
};

/// Parses a unary expression.
///
/// Supports the prefix operator `-` (numeric negation). A `-` reaches this
/// level only when it is the first token of an operand, that is at the start
/// of the input, after another operator or after `(`; everywhere else the
/// binary levels consume it as subtraction.
///
/// Unary operators are right-associative, so `--5` is parsed as `-(-5)`.
///
/// Grammar:
/// ```text
///     unary := "-" unary
///            | primary
/// ```
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned>
{
    if let Some((Token::Minus, span)) = tokens.peek() {
        let position = column(span);
        tokens.next();
        let expr = parse_unary(tokens)?;
        Ok(Expr::UnaryOp { op: UnaryOperator::Negate,
                           expr: Box::new(expr),
                           position })
    } else {
        parse_primary(tokens)
    }
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar:
/// - numeric literals
/// - variables
/// - function calls
/// - parenthesized expressions
///
/// Grammar:
/// ```text
///     primary := number
///              | identifier_or_function
///              | "(" expression? ")"
/// ```
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned>
{
    let peeked = tokens.peek()
                       .ok_or(ParseError::UnexpectedEndOfInput { position: 0 })?;

    match peeked {
        (Token::Number(value), span) => {
            let literal = Expr::Literal { value:    *value,
                                          position: column(span), };
            tokens.next();
            Ok(literal)
        },
        (Token::LParen, _) => parse_grouping(tokens),
        (Token::Identifier(_), _) => parse_identifier_or_function(tokens),
        (tok, span) => Err(ParseError::UnexpectedToken { token:    tok.to_string(),
                                                         position: column(span), }),
    }
}

/// Parses a parenthesized expression.
///
/// An empty pair of parentheses evaluates to `0`, the value of an empty flat
/// expression.
///
/// # Errors
/// - `UnbalancedBrackets` if the input ends before the closing `)`.
/// - `UnexpectedToken` if something other than `)` follows the inner
///   expression.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned>
{
    let Some((Token::LParen, open)) = tokens.next() else {
        return Err(ParseError::UnexpectedEndOfInput { position: 0 });
    };
    let position = column(open);

    if let Some((Token::RParen, _)) = tokens.peek() {
        tokens.next();
        return Ok(Expr::Literal { value: 0.0,
                                  position });
    }

    let expr = parse_expression(tokens)?;
    expect_closing_paren(tokens, position)?;
    Ok(expr)
}

/// Parses either a variable reference or a builtin function call.
///
/// Identifiers naming a builtin must be followed by `(` with nothing in
/// between, not even whitespace. Every other identifier is a variable; a
/// following `(` is then left for the caller to reject.
///
/// # Errors
/// - `MalformedFunctionCall` when a builtin name is not directly followed by
///   `(`.
/// - `InvalidExpression` with [`Rule::Empty`] for an empty argument such as
///   `sin()`.
/// - `UnbalancedBrackets` when the argument list is never closed.
fn parse_identifier_or_function<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned>
{
    let Some((Token::Identifier(name), name_span)) = tokens.next() else {
        return Err(ParseError::UnexpectedEndOfInput { position: 0 });
    };
    let position = column(name_span);

    if !is_reserved_identifier(name) {
        return Ok(Expr::Variable { name: name.clone(),
                                   position });
    }

    let open = match tokens.peek() {
        Some((Token::LParen, span)) if span.start == name_span.end => column(span),
        _ => {
            return Err(ParseError::MalformedFunctionCall { name: name.clone(),
                                                           position });
        },
    };
    tokens.next();

    if let Some((Token::RParen, span)) = tokens.peek() {
        return Err(ParseError::InvalidExpression { rule:     Rule::Empty,
                                                   position: column(span), });
    }

    let argument = parse_expression(tokens)?;
    expect_closing_paren(tokens, open)?;

    Ok(Expr::FunctionCall { name: name.clone(),
                            argument: Box::new(argument),
                            position })
}

/// Consumes the `)` that closes the bracket opened at column `open`.
fn expect_closing_paren<'a, I>(tokens: &mut Peekable<I>, open: usize) -> ParseResult<()>
    where I: Iterator<Item = &'a Spanned>
{
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(()),
        Some((tok, span)) => Err(ParseError::UnexpectedToken { token:    tok.to_string(),
                                                               position: column(span), }),
        None => Err(ParseError::UnbalancedBrackets { position: open }),
    }
}
