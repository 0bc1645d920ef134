use std::ops::Range;

use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in an arithmetic expression.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Function names are lexed as ordinary identifiers; the parser decides
/// whether an identifier names a builtin or a variable.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Numeric literal tokens, such as `3.14`, `.5`, `2.` or `42`.
    #[regex(r"[0-9]+(\.[0-9]*)?", parse_number)]
    #[regex(r"\.[0-9]+", parse_number)]
    Number(f64),
    /// Identifier tokens; a maximal run of letters such as `x` or `sqrt`.
    #[regex(r"[a-zA-Z]+", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Whitespace.
    #[regex(r"[ \t\n\x0B\x0C\r]+", logos::skip)]
    Ignored,
}

/// A token together with the byte range it was read from.
pub type Spanned = (Token, Range<usize>);

/// Parses a numeric literal from the current token slice.
///
/// # Returns
/// - `Some(f64)`: The parsed value.
/// - `None`: If the slice is not a valid number.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Splits `source` into spanned tokens.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` for the first slice that does not
/// form a token, such as a lone `.`.
///
/// # Example
/// ```
/// use reckon::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("2 * x").unwrap();
/// assert_eq!(tokens[1], (Token::Star, 2..3));
/// assert_eq!(tokens[2], (Token::Identifier("x".to_string()), 4..5));
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Spanned>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.span()));
        } else {
            return Err(ParseError::UnexpectedToken { token:    lexer.slice().to_string(),
                                                     position: lexer.span().start + 1, });
        }
    }

    Ok(tokens)
}

/// Collects the identifiers of `source` in order of first appearance.
///
/// Unlike [`tokenize`], slices that do not lex are skipped, so this also
/// works on text that would fail validation.
#[must_use]
pub fn identifiers(source: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();

    for token in Token::lexer(source) {
        if let Ok(Token::Identifier(name)) = token
           && !names.contains(&name)
        {
            names.push(name);
        }
    }

    names
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Ignored => Ok(()),
        }
    }
}
