/// A structural rule enforced on the raw expression text.
///
/// Rules are checked in declaration order and the first one that fails is
/// reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// The input is empty or consists only of whitespace.
    Empty,
    /// A character outside of digits, letters, `+ - * / ( ) .` was found.
    IllegalCharacter(char),
    /// A `)` appeared without an open `(`, or a `(` was never closed.
    UnbalancedParentheses,
    /// Parentheses are nested deeper than the configured limit.
    NestingTooDeep {
        /// The maximum permitted depth.
        limit: usize,
    },
    /// The expression starts with an operator other than `-`.
    LeadingOperator(char),
    /// The expression ends with an operator.
    TrailingOperator(char),
    /// Two operators follow each other and the pair is not `-` before a digit.
    AdjacentOperators(char, char),
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "expression is empty"),
            Self::IllegalCharacter(c) => write!(f, "illegal character '{c}'"),
            Self::UnbalancedParentheses => write!(f, "unbalanced parentheses"),
            Self::NestingTooDeep { limit } => {
                write!(f, "parentheses nested deeper than {limit} levels")
            },
            Self::LeadingOperator(c) => write!(f, "expression cannot start with '{c}'"),
            Self::TrailingOperator(c) => write!(f, "expression cannot end with '{c}'"),
            Self::AdjacentOperators(a, b) => write!(f, "operators '{a}{b}' cannot follow each other"),
        }
    }
}

/// Represents all errors that can occur during validation, lexing or parsing.
///
/// Positions are 1-based columns into the text handed to the calculator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The raw text broke one of the structural rules.
    #[error("Error at column {position}: Invalid expression: {rule}.")]
    InvalidExpression {
        /// The rule that failed.
        rule:     Rule,
        /// The column where the violation was detected.
        position: usize,
    },
    /// Found a token that cannot appear at this point of an expression.
    #[error("Error at column {position}: Unexpected token: {token}.")]
    UnexpectedToken {
        /// The offending source text.
        token:    String,
        /// The column of the token.
        position: usize,
    },
    /// The expression ended while an operand was still expected.
    #[error("Error at column {position}: Unexpected end of input.")]
    UnexpectedEndOfInput {
        /// The column just past the end of the input.
        position: usize,
    },
    /// A function name was not immediately followed by `(`.
    #[error("Error at column {position}: Malformed call of function '{name}', expected '(' right after the name.")]
    MalformedFunctionCall {
        /// The function name.
        name:     String,
        /// The column of the function name.
        position: usize,
    },
    /// No matching `)` was found for an opening bracket.
    #[error("Error at column {position}: Expected closing parenthesis ')' but none found.")]
    UnbalancedBrackets {
        /// The column of the unmatched `(`.
        position: usize,
    },
}
