/// Parsing errors.
///
/// Defines all error types that can occur while validating, lexing and
/// parsing an expression. Parse errors include illegal characters, unbalanced
/// brackets, misplaced operators and malformed function calls, all detected
/// before any arithmetic is attempted.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while reducing and evaluating
/// a parsed expression, such as division by zero or the square root of a
/// negative number.
pub mod runtime_error;

pub use parse_error::{ParseError, Rule};
pub use runtime_error::RuntimeError;

/// Any failure of a `calculate` call.
///
/// Both phases propagate their errors unchanged; this type only tells them
/// apart so callers can match on the phase as well as the kind.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The expression was rejected before evaluation started.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Evaluation of a well-formed expression failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
