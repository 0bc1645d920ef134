/// The evaluator module reduces and computes parsed expressions.
///
/// The evaluator replaces function calls and variables with numeric literals
/// in separate stages, then computes the remaining arithmetic. It reports
/// runtime errors such as division by zero or the square root of a negative
/// number.
pub mod evaluator;
/// The lexer module tokenizes expression text for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens:
/// numbers, identifiers, operators and parentheses, each with the byte range
/// it came from.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A recursive-descent parser with one function per precedence level. It
/// rejects malformed function calls and unclosed brackets.
pub mod parser;
/// Structural checks on the raw expression text.
///
/// Runs before lexing and rejects empty input, illegal characters,
/// unbalanced or overly deep parentheses and misplaced operators.
pub mod validator;
/// Variable bindings and variable discovery.
pub mod bindings;
/// The session type exposing the find, set and calculate workflow.
pub mod calculator;
