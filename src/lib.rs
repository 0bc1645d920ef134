//! # reckon
//!
//! reckon is an arithmetic expression calculator written in Rust.
//! It validates, parses and evaluates expressions built from decimal numbers,
//! the operators `+ - * /`, parentheses, the functions `sin`, `cos`, `tan`
//! and `sqrt`, and named variables whose values are supplied by the caller.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::{
    config::Config,
    error::Error,
    interpreter::{bindings::Bindings, evaluator::core::Evaluator, parser::parse, validator::validate},
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the operator types that represent
/// an expression as a tree. The AST is built by the parser, rewritten by the
/// reduction stages and finally computed by the evaluator.
///
/// # Responsibilities
/// - Defines the expression node types.
/// - Attaches source columns to every node for error reporting.
/// - Prints trees back as expression text for diagnostics.
pub mod ast;
/// Settings for the calculator and the interactive session.
pub mod config;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while validating,
/// parsing or evaluating an expression. Every error carries the column it
/// refers to.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (validation, parsing,
///   evaluation).
/// - Names the structural rule that rejected an expression.
/// - Integrates with `std::error::Error` for reporting.
pub mod error;
/// Orchestrates the entire process of evaluation.
///
/// This module ties together validation, lexing, parsing, variable bindings
/// and evaluation, and exposes the [`Calculator`] session type.
///
/// # Responsibilities
/// - Coordinates all core components: validator, lexer, parser and
///   evaluator.
/// - Discovers variables and holds their values.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// The interactive read-evaluate-print loop.
pub mod repl;

pub use crate::interpreter::calculator::Calculator;

/// Evaluates `source` with the given bindings and the default configuration.
///
/// # Errors
/// Returns an error if validation, parsing or evaluation fails.
///
/// # Examples
/// ```
/// use reckon::{calculate, interpreter::bindings::Bindings};
///
/// let mut bindings = Bindings::new();
/// bindings.set("x", 5.0);
/// bindings.set("y", 3.0);
///
/// assert_eq!(calculate("x + y", &bindings).unwrap(), 8.0);
/// assert_eq!(calculate("(2 + 3 * 4) / (5 - 1) + sqrt(9)", &bindings).unwrap(), 6.5);
///
/// // Division by zero is an error, not an infinity.
/// assert!(calculate("5 / 0", &bindings).is_err());
/// ```
pub fn calculate(source: &str, bindings: &Bindings) -> Result<f64, Error> {
    calculate_with(source, bindings, &Config::default())
}

/// Evaluates `source` with the given bindings and configuration.
///
/// The text is validated first; nothing is parsed or computed unless it
/// passes. The resulting tree is then evaluated by an [`Evaluator`] reading
/// `bindings`.
///
/// # Errors
/// Returns [`Error::Parse`] if the text is rejected and [`Error::Runtime`]
/// if evaluation fails.
pub fn calculate_with(source: &str, bindings: &Bindings, config: &Config) -> Result<f64, Error> {
    debug!(source, "calculating");

    validate(source, config.max_depth)?;
    let expr = parse(source)?;

    Ok(Evaluator::new(bindings).evaluate(expr)?)
}
