/// Core parsing entry points.
///
/// Contains the top-level `parse` function, the expression entry point and
/// the shared result type.
pub mod core;

/// Binary operator parsing.
///
/// Implements the additive and multiplicative precedence levels.
pub mod binary;

/// Unary and primary expression parsing.
///
/// Handles negation, literals, variables, parenthesized groups and function
/// calls.
pub mod unary;

pub use self::core::parse;
