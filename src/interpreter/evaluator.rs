/// Core evaluation logic and the evaluator type.
///
/// Contains the staged evaluation pipeline and the arithmetic walk over a
/// fully reduced tree.
pub mod core;

/// Reduction stages.
///
/// Replaces function calls and then variables with numeric literals,
/// producing a new tree at each stage.
pub mod reduce;

/// Binary operator evaluation logic.
///
/// Implements the four arithmetic operators, including the division by zero
/// check.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation.
pub mod unary;

/// Function evaluation.
///
/// Holds the builtin function table and the builtin implementations.
pub mod function;
