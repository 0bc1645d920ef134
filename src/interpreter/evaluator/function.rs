/// Trigonometric builtins.
///
/// `sin`, `cos` and `tan` on real arguments in radians.
pub mod builtin;
/// The `sqrt` (square root) function implementation.
///
/// Computes the principal square root and rejects negative arguments.
pub mod sqrt;

pub mod core;
