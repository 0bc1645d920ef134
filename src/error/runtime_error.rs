/// Represents all errors that can occur while evaluating an expression.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RuntimeError {
    /// The divisor of a `/` evaluated to exactly zero.
    #[error("Error at column {position}: Division by zero.")]
    DivisionByZero {
        /// The column of the `/` operator.
        position: usize,
    },
    /// `sqrt` was applied to a negative number.
    #[error("Error at column {position}: Cannot take the square root of negative number {value}.")]
    NegativeRoot {
        /// The negative argument.
        value:    f64,
        /// The column of the `sqrt` call.
        position: usize,
    },
    /// Called a function that is not a builtin.
    #[error("Error at column {position}: Unknown function '{name}'.")]
    UnknownFunction {
        /// The name of the function.
        name:     String,
        /// The column of the call.
        position: usize,
    },
    /// A variable has no bound value.
    #[error("Error at column {position}: Unknown variable '{name}'.")]
    UnknownVariable {
        /// The name of the variable.
        name:     String,
        /// The column of the variable.
        position: usize,
    },
}
