use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::evaluator::core::{EvalResult, Evaluator},
};

impl Evaluator<'_> {
    /// Evaluates a scalar arithmetic operation.
    ///
    /// Division by zero is checked explicitly: a divisor equal to `0.0`
    /// (which includes `-0.0`) is an error rather than an infinity.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `position`: Column of the operator for error reporting.
    ///
    /// # Example
    /// ```
    /// use reckon::{ast::BinaryOperator, error::RuntimeError, interpreter::evaluator::core::Evaluator};
    ///
    /// let result = Evaluator::eval_scalar_op(BinaryOperator::Mul, 1.5, 2.0, 1).unwrap();
    /// assert_eq!(result, 3.0);
    ///
    /// let err = Evaluator::eval_scalar_op(BinaryOperator::Div, 5.0, 0.0, 3).unwrap_err();
    /// assert_eq!(err, RuntimeError::DivisionByZero { position: 3 });
    /// ```
    pub fn eval_scalar_op(op: BinaryOperator,
                          left: f64,
                          right: f64,
                          position: usize)
                          -> EvalResult<f64> {
        use BinaryOperator::{Add, Div, Mul, Sub};

        Ok(match op {
               Add => left + right,
               Sub => left - right,
               Mul => left * right,
               Div => {
                   if right == 0.0 {
                       return Err(RuntimeError::DivisionByZero { position });
                   }
                   left / right
               },
           })
    }
}
