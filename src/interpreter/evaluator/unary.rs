use crate::{ast::UnaryOperator, interpreter::evaluator::core::Evaluator};

impl Evaluator<'_> {
    /// Evaluates a unary operation on a value.
    ///
    /// # Example
    /// ```
    /// use reckon::{ast::UnaryOperator, interpreter::evaluator::core::Evaluator};
    ///
    /// assert_eq!(Evaluator::eval_unary(UnaryOperator::Negate, 5.0), -5.0);
    /// ```
    #[must_use]
    pub const fn eval_unary(op: UnaryOperator, value: f64) -> f64 {
        match op {
            UnaryOperator::Negate => -value,
        }
    }
}
