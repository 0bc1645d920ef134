use tracing::debug;

use crate::{ast::Expr, error::RuntimeError, interpreter::bindings::Bindings};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates parsed expressions against one set of variable bindings.
///
/// The evaluator only reads the bindings. Recursive evaluation of function
/// arguments shares the same bindings, and independent evaluators can run on
/// different threads as long as each one borrows its own bindings.
pub struct Evaluator<'a> {
    bindings: &'a Bindings,
}

impl<'a> Evaluator<'a> {
    /// Creates an evaluator reading variable values from `bindings`.
    #[must_use]
    pub const fn new(bindings: &'a Bindings) -> Self {
        Self { bindings }
    }

    /// The bindings variables are resolved against.
    #[must_use]
    pub const fn bindings(&self) -> &'a Bindings {
        self.bindings
    }

    /// Evaluates an expression tree to a single number.
    ///
    /// The tree goes through the reduction stages in order: every function
    /// call is replaced by its value, then every variable by its binding,
    /// and the remaining arithmetic is computed. Each stage is logged at
    /// `debug` level.
    ///
    /// # Errors
    /// Returns the first `RuntimeError` raised by any stage, unchanged.
    ///
    /// # Example
    /// ```
    /// use reckon::{
    ///     interpreter::{bindings::Bindings, evaluator::core::Evaluator, parser::parse},
    /// };
    ///
    /// let mut bindings = Bindings::new();
    /// bindings.set("r", 3.0);
    ///
    /// let expr = parse("sqrt(r * r + 16) - 1").unwrap();
    /// assert_eq!(Evaluator::new(&bindings).evaluate(expr).unwrap(), 4.0);
    /// ```
    pub fn evaluate(&self, expr: Expr) -> EvalResult<f64> {
        debug!(expression = %expr, "evaluating");

        let expr = self.reduce_functions(expr)?;
        debug!(expression = %expr, "after functions");

        let expr = self.resolve_variables(expr)?;
        debug!(expression = %expr, "after variables");

        let result = Self::eval_arithmetic(&expr)?;
        debug!(result, "evaluated");
        Ok(result)
    }

    /// Computes the value of a tree.
    ///
    /// Precedence is already encoded in the tree shape: a chain of `*` and
    /// `/` is an operand of the surrounding `+`/`-` chain, and each chain is
    /// folded left to right. Calls and variables are still handled so the
    /// walk is total, even though the reduction stages have normally removed
    /// them.
    ///
    /// # Errors
    /// - `DivisionByZero` when a divisor is exactly zero.
    /// - `UnknownVariable` for a variable without a binding.
    /// - Errors raised by builtin functions.
    pub fn eval_arithmetic(expr: &Expr) -> EvalResult<f64> {
        match expr {
            Expr::Literal { value, .. } => Ok(*value),
            Expr::UnaryOp { op, expr, .. } => Ok(Self::eval_unary(*op, Self::eval_arithmetic(expr)?)),
            Expr::Chain { first, rest, .. } => {
                let init = Self::eval_arithmetic(first)?;
                rest.iter()
                    .try_fold(init, |acc, operation| -> EvalResult<f64> {
                        let operand = Self::eval_arithmetic(&operation.operand)?;
                        Self::eval_scalar_op(operation.op, acc, operand, operation.position)
                    })
            },
            Expr::FunctionCall { name,
                                 argument,
                                 position, } => {
                Self::eval_function(name, Self::eval_arithmetic(argument)?, *position)
            },
            Expr::Variable { name, position } => {
                Err(RuntimeError::UnknownVariable { name:     name.clone(),
                                                    position: *position, })
            },
        }
    }
}
