use tracing::trace;

use crate::{
    ast::{Expr, Operation},
    error::RuntimeError,
    interpreter::evaluator::{
        core::{EvalResult, Evaluator},
        function::core::BUILTIN_FUNCTIONS,
    },
};

impl Evaluator<'_> {
    /// Replaces every builtin call with its numeric result.
    ///
    /// Builtins are processed one name at a time in table order (`sin`,
    /// `cos`, `tan`, `sqrt`), each exhausted before the next. Within one name
    /// calls are found leftmost first, including calls nested inside the
    /// arguments of other functions. A matched call has its argument
    /// evaluated as a complete expression before the builtin is applied, so
    /// errors surface in the same order as a left-to-right textual scan per
    /// function name.
    ///
    /// # Errors
    /// Propagates any error raised while evaluating an argument or applying
    /// a builtin.
    pub fn reduce_functions(&self, expr: Expr) -> EvalResult<Expr> {
        BUILTIN_FUNCTIONS.iter()
                         .try_fold(expr, |expr, name| self.reduce_calls(expr, name))
    }

    fn reduce_calls(&self, expr: Expr, target: &str) -> EvalResult<Expr> {
        match expr {
            Expr::FunctionCall { name,
                                 argument,
                                 position, }
                if name == target =>
            {
                let argument = self.evaluate(*argument)?;
                let value = Self::eval_function(&name, argument, position)?;
                trace!(function = %name, argument, value, "applied function");
                Ok(Expr::Literal { value, position })
            },
            Expr::FunctionCall { name,
                                 argument,
                                 position, } => {
                Ok(Expr::FunctionCall { name,
                                        argument: Box::new(self.reduce_calls(*argument, target)?),
                                        position })
            },
            Expr::UnaryOp { op, expr, position } => {
                Ok(Expr::UnaryOp { op,
                                   expr: Box::new(self.reduce_calls(*expr, target)?),
                                   position })
            },
            Expr::Chain { first,
                          rest,
                          position, } => {
                Self::map_chain(*first, rest, position, |operand| self.reduce_calls(operand, target))
            },
            leaf @ (Expr::Literal { .. } | Expr::Variable { .. }) => Ok(leaf),
        }
    }

    /// Replaces every variable with a literal holding its bound value.
    ///
    /// Matching is by whole identifier, so binding `id` never touches a
    /// variable called `width`.
    ///
    /// # Errors
    /// `UnknownVariable` for the first variable, left to right, that has no
    /// binding.
    pub fn resolve_variables(&self, expr: Expr) -> EvalResult<Expr> {
        match expr {
            Expr::Variable { name, position } => match self.bindings().get(&name) {
                Some(value) => Ok(Expr::Literal { value, position }),
                None => Err(RuntimeError::UnknownVariable { name, position }),
            },
            Expr::FunctionCall { name,
                                 argument,
                                 position, } => {
                Ok(Expr::FunctionCall { name,
                                        argument: Box::new(self.resolve_variables(*argument)?),
                                        position })
            },
            Expr::UnaryOp { op, expr, position } => {
                Ok(Expr::UnaryOp { op,
                                   expr: Box::new(self.resolve_variables(*expr)?),
                                   position })
            },
            Expr::Chain { first,
                          rest,
                          position, } => {
                Self::map_chain(*first, rest, position, |operand| self.resolve_variables(operand))
            },
            literal @ Expr::Literal { .. } => Ok(literal),
        }
    }

    /// Rebuilds a chain with `reduce` applied to every operand, left to
    /// right, stopping at the first error.
    fn map_chain(first: Expr,
                 rest: Vec<Operation>,
                 position: usize,
                 reduce: impl Fn(Expr) -> EvalResult<Expr>)
                 -> EvalResult<Expr> {
        let first = reduce(first)?;
        let rest = rest.into_iter()
                       .map(|operation| -> EvalResult<Operation> {
                           Ok(Operation { operand: reduce(operation.operand)?,
                                          ..operation })
                       })
                       .collect::<EvalResult<Vec<_>>>()?;

        Ok(Expr::Chain { first: Box::new(first),
                         rest,
                         position })
    }
}
