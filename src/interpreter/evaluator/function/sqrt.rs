use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Computes the principal square root of `x`.
///
/// Negative arguments have no real square root and produce a `NegativeRoot`
/// error carrying the argument.
///
/// # Parameters
/// - `x`: The evaluated argument.
/// - `position`: Column of the call for error reporting.
///
/// # Example
/// ```
/// use reckon::{error::RuntimeError, interpreter::evaluator::function::sqrt::sqrt};
///
/// assert_eq!(sqrt(16.0, 1).unwrap(), 4.0);
///
/// let err = sqrt(-1.0, 3).unwrap_err();
/// assert_eq!(err, RuntimeError::NegativeRoot { value:    -1.0,
///                                              position: 3, });
/// ```
pub fn sqrt(x: f64, position: usize) -> EvalResult<f64> {
    if x < 0.0 {
        return Err(RuntimeError::NegativeRoot { value: x,
                                                position });
    }
    Ok(x.sqrt())
}
