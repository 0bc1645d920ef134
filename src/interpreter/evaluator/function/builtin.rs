use crate::interpreter::evaluator::core::EvalResult;

/// Applies a real builtin function to its argument.
///
/// The generated functions take the evaluated argument and the column of the
/// call. Trigonometric functions are total on finite reals, so they never
/// fail.
///
/// # Example
/// ```
/// use reckon::interpreter::evaluator::function::builtin::sin;
///
/// let r = sin(std::f64::consts::FRAC_PI_2, 1).unwrap();
///
/// assert_eq!(r, 1.0);
/// ```
macro_rules! real_builtin {
    ($fname:ident, $real_fn:ident) => {
        #[allow(clippy::unnecessary_wraps)]
        pub fn $fname(x: f64, _position: usize) -> EvalResult<f64> {
            Ok(x.$real_fn())
        }
    };
}

real_builtin!(sin, sin);
real_builtin!(cos, cos);
real_builtin!(tan, tan);
