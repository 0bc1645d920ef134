use crate::{
    error::RuntimeError,
    interpreter::evaluator::{
        core::{EvalResult, Evaluator},
        function::{builtin, sqrt},
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives its evaluated argument and the column of the call.
type BuiltinFn = fn(f64, usize) -> EvalResult<f64>;

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides a string name and a function pointer implementing the
/// builtin. The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
///
/// Entry order is significant: the function reducer exhausts the builtins in
/// exactly this order.
macro_rules! builtin_functions {
    (
        $(
            $name:literal => $func:expr
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name: &'static str,
            func: BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, func: $func },
            )*
        ];
        /// Names reserved for builtins, in reduction order.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "sin"  => builtin::sin,
    "cos"  => builtin::cos,
    "tan"  => builtin::tan,
    "sqrt" => sqrt::sqrt,
}

impl Evaluator<'_> {
    /// Applies the builtin called `name` to an evaluated argument.
    ///
    /// # Errors
    /// - `UnknownFunction` if `name` is not a builtin.
    /// - Any error raised by the builtin itself, such as `NegativeRoot`.
    pub(crate) fn eval_function(name: &str, argument: f64, position: usize) -> EvalResult<f64> {
        let builtin = BUILTIN_TABLE.iter()
                                   .find(|b| b.name == name)
                                   .ok_or_else(|| RuntimeError::UnknownFunction { name:
                                                                                      name.to_string(),
                                                                                  position })?;
        (builtin.func)(argument, position)
    }
}

/// Returns `true` if `name` is reserved for a builtin and can never be a
/// variable.
///
/// # Example
/// ```
/// use reckon::interpreter::evaluator::function::core::is_reserved_identifier;
///
/// assert!(is_reserved_identifier("sqrt"));
/// assert!(!is_reserved_identifier("sqrtx"));
/// ```
#[must_use]
pub fn is_reserved_identifier(name: &str) -> bool {
    BUILTIN_FUNCTIONS.contains(&name)
}
