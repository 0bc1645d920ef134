use std::collections::HashMap;

use crate::interpreter::{evaluator::function::core::is_reserved_identifier, lexer::identifiers};

/// Placeholder value given to a variable found by [`Bindings::discover`].
pub const PLACEHOLDER: f64 = 0.0;

/// Variable values for one evaluation session.
///
/// Names keep the order in which they were first discovered or set, which is
/// the order an interactive caller should ask for their values in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bindings {
    order:  Vec<String>,
    values: HashMap<String, f64>,
}

impl Bindings {
    /// Creates empty bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Finds the variables used in `source`.
    ///
    /// Scans left to right; every maximal run of letters is one identifier.
    /// Builtin function names are skipped and every other identifier is bound
    /// to [`PLACEHOLDER`]. Text that would not pass validation is still
    /// scanned.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::bindings::Bindings;
    ///
    /// let bindings = Bindings::discover("sin(x) + cos(y) * x");
    /// assert_eq!(bindings.names().collect::<Vec<_>>(), ["x", "y"]);
    /// assert_eq!(bindings.get("y"), Some(0.0));
    /// ```
    #[must_use]
    pub fn discover(source: &str) -> Self {
        let mut bindings = Self::new();
        for name in identifiers(source).into_iter()
                                       .filter(|name| !is_reserved_identifier(name))
        {
            bindings.set(name, PLACEHOLDER);
        }
        bindings
    }

    /// Binds `name` to `value`, replacing any earlier value.
    pub fn set(&mut self, name: impl Into<String>, value: f64) {
        let name = name.into();
        if !self.values.contains_key(&name) {
            self.order.push(name.clone());
        }
        self.values.insert(name, value);
    }

    /// Returns the value bound to `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    /// Iterates over the bound names in discovery order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// The number of bound variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if no variable is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Removes every binding.
    pub fn clear(&mut self) {
        self.order.clear();
        self.values.clear();
    }
}
