use crate::{
    calculate_with,
    config::Config,
    error::Error,
    interpreter::bindings::Bindings,
};

/// An evaluation session: one set of variable bindings plus configuration.
///
/// The usual flow for each new expression is [`find_variables`], then
/// [`set_variable`] for every discovered name, then [`calculate`]. The
/// bindings are rebuilt by every `find_variables` call and only read by
/// `calculate`.
///
/// [`find_variables`]: Calculator::find_variables
/// [`set_variable`]: Calculator::set_variable
/// [`calculate`]: Calculator::calculate
///
/// # Example
/// ```
/// use reckon::Calculator;
///
/// let mut calculator = Calculator::new();
/// let names = calculator.find_variables("width * height / 2");
/// assert_eq!(names, ["width", "height"]);
///
/// calculator.set_variable("width", 4.0);
/// calculator.set_variable("height", 3.0);
/// assert_eq!(calculator.calculate("width * height / 2").unwrap(), 6.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    bindings: Bindings,
    config:   Config,
}

impl Calculator {
    /// Creates a calculator with no variables and the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a calculator with no variables and the given configuration.
    #[must_use]
    pub fn with_config(config: Config) -> Self {
        Self { bindings: Bindings::new(),
               config }
    }

    /// The configuration used by [`calculate`](Self::calculate).
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Replaces the bindings with the variables found in `source` and
    /// returns their names in discovery order.
    ///
    /// Each discovered variable starts at [`PLACEHOLDER`](crate::interpreter::bindings::PLACEHOLDER)
    /// until it is given a value.
    pub fn find_variables(&mut self, source: &str) -> Vec<String> {
        self.bindings = Bindings::discover(source);
        self.variable_names()
    }

    /// Returns `true` if any variable is pending a value.
    #[must_use]
    pub fn has_variables(&self) -> bool {
        !self.bindings.is_empty()
    }

    /// The names of the current variables in discovery order.
    #[must_use]
    pub fn variable_names(&self) -> Vec<String> {
        self.bindings.names().map(str::to_string).collect()
    }

    /// Binds `name` to `value`. Names that were not discovered are added.
    pub fn set_variable(&mut self, name: &str, value: f64) {
        self.bindings.set(name, value);
    }

    /// The current bindings.
    #[must_use]
    pub const fn bindings(&self) -> &Bindings {
        &self.bindings
    }

    /// Evaluates `source` with the current bindings.
    ///
    /// # Errors
    /// Returns the first parse or runtime error encountered; see
    /// [`calculate_with`].
    pub fn calculate(&self, source: &str) -> Result<f64, Error> {
        calculate_with(source, &self.bindings, &self.config)
    }
}
