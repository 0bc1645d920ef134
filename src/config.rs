/// Default limit on parenthesis nesting.
pub const DEFAULT_MAX_DEPTH: usize = 64;
/// Default command that ends an interactive session.
pub const DEFAULT_EXIT_COMMAND: &str = "exit";

/// Settings shared by the calculator and the interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Deepest parenthesis nesting accepted by the validator. Evaluation
    /// recurses once per level, so this bounds stack use.
    pub max_depth:    usize,
    /// Input line, compared case-insensitively, that ends the session.
    pub exit_command: String,
}

impl Default for Config {
    fn default() -> Self {
        Self { max_depth:    DEFAULT_MAX_DEPTH,
               exit_command: DEFAULT_EXIT_COMMAND.to_string(), }
    }
}
