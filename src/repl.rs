use std::io::{self, BufRead, Write};

use tracing::warn;

use crate::{Calculator, config::Config};

/// Parses a variable value typed by the user.
///
/// Only finite decimal numbers are accepted.
///
/// # Example
/// ```
/// use reckon::repl::parse_value;
///
/// assert_eq!(parse_value(" -2.5 "), Some(-2.5));
/// assert_eq!(parse_value("inf"), None);
/// assert_eq!(parse_value("five"), None);
/// ```
#[must_use]
pub fn parse_value(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}

/// An interactive session reading expressions from `input` and writing
/// prompts and results to `output`.
///
/// For every expression the session discovers its variables, asks for each
/// value in discovery order and prints the result or the error. Errors never
/// end the session; end of input or the configured exit command does.
pub struct Repl<R, W> {
    input:      R,
    output:     W,
    calculator: Calculator,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    /// Creates a session over the given streams.
    pub fn new(input: R, output: W, config: Config) -> Self {
        Self { input,
               output,
               calculator: Calculator::with_config(config) }
    }

    /// Consumes the session and returns its output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the session until end of input or the exit command.
    ///
    /// # Errors
    /// Only I/O errors on `input` or `output` are returned.
    pub fn run(&mut self) -> io::Result<()> {
        let exit_command = self.calculator.config().exit_command.clone();
        writeln!(self.output,
                 "reckon: enter an expression, or '{exit_command}' to quit.")?;

        while let Some(line) = self.prompt("> ")? {
            let expression = line.trim();
            if expression.is_empty() {
                continue;
            }
            if expression.eq_ignore_ascii_case(&exit_command) {
                break;
            }
            if !self.evaluate(expression)? {
                break;
            }
        }

        writeln!(self.output, "Goodbye.")
    }

    /// Asks for variable values and evaluates one expression. Returns
    /// `false` if the input ended while asking.
    fn evaluate(&mut self, expression: &str) -> io::Result<bool> {
        let names = self.calculator.find_variables(expression);
        if !names.is_empty() {
            writeln!(self.output, "Variables: {}", names.join(", "))?;
            for name in &names {
                let Some(value) = self.read_value(name)? else {
                    return Ok(false);
                };
                self.calculator.set_variable(name, value);
            }
        }

        match self.calculator.calculate(expression) {
            Ok(result) => writeln!(self.output, "= {result}")?,
            Err(e) => {
                warn!(expression, error = %e, "calculation failed");
                writeln!(self.output, "error: {e}")?;
            },
        }
        Ok(true)
    }

    /// Prompts for `name` until a number is entered.
    fn read_value(&mut self, name: &str) -> io::Result<Option<f64>> {
        loop {
            let Some(line) = self.prompt(&format!("{name} = "))? else {
                return Ok(None);
            };
            if let Some(value) = parse_value(&line) {
                return Ok(Some(value));
            }
            writeln!(self.output, "'{}' is not a number, try again.", line.trim())?;
        }
    }

    fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
