use std::{fs, io};

use clap::Parser;
use reckon::{
    Calculator,
    config::{Config, DEFAULT_MAX_DEPTH},
    repl::{Repl, parse_value},
};
use tracing_subscriber::{EnvFilter, fmt};

/// reckon evaluates arithmetic expressions with variables and the functions
/// sin, cos, tan and sqrt.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells reckon to read expressions, one per line, from the file named by
    /// EXPRESSION.
    #[arg(short, long, requires = "expression")]
    file: bool,

    /// Gives a variable its value. May be repeated.
    #[arg(short, long = "set", value_name = "NAME=VALUE", value_parser = parse_assignment)]
    set: Vec<(String, f64)>,

    /// Deepest parenthesis nesting to accept.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Logs every reduction stage to stderr.
    #[arg(long)]
    trace: bool,

    /// Expression to evaluate. Without it an interactive session starts.
    expression: Option<String>,
}

fn parse_assignment(text: &str) -> Result<(String, f64), String> {
    let (name, value) = text.split_once('=')
                            .ok_or_else(|| format!("expected NAME=VALUE, found '{text}'"))?;
    let value = parse_value(value).ok_or_else(|| format!("'{value}' is not a finite number"))?;
    Ok((name.trim().to_string(), value))
}

fn init_logging(trace: bool) {
    // RUST_LOG applies unless --trace asks for stage output explicitly.
    let filter = if trace {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    fmt().with_env_filter(filter)
         .with_writer(io::stderr)
         .with_target(false)
         .init();
}

/// Evaluates one expression, taking variable values from `--set`.
fn evaluate_once(expression: &str,
                 assignments: &[(String, f64)],
                 config: &Config)
                 -> Result<f64, String> {
    let mut calculator = Calculator::with_config(config.clone());

    for name in calculator.find_variables(expression) {
        let value = assignments.iter()
                               .rev()
                               .find(|(assigned, _)| *assigned == name)
                               .map(|(_, value)| *value)
                               .ok_or_else(|| {
                                   format!("No value for variable '{name}'. Pass --set {name}=VALUE.")
                               })?;
        calculator.set_variable(&name, value);
    }

    calculator.calculate(expression).map_err(|e| e.to_string())
}

fn main() {
    let args = Args::parse();
    init_logging(args.trace);

    let config = Config { max_depth: args.max_depth,
                          ..Config::default() };

    let Some(contents) = args.expression else {
        let mut repl = Repl::new(io::stdin().lock(), io::stdout().lock(), config);
        if let Err(e) = repl.run() {
            eprintln!("I/O error: {e}");
            std::process::exit(1);
        }
        return;
    };

    let expressions = if args.file {
        let script = fs::read_to_string(&contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
            std::process::exit(1);
        });
        script.lines()
              .map(str::trim)
              .filter(|line| !line.is_empty())
              .map(str::to_string)
              .collect()
    } else {
        vec![contents]
    };

    let mut failed = false;
    for expression in &expressions {
        match evaluate_once(expression, &args.set, &config) {
            Ok(result) => println!("{result}"),
            Err(e) => {
                eprintln!("{e}");
                failed = true;
            },
        }
    }

    if failed {
        std::process::exit(1);
    }
}
