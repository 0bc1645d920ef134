use std::io::Cursor;

use reckon::{config::Config, repl::Repl};

fn run_session(input: &str) -> String {
    run_session_with(input, Config::default())
}

fn run_session_with(input: &str, config: Config) -> String {
    let mut repl = Repl::new(Cursor::new(input.as_bytes()), Vec::new(), config);
    repl.run().expect("in-memory I/O cannot fail");
    String::from_utf8(repl.into_output()).expect("output is UTF-8")
}

#[test]
fn evaluates_until_exit() {
    let output = run_session("2 + 3 * 4\nEXIT\n5 * 5\n");

    assert!(output.contains("= 14\n"));
    assert!(!output.contains("= 25"));
    assert!(output.ends_with("Goodbye.\n"));
}

#[test]
fn ends_at_end_of_input() {
    let output = run_session("(2 + 3) * 4");

    assert!(output.contains("= 20\n"));
    assert!(output.ends_with("Goodbye.\n"));
}

#[test]
fn asks_for_variables_in_discovery_order() {
    let output = run_session("y * x + y\n2\n3\nexit\n");

    assert!(output.contains("Variables: y, x\n"));
    let y_prompt = output.find("y = ").expect("prompt for y");
    let x_prompt = output.find("x = ").expect("prompt for x");
    assert!(y_prompt < x_prompt);
    assert!(output.contains("= 8\n"));
}

#[test]
fn asks_again_for_invalid_values() {
    let output = run_session("x / 2\nten\ninf\n10\n");

    assert!(output.contains("'ten' is not a number, try again."));
    assert!(output.contains("'inf' is not a number, try again."));
    assert!(output.contains("= 5\n"));
}

#[test]
fn errors_do_not_end_the_session() {
    let output = run_session("5 / 0\nsqrt(-1)\n2 + + 3\n1 + 1\n");

    assert!(output.contains("error: Error at column 3: Division by zero."));
    assert!(output.contains("error: Error at column 1: Cannot take the square root"));
    assert!(output.contains("error: Error at column 3: Invalid expression"));
    assert!(output.contains("= 2\n"));
}

#[test]
fn skips_blank_lines() {
    let output = run_session("\n   \n7\n");

    assert!(!output.contains("error:"));
    assert!(output.contains("= 7\n"));
}

#[test]
fn input_ending_while_asking_for_a_value() {
    let output = run_session("a + 1\n");

    assert!(output.contains("a = "));
    assert!(!output.contains("= 1\n"));
    assert!(output.ends_with("Goodbye.\n"));
}

#[test]
fn custom_exit_command() {
    let config = Config { exit_command: "quit".to_string(),
                          ..Config::default() };
    let output = run_session_with("  Quit  \n1 + 1\n", config);

    assert!(output.contains("'quit' to quit"));
    assert!(!output.contains("= 2"));
}
