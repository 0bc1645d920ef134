use reckon::{
    Calculator,
    ast::Expr,
    calculate, calculate_with,
    config::Config,
    error::{Error, ParseError, Rule, RuntimeError},
    interpreter::{
        bindings::{Bindings, PLACEHOLDER},
        evaluator::core::Evaluator,
        parser::parse,
        validator::validate,
    },
};

const EPSILON: f64 = 1e-9;

fn eval(src: &str) -> f64 {
    calculate(src, &Bindings::new()).unwrap_or_else(|e| panic!("{src:?} failed: {e}"))
}

fn eval_err(src: &str) -> Error {
    match calculate(src, &Bindings::new()) {
        Ok(v) => panic!("{src:?} succeeded with {v} but was expected to fail"),
        Err(e) => e,
    }
}

fn assert_value(src: &str, expected: f64) {
    let actual = eval(src);
    assert!((actual - expected).abs() < EPSILON,
            "{src:?} evaluated to {actual}, expected {expected}");
}

fn assert_invalid(src: &str) {
    match eval_err(src) {
        Error::Parse(_) => {},
        other => panic!("{src:?} failed with {other:?}, expected a parse error"),
    }
}

fn assert_rule(src: &str, rule: Rule) {
    match eval_err(src) {
        Error::Parse(ParseError::InvalidExpression { rule: found, .. }) => {
            assert_eq!(found, rule, "wrong rule for {src:?}");
        },
        other => panic!("{src:?} failed with {other:?}, expected {rule:?}"),
    }
}

#[test]
fn basic_arithmetic() {
    assert_value("2 + 3", 5.0);
    assert_value("5 - 3", 2.0);
    assert_value("2 * 3", 6.0);
    assert_value("6 / 2", 3.0);
    assert_value("3.5 * 2.0 + 1.5", 8.5);
    assert_value("42", 42.0);
}

#[test]
fn operator_precedence() {
    assert_value("2 + 3 * 4", 14.0);
    assert_value("(2 + 3) * 4", 20.0);
    assert_value("10 - 4 - 3", 3.0);
    assert_value("8 / 2 * 2", 8.0);
    assert_value("8 / 2 / 2", 2.0);
    assert_value("1 + 2 * 3 - 4 / 2", 5.0);
}

#[test]
fn whitespace_is_ignored() {
    assert_value("2 + 3 * 4", 14.0);
    assert_value("2+3*4", 14.0);
    assert_value("  2   +   3   *   4  ", 14.0);
    assert_value("\t2\n+3 *4\r", 14.0);
}

#[test]
fn decimal_literals() {
    assert_value(".5 + .25", 0.75);
    assert_value("2. * 3", 6.0);
    assert_value("0.1 * 10", 1.0);
}

#[test]
fn builtin_functions() {
    assert_value("sin(0)", 0.0);
    assert_value("cos(0)", 1.0);
    assert_value("tan(0)", 0.0);
    assert_value("sqrt(16)", 4.0);
    assert_value("sqrt(2) * sqrt(2)", 2.0);
    assert_value("sin(0) + cos(0) * sqrt(4)", 2.0);
    assert_value("sqrt(sqrt(16))", 2.0);
    assert_value("cos(sin(0))", 1.0);
    assert_value("sqrt(9 + 16) * (1 + 1)", 10.0);
}

#[test]
fn composite_expressions() {
    assert_value("(2 + 3 * 4) / (5 - 1) + sqrt(9)", 6.5);
    assert_value("((1 + 2) * (3 + 4)) / 7", 3.0);
    assert_value("2 * (3 + (4 - 1) * 2)", 18.0);
}

#[test]
fn unary_minus() {
    assert_value("-5", -5.0);
    assert_value("-5 + 2", -3.0);
    assert_value("5 * -3", -15.0);
    assert_value("2 - -3", 5.0);
    assert_value("10 / -2", -5.0);
    assert_value("-(2 + 3)", -5.0);
    assert_value("(-2) * 3", -6.0);
    assert_value("sqrt(-0 + 4)", 2.0);
}

#[test]
fn empty_group_is_zero() {
    assert_value("()", 0.0);
    assert_value("2 + ()", 2.0);
}

#[test]
fn division_by_zero() {
    assert_eq!(eval_err("5 / 0"),
               Error::Runtime(RuntimeError::DivisionByZero { position: 3 }));
    assert!(matches!(eval_err("1 / (2 - 2)"),
                     Error::Runtime(RuntimeError::DivisionByZero { .. })));
    assert!(matches!(eval_err("1 / -0"),
                     Error::Runtime(RuntimeError::DivisionByZero { .. })));
    assert!(matches!(eval_err("1 / sin(0)"),
                     Error::Runtime(RuntimeError::DivisionByZero { .. })));
}

#[test]
fn negative_root() {
    assert_eq!(eval_err("sqrt(-1)"),
               Error::Runtime(RuntimeError::NegativeRoot { value:    -1.0,
                                                           position: 1, }));
    assert!(matches!(eval_err("2 + sqrt(1 - 5)"),
                     Error::Runtime(RuntimeError::NegativeRoot { value, .. }) if value == -4.0));
}

#[test]
fn functions_are_reduced_before_arithmetic() {
    // The call is reduced first, so its error wins over the earlier division.
    assert!(matches!(eval_err("1 / 0 + sqrt(-1)"),
                     Error::Runtime(RuntimeError::NegativeRoot { .. })));
}

#[test]
fn validation_rules() {
    assert_rule("", Rule::Empty);
    assert_rule("   \t ", Rule::Empty);
    assert_rule("2 @ 3", Rule::IllegalCharacter('@'));
    assert_rule("2 ^ 3", Rule::IllegalCharacter('^'));
    assert_rule("(2 + 3", Rule::UnbalancedParentheses);
    assert_rule("2 + 3)", Rule::UnbalancedParentheses);
    assert_rule(")2 + 3(", Rule::UnbalancedParentheses);
    assert_rule("* 2", Rule::LeadingOperator('*'));
    assert_rule("+2", Rule::LeadingOperator('+'));
    assert_rule("2 +", Rule::TrailingOperator('+'));
    assert_rule("2 + + 3", Rule::AdjacentOperators('+', '+'));
    assert_rule("2 * / 3", Rule::AdjacentOperators('*', '/'));
    assert_rule("5 * -x", Rule::AdjacentOperators('*', '-'));
    assert_rule("2 - -x", Rule::AdjacentOperators('-', '-'));
}

#[test]
fn validation_reports_columns() {
    assert_eq!(eval_err("1 + 2 $"),
               Error::Parse(ParseError::InvalidExpression { rule:     Rule::IllegalCharacter('$'),
                                                            position: 7, }));
    assert_eq!(eval_err("((1)"),
               Error::Parse(ParseError::InvalidExpression { rule:     Rule::UnbalancedParentheses,
                                                            position: 1, }));
}

#[test]
fn nesting_limit() {
    let config = Config { max_depth: 3,
                          ..Config::default() };
    let bindings = Bindings::new();

    assert_eq!(calculate_with("(((1)))", &bindings, &config).unwrap(), 1.0);
    assert_eq!(calculate_with("((((1))))", &bindings, &config),
               Err(Error::Parse(ParseError::InvalidExpression { rule:     Rule::NestingTooDeep { limit: 3 },
                                                                position: 4, })));
    assert!(calculate_with("sqrt(sqrt(sqrt(sqrt(1))))", &bindings, &config).is_err());
}

#[test]
fn validating_flat_results_never_fails() {
    for value in [14.0, -5.0, 0.5, -0.25, 1234.5678, 0.0] {
        let text = value.to_string();
        assert!(validate(&text, 64).is_ok(), "{text} failed validation");
        assert_value(&text, value);
    }
}

#[test]
fn malformed_function_calls() {
    assert!(matches!(eval_err("sin 0"),
                     Error::Parse(ParseError::MalformedFunctionCall { ref name, position: 1 }) if name == "sin"));
    assert!(matches!(eval_err("2 + sqrt (4)"),
                     Error::Parse(ParseError::MalformedFunctionCall { position: 5, .. })));
    assert!(matches!(eval_err("cos"),
                     Error::Parse(ParseError::MalformedFunctionCall { .. })));
    assert_rule("sin()", Rule::Empty);
}

#[test]
fn structural_parse_errors() {
    assert_invalid("2x");
    assert_invalid("(2)(3)");
    assert_invalid("1.2.3");
    assert_invalid("(*2)");
    assert_invalid("x(2)");
    assert_invalid("sin(*2)");
}

#[test]
fn variables() {
    let mut bindings = Bindings::new();
    bindings.set("x", 5.0);
    bindings.set("y", 3.0);

    assert_eq!(calculate("x + y", &bindings).unwrap(), 8.0);
    assert_eq!(calculate("x * y - x", &bindings).unwrap(), 10.0);
    assert_eq!(calculate("-x", &bindings).unwrap(), -5.0);
    assert_eq!(calculate("sqrt(x * x - y * y)", &bindings).unwrap(), 4.0);
}

#[test]
fn variable_names_are_matched_whole() {
    let mut bindings = Bindings::new();
    bindings.set("width", 10.0);
    bindings.set("id", 2.0);

    assert_eq!(calculate("width * id", &bindings).unwrap(), 20.0);
    assert_eq!(calculate("id + width", &bindings).unwrap(), 12.0);
}

#[test]
fn unbound_variable_is_error() {
    assert_eq!(eval_err("1 + foo"),
               Error::Runtime(RuntimeError::UnknownVariable { name:     "foo".to_string(),
                                                              position: 5, }));
}

#[test]
fn calculator_session() {
    let mut calculator = Calculator::new();
    assert!(!calculator.has_variables());

    let names = calculator.find_variables("(a + b) * c");
    assert_eq!(names, ["a", "b", "c"]);
    assert!(calculator.has_variables());

    calculator.set_variable("a", 2.0);
    calculator.set_variable("b", 3.0);
    calculator.set_variable("c", 4.0);
    assert_eq!(calculator.calculate("(a + b) * c").unwrap(), 20.0);

    // A new expression starts from fresh placeholders.
    calculator.find_variables("a + z");
    assert_eq!(calculator.variable_names(), ["a", "z"]);
    assert_eq!(calculator.calculate("a + z").unwrap(), 0.0);

    calculator.find_variables("1 + 2");
    assert!(!calculator.has_variables());
}

#[test]
fn calculator_without_discovery() {
    let mut calculator = Calculator::new();
    calculator.set_variable("x", 5.0);
    calculator.set_variable("y", 3.0);
    assert_eq!(calculator.calculate("x + y").unwrap(), 8.0);
}

#[test]
fn function_names_are_not_variables() {
    let mut calculator = Calculator::new();
    let names = calculator.find_variables("sin(x) + cos(y)");
    assert_eq!(names, ["x", "y"]);

    let names = calculator.find_variables("x + y * width - sqrt(x)");
    assert_eq!(names, ["x", "y", "width"]);
}

#[test]
fn error_messages() {
    assert_eq!(eval_err("5 / 0").to_string(),
               "Error at column 3: Division by zero.");
    assert_eq!(eval_err("2 + + 3").to_string(),
               "Error at column 3: Invalid expression: operators '++' cannot follow each other.");
    assert_eq!(eval_err("sqrt(-4)").to_string(),
               "Error at column 1: Cannot take the square root of negative number -4.");
}

#[test]
fn long_flat_chains() {
    let terms = 100_000;

    let sum = format!("{}1", "1+".repeat(terms - 1));
    assert_value(&sum, 100_000.0);

    let mixed = format!("{}1", "2*3/6+".repeat(terms));
    assert_value(&mixed, 100_001.0);

    let calls = format!("{}0", "sqrt(4)+".repeat(terms));
    assert_value(&calls, 200_000.0);

    let mut bindings = Bindings::new();
    bindings.set("x", 1.0);
    let difference = format!("{}x", "x-".repeat(terms));
    assert_eq!(calculate(&difference, &bindings).unwrap(), -99_999.0);
}

#[test]
fn long_chains_print_and_evaluate() {
    let terms = vec!["1"; 100_000];
    let expr = parse(&terms.join("+")).unwrap();

    assert_eq!(expr.to_string(), terms.join(" + "));
    assert_eq!(Evaluator::new(&Bindings::new()).evaluate(expr).unwrap(), 100_000.0);
}

#[test]
fn chains_keep_operator_columns() {
    assert_eq!(eval_err("1 + 2 + 3 / 0 + 4"),
               Error::Runtime(RuntimeError::DivisionByZero { position: 11 }));

    let expr = parse("  7 * 2 - 1").unwrap();
    assert!(matches!(expr, Expr::Chain { ref rest, .. } if rest.len() == 1));
    assert_eq!(expr.position(), 3);
}

#[test]
fn bindings_bookkeeping() {
    let mut bindings = Bindings::discover("a * b + a - sqrt(c)");
    assert_eq!(bindings.len(), 3);
    assert_eq!(bindings.get("c"), Some(PLACEHOLDER));

    bindings.set("b", 2.0);
    assert_eq!(bindings.len(), 3);
    assert_eq!(bindings.names().collect::<Vec<_>>(), ["a", "b", "c"]);

    bindings.clear();
    assert!(bindings.is_empty());
    assert_eq!(bindings.get("a"), None);
    assert!(matches!(calculate("a + 1", &bindings),
                     Err(Error::Runtime(RuntimeError::UnknownVariable { .. }))));
}

#[test]
fn calculator_exposes_its_bindings() {
    let mut calculator = Calculator::new();
    calculator.find_variables("rate * hours");
    calculator.set_variable("rate", 12.5);

    let bindings = calculator.bindings();
    assert_eq!(bindings.len(), 2);
    assert_eq!(bindings.get("rate"), Some(12.5));
    assert_eq!(bindings.get("hours"), Some(PLACEHOLDER));
    assert_eq!(calculate("rate * 2", bindings).unwrap(), 25.0);
}
