use crate::error::{ParseError, Rule};

/// Returns `true` for the four binary operator characters.
///
/// # Example
/// ```
/// use reckon::interpreter::validator::is_operator;
///
/// assert!(is_operator('/'));
/// assert!(!is_operator('('));
/// ```
#[must_use]
pub const fn is_operator(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/')
}

/// Whitespace ignored everywhere in an expression.
#[must_use]
pub const fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

const fn is_allowed(c: char) -> bool {
    c.is_ascii_alphanumeric() || is_operator(c) || matches!(c, '(' | ')' | '.')
}

/// Checks the raw expression text before anything else touches it.
///
/// The rules are applied to the text with all whitespace removed, in this
/// order, and the first failure is returned:
///
/// 1. the text is not empty,
/// 2. every character is a digit, a letter, an operator, a parenthesis or `.`,
/// 3. parentheses are balanced and nested at most `max_depth` levels,
/// 4. the text neither starts with an operator other than `-` nor ends with
///    an operator,
/// 5. no two operators are adjacent, except an operator followed by a `-`
///    that is itself directly followed by a digit (`5*-3`).
///
/// The check is purely structural. Malformed function calls and stray
/// operands are left to the parser.
///
/// # Errors
/// Returns `ParseError::InvalidExpression` naming the violated [`Rule`] and
/// the column of the offending character in `source`.
///
/// # Example
/// ```
/// use reckon::{error::{ParseError, Rule}, interpreter::validator::validate};
///
/// assert!(validate(" 2 * -3 ", 64).is_ok());
///
/// let err = validate("2 + + 3", 64).unwrap_err();
/// assert_eq!(err,
///            ParseError::InvalidExpression { rule:     Rule::AdjacentOperators('+', '+'),
///                                            position: 3, });
/// ```
pub fn validate(source: &str, max_depth: usize) -> Result<(), ParseError> {
    let chars = source.chars()
                      .enumerate()
                      .filter(|(_, c)| !is_blank(*c))
                      .map(|(i, c)| (i + 1, c))
                      .collect::<Vec<_>>();

    let (Some(&(first_position, first)), Some(&(last_position, last))) =
        (chars.first(), chars.last())
    else {
        return Err(invalid(Rule::Empty, 1));
    };

    if let Some(&(position, c)) = chars.iter().find(|(_, c)| !is_allowed(*c)) {
        return Err(invalid(Rule::IllegalCharacter(c), position));
    }

    check_parentheses(&chars, max_depth)?;

    if is_operator(first) && first != '-' {
        return Err(invalid(Rule::LeadingOperator(first), first_position));
    }
    if is_operator(last) {
        return Err(invalid(Rule::TrailingOperator(last), last_position));
    }

    for (i, pair) in chars.windows(2).enumerate() {
        let ((position, current), (_, next)) = (pair[0], pair[1]);
        if !(is_operator(current) && is_operator(next)) {
            continue;
        }
        let digit_follows = chars.get(i + 2).is_some_and(|(_, c)| c.is_ascii_digit());
        if !(next == '-' && digit_follows) {
            return Err(invalid(Rule::AdjacentOperators(current, next), position));
        }
    }

    Ok(())
}

/// Balance first, then depth: an unbalanced text reports the balance rule
/// even when it is also nested too deeply.
fn check_parentheses(chars: &[(usize, char)], max_depth: usize) -> Result<(), ParseError> {
    let mut open = Vec::new();
    let mut too_deep = None;

    for &(position, c) in chars {
        match c {
            '(' => {
                open.push(position);
                if open.len() > max_depth && too_deep.is_none() {
                    too_deep = Some(position);
                }
            },
            ')' => {
                if open.pop().is_none() {
                    return Err(invalid(Rule::UnbalancedParentheses, position));
                }
            },
            _ => {},
        }
    }

    if let Some(&position) = open.last() {
        return Err(invalid(Rule::UnbalancedParentheses, position));
    }
    if let Some(position) = too_deep {
        return Err(invalid(Rule::NestingTooDeep { limit: max_depth }, position));
    }

    Ok(())
}

const fn invalid(rule: Rule, position: usize) -> ParseError {
    ParseError::InvalidExpression { rule, position }
}
