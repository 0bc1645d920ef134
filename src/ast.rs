use std::fmt;

/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// `Expr` covers the complete language: numeric literals, variables, unary
/// negation, the four binary operators and single-argument function calls.
/// Every variant records the 1-based column it was parsed from so evaluation
/// errors can point back into the source text.
///
/// The reduction stages never mutate a tree in place. Each stage consumes an
/// `Expr` and returns a new one, so the value printed after a stage is exactly
/// what the next stage sees.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal such as `3.5`, or a value spliced in by a reduction.
    Literal {
        /// The constant value.
        value:    f64,
        /// Column in the source text.
        position: usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name:     String,
        /// Column in the source text.
        position: usize,
    },
    /// A unary operation (negation).
    UnaryOp {
        /// The unary operator to apply.
        op:       UnaryOperator,
        /// The operand expression.
        expr:     Box<Self>,
        /// Column in the source text.
        position: usize,
    },
    /// A left-associative run of operators sharing one precedence level,
    /// such as `a - b + c` or `2 * x / 4`.
    ///
    /// Holding the whole run in one node keeps the tree as deep as the
    /// bracket nesting, however many operands a level has.
    Chain {
        /// The leftmost operand.
        first:    Box<Self>,
        /// Each following operator with its right-hand operand, in source
        /// order. Never empty.
        rest:     Vec<Operation>,
        /// Column of the leftmost operand in the source text.
        position: usize,
    },
    /// Function call expression (e.g. `sin(x)`).
    FunctionCall {
        /// Name of the function being called.
        name:     String,
        /// The single argument.
        argument: Box<Self>,
        /// Column of the function name in the source text.
        position: usize,
    },
}

impl Expr {
    /// Gets the source column from `self`.
    /// ## Example
    /// ```
    /// use reckon::ast::Expr;
    ///
    /// let expr = Expr::Variable { name:     "x".to_string(),
    ///                             position: 5, };
    ///
    /// assert_eq!(expr.position(), 5);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Literal { position, .. }
            | Self::Variable { position, .. }
            | Self::UnaryOp { position, .. }
            | Self::Chain { position, .. }
            | Self::FunctionCall { position, .. } => *position,
        }
    }

    /// Binding strength used when printing, higher binds tighter.
    fn precedence(&self) -> u8 {
        match self {
            Self::Chain { rest, .. } => rest.first().map_or(4, |operation| operation.op.precedence()),
            Self::UnaryOp { .. } => 3,
            Self::Literal { value, .. } if value.is_sign_negative() => 3,
            Self::Literal { .. } | Self::Variable { .. } | Self::FunctionCall { .. } => 4,
        }
    }
}

/// One step of an [`Expr::Chain`]: an operator and the operand to its right.
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    /// The operator.
    pub op:       BinaryOperator,
    /// The right-hand operand.
    pub operand:  Expr,
    /// Column of the operator in the source text.
    pub position: usize,
}

/// Writes `expr`, wrapped in parentheses when it binds looser than `min`.
fn write_operand(f: &mut fmt::Formatter<'_>, expr: &Expr, min: u8) -> fmt::Result {
    if expr.precedence() < min {
        write!(f, "({expr})")
    } else {
        write!(f, "{expr}")
    }
}

/// Prints the expression as source text with the fewest parentheses that
/// keep its structure.
///
/// # Example
/// ```
/// use reckon::interpreter::parser::parse;
///
/// let expr = parse("(2 + 3) * x - -1").unwrap();
/// assert_eq!(expr.to_string(), "(2 + 3) * x - -1");
/// ```
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal { value, .. } => write!(f, "{value}"),
            Self::Variable { name, .. } => write!(f, "{name}"),
            Self::UnaryOp { op, expr, .. } => {
                write!(f, "{op}")?;
                write_operand(f, expr, 4)
            },
            Self::Chain { first, rest, .. } => {
                let precedence = self.precedence();
                write_operand(f, first, precedence)?;
                for Operation { op, operand, .. } in rest {
                    write!(f, " {op} ")?;
                    write_operand(f, operand, precedence + 1)?;
                }
                Ok(())
            },
            Self::FunctionCall { name, argument, .. } => write!(f, "{name}({argument})"),
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl BinaryOperator {
    /// Multiplicative operators bind tighter than additive ones.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
        }
    }
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
        }
    }
}
