#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating a constant
/// expression.
pub enum EvalError {
    /// A name inside an expression is neither a constant nor a number.
    UnknownConstant {
        /// The name that failed to resolve.
        name:   String,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// The name in front of `.{` is neither a constant nor a number.
    InvalidSeed {
        /// The seed name.
        name:   String,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// An operator or function found fewer operands than it consumes.
    NotEnoughOperands {
        /// The operator or function symbol.
        operator: String,
        /// Number of operands it consumes.
        expected: usize,
        /// Number of operands that were on the stack.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
        /// The source column where the error occurred.
        column:   usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// An operand had a type the operation does not accept.
    TypeError {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
        /// The source column where the error occurred.
        column:  usize,
    },
    /// Integer arithmetic left the signed 64-bit range.
    Overflow {
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// The expression did not reduce to exactly one value.
    InvalidExpression {
        /// Number of values left on the stack at `}.`.
        depth:  usize,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
}

impl EvalError {
    /// Returns the `(line, column)` of the offending token.
    #[must_use]
    pub const fn position(&self) -> (usize, usize) {
        match self {
            Self::UnknownConstant { line, column, .. }
            | Self::InvalidSeed { line, column, .. }
            | Self::NotEnoughOperands { line, column, .. }
            | Self::DivisionByZero { line, column }
            | Self::TypeError { line, column, .. }
            | Self::Overflow { line, column }
            | Self::InvalidExpression { line, column, .. } => (*line, *column),
        }
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownConstant { name, line, column } => {
                write!(f, "Error at {line}:{column}: Unknown constant '{name}'.")
            },
            Self::InvalidSeed { name, line, column } => write!(f,
                                                               "Error at {line}:{column}: Invalid constant expression argument '{name}'."),
            Self::NotEnoughOperands { operator,
                                      expected,
                                      found,
                                      line,
                                      column, } => write!(f,
                                                          "Error at {line}:{column}: Not enough operands for '{operator}': expected {expected}, found {found}."),
            Self::DivisionByZero { line, column } => {
                write!(f, "Error at {line}:{column}: Division by zero.")
            },
            Self::TypeError { details, line, column } => {
                write!(f, "Error at {line}:{column}: Type error: {details}.")
            },
            Self::Overflow { line, column } => write!(f,
                                                      "Error at {line}:{column}: Integer overflow while trying to compute result."),
            Self::InvalidExpression { depth, line, column } => write!(f,
                                                                      "Error at {line}:{column}: Invalid constant expression: it leaves {depth} values on the stack instead of one."),
        }
    }
}

impl std::error::Error for EvalError {}
