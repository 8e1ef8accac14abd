use crate::{
    error::EvalError,
    translator::{
        evaluator::core::{EvalResult, Operand},
        lexer::Builtin,
    },
};

impl Builtin {
    /// Applies the built-in function to its single argument.
    ///
    /// # Errors
    /// Propagates the error of the function itself.
    pub fn apply(self, argument: Operand, line: usize, column: usize) -> EvalResult<Operand> {
        match self {
            Self::Abs => abs(argument, line, column),
        }
    }
}

/// Returns the absolute value of an integer operand.
///
/// Strings cause a `TypeError`. The magnitude of `i64::MIN` is not
/// representable and causes an `Overflow` error.
///
/// # Example
/// ```
/// use conflang::translator::evaluator::{core::Operand, function::abs};
///
/// assert_eq!(abs(Operand::Int(-5), 1, 1).unwrap(), Operand::Int(5));
/// assert!(abs(Operand::Str("five".into()), 1, 1).is_err());
/// ```
pub fn abs(argument: Operand, line: usize, column: usize) -> EvalResult<Operand> {
    match argument {
        Operand::Int(n) => n.checked_abs()
                            .map(Operand::Int)
                            .ok_or_else(|| EvalError::Overflow { line, column }.into()),
        Operand::Str(_) => {
            Err(EvalError::TypeError { details: format!("function '{}' expects an integer argument",
                                                        Builtin::Abs),
                                       line,
                                       column }.into())
        },
    }
}
