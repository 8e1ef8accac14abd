use crate::{
    error::EvalError,
    translator::{
        evaluator::core::{EvalResult, Evaluator, Operand},
        lexer::Operator,
    },
    util::num::floor_div,
};

impl Evaluator {
    /// Evaluates `left op right`.
    ///
    /// Integer arithmetic is checked: overflow is an error, never a wrapped
    /// result. Division rounds toward negative infinity. `+` is the only
    /// operator that accepts strings; if either side is a string, both sides
    /// are rendered as text and concatenated.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: The deeper stack entry.
    /// - `right`: The top stack entry.
    /// - `line`, `column`: Position of the operator token.
    ///
    /// # Errors
    /// - `EvalError::DivisionByZero` for a zero divisor.
    /// - `EvalError::Overflow` if the result leaves the `i64` range.
    /// - `EvalError::TypeError` for `-`, `*` or `/` with a string operand.
    ///
    /// # Example
    /// ```
    /// use conflang::translator::{
    ///     evaluator::core::{Evaluator, Operand},
    ///     lexer::Operator,
    /// };
    ///
    /// let sum = Evaluator::eval_binary(Operator::Add,
    ///                                  Operand::Str("port-".into()),
    ///                                  Operand::Int(80),
    ///                                  1,
    ///                                  1).unwrap();
    /// assert_eq!(sum, Operand::Str("port-80".into()));
    ///
    /// let quotient = Evaluator::eval_binary(Operator::Div,
    ///                                       Operand::Int(-7),
    ///                                       Operand::Int(2),
    ///                                       1,
    ///                                       1).unwrap();
    /// assert_eq!(quotient, Operand::Int(-4));
    /// ```
    pub fn eval_binary(op: Operator,
                       left: Operand,
                       right: Operand,
                       line: usize,
                       column: usize)
                       -> EvalResult<Operand> {
        use Operand::{Int, Str};
        use Operator::{Add, Div, Mul, Sub};

        let result = match (op, left, right) {
            (Add, Int(a), Int(b)) => a.checked_add(b),
            (Add, a @ Str(_), b) | (Add, a, b @ Str(_)) => return Ok(Str(format!("{a}{b}"))),
            (Sub, Int(a), Int(b)) => a.checked_sub(b),
            (Mul, Int(a), Int(b)) => a.checked_mul(b),
            (Div, Int(_), Int(0)) => return Err(EvalError::DivisionByZero { line, column }.into()),
            (Div, Int(a), Int(b)) => floor_div(a, b),
            (op, a, b) => {
                return Err(EvalError::TypeError { details: format!("cannot apply '{op}' to {} and {}",
                                                                   a.type_name(),
                                                                   b.type_name()),
                                                  line,
                                                  column }.into());
            },
        };

        result.map(Int)
              .ok_or_else(|| EvalError::Overflow { line, column }.into())
    }
}
