use crate::{
    error::{Error, EvalError, ParseError},
    translator::{
        tokenizer::{Token, TokenKind},
        value::{config::SymbolTable, core::Value},
    },
    util::num::parse_decimal,
};

/// Result type used by the evaluator.
///
/// Evaluation fails either with an `EvalError` or, for a token that does not
/// belong in an expression, with a `ParseError`; both travel as [`Error`].
pub type EvalResult<T> = Result<T, Error>;

/// A single entry of the evaluation stack.
///
/// Constant expressions compute over integers and strings only. Every
/// operator decides what it accepts by matching on these two tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    /// A signed 64-bit integer.
    Int(i64),
    /// A string, from a string constant or a concatenation.
    Str(String),
}

impl Operand {
    /// Converts a stored constant into an operand.
    ///
    /// Integers stay integers; strings and bare names become strings. Arrays
    /// and blocks cannot take part in arithmetic and are rejected.
    ///
    /// # Errors
    /// `EvalError::TypeError` for array and block constants.
    pub fn from_constant(name: &str, value: &Value, line: usize, column: usize) -> EvalResult<Self> {
        match value {
            Value::Int(n) => Ok(Self::Int(*n)),
            Value::Str(s) | Value::Name(s) => Ok(Self::Str(s.clone())),
            Value::Array(_) | Value::Table(_) => {
                Err(EvalError::TypeError { details: format!("constant '{name}' is {} and cannot be used as an operand",
                                                            value.type_name()),
                                           line,
                                           column }.into())
            },
        }
    }

    /// A short name of the variant for error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Int(_) => "an integer",
            Self::Str(_) => "a string",
        }
    }
}

impl From<Operand> for Value {
    fn from(operand: Operand) -> Self {
        match operand {
            Operand::Int(n) => Self::Int(n),
            Operand::Str(s) => Self::Str(s),
        }
    }
}

impl std::fmt::Display for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "{s}"),
        }
    }
}

/// Stack machine for one postfix constant expression.
///
/// The parser creates an `Evaluator` when it enters a `.{` region, feeds it
/// every token up to the matching `}.` through [`Evaluator::apply`], then
/// calls [`Evaluator::finish`]. The evaluator keeps nothing but its operand
/// stack; constants are passed in on each call, so separate regions never
/// share state.
///
/// # Example
/// ```
/// use conflang::translator::{
///     evaluator::core::Evaluator,
///     tokenizer::{TokenKind, Tokenizer},
///     value::{config::SymbolTable, core::Value},
/// };
///
/// let mut constants = SymbolTable::new();
/// constants.define("base", Value::Int(8000));
///
/// let mut tokens = Tokenizer::new("base 80 + }.");
/// let mut evaluator = Evaluator::new();
/// let close = loop {
///     let token = tokens.next_token().unwrap();
///     if token.kind == TokenKind::ExprEnd {
///         break token;
///     }
///     evaluator.apply(&token, &constants).unwrap();
/// };
///
/// assert_eq!(evaluator.finish(&close).unwrap(), Value::Int(8080));
/// ```
#[derive(Debug, Default)]
pub struct Evaluator {
    stack: Vec<Operand>,
}

impl Evaluator {
    /// Creates an evaluator with an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an evaluator whose stack starts with `seed`.
    ///
    /// Used for `name .{ ... }.`, where the name in front of the region is
    /// the first operand.
    #[must_use]
    pub fn with_seed(seed: Operand) -> Self {
        Self { stack: vec![seed] }
    }

    /// Resolves the seed operand written in front of a `.{` region.
    ///
    /// A known constant supplies its value; otherwise the name itself must be
    /// a decimal number.
    ///
    /// # Errors
    /// - `EvalError::InvalidSeed` if the name is neither.
    /// - `EvalError::TypeError` for array and block constants.
    pub fn resolve_seed(name: &str,
                        constants: &SymbolTable,
                        line: usize,
                        column: usize)
                        -> EvalResult<Operand> {
        if let Some(value) = constants.get(name) {
            return Operand::from_constant(name, value, line, column);
        }

        parse_decimal(name).map(Operand::Int)
                           .map_err(|_| {
                               EvalError::InvalidSeed { name: name.to_string(),
                                                        line,
                                                        column }.into()
                           })
    }

    /// Executes one token of the expression.
    ///
    /// - Integer literals are pushed.
    /// - Names push the constant they refer to, or their own value if they
    ///   spell a decimal number.
    /// - Operators pop `b`, then `a`, and push `a op b`.
    /// - Built-in functions pop one argument and push the result.
    ///
    /// # Errors
    /// - `EvalError::UnknownConstant` for an unresolvable name.
    /// - `EvalError::NotEnoughOperands` if the stack is too shallow.
    /// - Any error of the operator or function itself.
    /// - `ParseError::UnexpectedToken` for tokens that cannot appear in an
    ///   expression, such as `[` or a string literal.
    pub fn apply(&mut self, token: &Token<'_>, constants: &SymbolTable) -> EvalResult<()> {
        let (line, column) = (token.line, token.column);

        let operand = match &token.kind {
            TokenKind::Decimal(n) | TokenKind::Hex(n) => Operand::Int(*n),
            TokenKind::Name(name) => match constants.get(name) {
                Some(value) => Operand::from_constant(name, value, line, column)?,
                None => parse_decimal(name).map(Operand::Int).map_err(|_| {
                                               Error::from(EvalError::UnknownConstant { name:
                                                                                            name.clone(),
                                                                                        line,
                                                                                        column })
                                           })?,
            },
            TokenKind::Operator(op) => {
                let [left, right] = self.pop_operands::<2>(&op.to_string(), line, column)?;
                Self::eval_binary(*op, left, right, line, column)?
            },
            TokenKind::Function(builtin) => {
                let [argument] = self.pop_operands::<1>(&builtin.to_string(), line, column)?;
                builtin.apply(argument, line, column)?
            },
            other => {
                return Err(ParseError::UnexpectedToken { context: "constant expression",
                                                         found: other.to_string(),
                                                         line,
                                                         column }.into());
            },
        };

        self.stack.push(operand);
        Ok(())
    }

    /// Ends the expression at the closing `}.` token.
    ///
    /// # Errors
    /// `EvalError::InvalidExpression` unless exactly one value is left.
    pub fn finish(mut self, close: &Token<'_>) -> EvalResult<Value> {
        let depth = self.stack.len();

        match self.stack.pop() {
            Some(result) if depth == 1 => Ok(result.into()),
            _ => Err(EvalError::InvalidExpression { depth,
                                                    line: close.line,
                                                    column: close.column }.into()),
        }
    }

    /// Pops the top `N` operands, deepest first.
    fn pop_operands<const N: usize>(&mut self,
                                    operator: &str,
                                    line: usize,
                                    column: usize)
                                    -> EvalResult<[Operand; N]> {
        let found = self.stack.len();
        let error = || {
            Error::from(EvalError::NotEnoughOperands { operator: operator.to_string(),
                                                       expected: N,
                                                       found,
                                                       line,
                                                       column })
        };

        if found < N {
            return Err(error());
        }

        self.stack.split_off(found - N).try_into().map_err(|_| error())
    }
}
