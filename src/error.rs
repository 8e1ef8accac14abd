/// Lexical errors.
///
/// The error type of the raw `logos` lexer. Lexical errors are unclosed
/// strings and comments, malformed `(define` forms, bad numeric literals and
/// characters that start no token. They carry no position of their own.
pub mod lex_error;
/// Parsing errors.
///
/// Defines the positioned errors raised while tokenizing and parsing: wrapped
/// lexical errors, unexpected tokens, missing tokens and truncated input.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains the errors raised while evaluating a constant expression, such as
/// unknown constants, missing operands, division by zero and type mismatches.
pub mod eval_error;

pub use eval_error::EvalError;
pub use lex_error::LexError;
pub use parse_error::ParseError;

/// The single error kind surfaced by the translator.
///
/// Every failure aborts the whole translation; the first error in source
/// order is the one reported. Both variants carry the line and column of the
/// offending token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A lexical or structural error.
    Parse(ParseError),
    /// A semantic error inside a constant expression.
    Eval(EvalError),
}

impl Error {
    /// The 1-based source line of the offending token.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.position().0
    }

    /// The 1-based source column of the offending token.
    #[must_use]
    pub const fn column(&self) -> usize {
        self.position().1
    }

    const fn position(&self) -> (usize, usize) {
        match self {
            Self::Parse(e) => e.position(),
            Self::Eval(e) => e.position(),
        }
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<EvalError> for Error {
    fn from(e: EvalError) -> Self {
        Self::Eval(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Eval(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Eval(e) => Some(e),
        }
    }
}
