use crate::error::LexError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing or parsing.
pub enum ParseError {
    /// A character that starts no token.
    UnexpectedCharacter {
        /// The character encountered.
        found:  char,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// Any other lexical failure, such as an unclosed string.
    Lexical {
        /// The underlying lexer error.
        error:  LexError,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// Found a token that cannot start the construct being parsed.
    UnexpectedToken {
        /// The construct being parsed, such as `value` or `array`.
        context: &'static str,
        /// Description of the token encountered.
        found:   String,
        /// The source line where the error occurred.
        line:    usize,
        /// The source column where the error occurred.
        column:  usize,
    },
    /// A specific token was required but another one was found.
    ExpectedToken {
        /// Description of what was required.
        expected: String,
        /// Description of the token encountered.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
        /// The source column where the error occurred.
        column:   usize,
    },
    /// Reached the end of input inside an unfinished construct.
    UnexpectedEndOfInput {
        /// The construct left open.
        context: &'static str,
        /// The source line where the error occurred.
        line:    usize,
        /// The source column where the error occurred.
        column:  usize,
    },
}

impl ParseError {
    /// Returns the `(line, column)` of the offending token.
    #[must_use]
    pub const fn position(&self) -> (usize, usize) {
        match self {
            Self::UnexpectedCharacter { line, column, .. }
            | Self::Lexical { line, column, .. }
            | Self::UnexpectedToken { line, column, .. }
            | Self::ExpectedToken { line, column, .. }
            | Self::UnexpectedEndOfInput { line, column, .. } => (*line, *column),
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { found, line, column } => {
                write!(f, "Error at {line}:{column}: Unexpected character '{found}'.")
            },
            Self::Lexical { error, line, column } => {
                write!(f, "Error at {line}:{column}: {error}.")
            },
            Self::UnexpectedToken { context,
                                    found,
                                    line,
                                    column, } => {
                write!(f, "Error at {line}:{column}: Unexpected token in {context}: {found}.")
            },
            Self::ExpectedToken { expected,
                                  found,
                                  line,
                                  column, } => {
                write!(f, "Error at {line}:{column}: Expected {expected}, found {found}.")
            },
            Self::UnexpectedEndOfInput { context, line, column } => {
                write!(f, "Error at {line}:{column}: Unexpected end of input in {context}.")
            },
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lexical { error, .. } => Some(error),
            _ => None,
        }
    }
}
