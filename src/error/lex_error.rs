/// Represents the failures the raw lexer can report.
///
/// These errors carry no position: the tokenizer attaches the line and column
/// of the offending lexeme when it wraps them into a
/// [`ParseError::Lexical`](crate::error::ParseError::Lexical).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LexError {
    /// No lexical rule matches the input at this position.
    #[default]
    UnexpectedCharacter,
    /// A `@"` string literal reached the end of input before its closing
    /// quote.
    UnclosedString,
    /// A `<#` comment reached the end of input before `#>`.
    UnclosedComment,
    /// An opening parenthesis was not immediately followed by `define`.
    MalformedDefine {
        /// The word that followed `(`, empty if none did.
        found: String,
    },
    /// A numeric literal without any digits, such as a bare `0x`.
    MissingDigits,
    /// A character that is not a digit in the literal's radix.
    InvalidDigit {
        /// The offending character.
        found: char,
    },
    /// A literal value does not fit into a signed 64-bit integer.
    LiteralTooLarge,
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter => write!(f, "Unexpected character"),
            Self::UnclosedString => write!(f, "Unclosed string"),
            Self::UnclosedComment => write!(f, "Unclosed multi-line comment"),
            Self::MalformedDefine { found } if found.is_empty() => {
                write!(f, "Expected 'define' after '('")
            },
            Self::MalformedDefine { found } => {
                write!(f, "Expected 'define' after '(', found '{found}'")
            },
            Self::MissingDigits => write!(f, "Numeric literal has no digits"),
            Self::InvalidDigit { found } => write!(f, "Invalid digit '{found}' in numeric literal"),
            Self::LiteralTooLarge => write!(f, "Integer literal is too large"),
        }
    }
}

impl std::error::Error for LexError {}
