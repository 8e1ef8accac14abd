use logos::Logos;

use crate::{
    error::LexError,
    util::num::{parse_decimal, parse_hex},
};

/// Represents a raw lexeme recognized by the scanner.
///
/// This is the `logos` level of tokenization. It still contains comment and
/// whitespace variants; the [`Tokenizer`](super::tokenizer::Tokenizer) drops
/// them and attaches source positions to everything else, so nothing in this
/// enum reaches the parser directly.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(error = LexError)]
pub enum RawToken {
    /// `% comments` running to the end of the line.
    #[regex(r"%[^\n]*", logos::skip, allow_greedy = true)]
    LineComment,
    /// ```text
    /// <# multi-line comments #>
    /// ```
    #[token("<#", skip_block_comment)]
    BlockComment,
    /// `(define`, the opening parenthesis and the keyword as one lexeme.
    #[regex(r"\([a-zA-Z0-9_]*", lex_define)]
    Define,
    /// `)`
    #[token(")")]
    CloseParen,
    /// `.{`
    #[token(".{")]
    ExprStart,
    /// `}.`
    #[token("}.")]
    ExprEnd,
    /// `[`
    #[token("[")]
    ArrayStart,
    /// `]`
    #[token("]")]
    ArrayEnd,
    /// `{`
    #[token("{")]
    BlockStart,
    /// `}`
    #[token("}")]
    BlockEnd,
    /// `,`
    #[token(",")]
    Comma,
    /// String literals such as `@"text"`, already unescaped.
    #[token("@\"", lex_string)]
    Str(String),
    /// Decimal integer literals such as `8080`.
    #[regex(r"[0-9]+", |lex| parse_decimal(lex.slice()))]
    Decimal(i64),
    /// Hexadecimal integer literals such as `0xFF`.
    #[regex(r"0[xX][0-9a-fA-F]*", |lex| parse_hex(lex.slice()))]
    Hex(i64),
    /// `abs`
    #[token("abs", |_| Builtin::Abs)]
    Function(Builtin),
    /// Bare names; constant names, keys or bare-word values.
    ///
    /// A name starts with a lowercase letter of any script and continues
    /// with letters, digits and underscores.
    #[regex(r"\p{Ll}[\p{L}\p{N}_]*", |lex| lex.slice().to_string())]
    Name(String),
    /// `+`, `-`, `*` and `/`.
    #[token("+", |_| Operator::Add)]
    #[token("-", |_| Operator::Sub)]
    #[token("*", |_| Operator::Mul)]
    #[token("/", |_| Operator::Div)]
    Operator(Operator),
    /// Any Unicode whitespace.
    #[regex(r"\s+", logos::skip)]
    Whitespace,
}

/// Arithmetic operators accepted inside constant expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{symbol}")
    }
}

/// Built-in functions accepted inside constant expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    /// `abs`, the absolute value of an integer.
    Abs,
}

impl std::fmt::Display for Builtin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Abs => write!(f, "abs"),
        }
    }
}

/// Accepts `(define` and rejects any other parenthesized word.
///
/// The regex has already consumed `(` and the identifier characters that
/// follow it, so the slice is the complete construct.
fn lex_define(lex: &logos::Lexer<RawToken>) -> Result<(), LexError> {
    match lex.slice() {
        "(define" => Ok(()),
        slice => Err(LexError::MalformedDefine { found: slice[1..].to_string() }),
    }
}

/// Reads the body of a string literal after its opening `@"`.
///
/// A doubled quote `""` stands for one literal quote character; a single
/// quote ends the literal. On failure the rest of the input is consumed.
///
/// # Errors
/// `LexError::UnclosedString` if the input ends before the closing quote.
fn lex_string(lex: &mut logos::Lexer<RawToken>) -> Result<String, LexError> {
    let remainder = lex.remainder();
    let mut value = String::new();
    let mut chars = remainder.char_indices().peekable();

    while let Some((index, c)) = chars.next() {
        if c != '"' {
            value.push(c);
            continue;
        }
        if chars.next_if(|&(_, next)| next == '"').is_some() {
            value.push('"');
            continue;
        }
        lex.bump(index + 1);
        return Ok(value);
    }

    lex.bump(remainder.len());
    Err(LexError::UnclosedString)
}

/// Skips a multi-line comment body up to and including `#>`.
///
/// # Errors
/// `LexError::UnclosedComment` if the input ends before `#>`.
fn skip_block_comment(lex: &mut logos::Lexer<RawToken>) -> Result<(), LexError> {
    let remainder = lex.remainder();
    if let Some(end) = remainder.find("#>") {
        lex.bump(end + 2);
        Ok(())
    } else {
        lex.bump(remainder.len());
        Err(LexError::UnclosedComment)
    }
}
