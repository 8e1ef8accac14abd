use std::mem;

use crate::{
    error::{Error, ParseError},
    translator::{
        tokenizer::{Token, TokenKind, Tokenizer},
        value::{
            config::{Config, SymbolTable},
            core::Value,
        },
    },
};

pub type ParseResult<T> = Result<T, Error>;

/// Where a run of entries ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(in crate::translator::parser) enum Scope {
    /// The top level, closed by the end of input.
    TopLevel,
    /// A `{ ... }` block, closed by `}`.
    Block,
}

impl Scope {
    const fn context(self) -> &'static str {
        match self {
            Self::TopLevel => "top level",
            Self::Block => "block",
        }
    }
}

/// Recursive-descent parser for the configuration language.
///
/// The parser owns the tokenizer, one token of lookahead and the symbol table
/// of constants defined so far. It never backtracks: every decision is made
/// from the current token alone.
///
/// Grammar:
/// ```text
///     config  := entry* EOF
///     entry   := "(define" NAME value ")"
///              | NAME value
///     value   := INT | HEX | STRING | array | block | expr | NAME expr?
///     array   := "[" (value ("," value)*)? "]"
///     block   := "{" entry* "}"
///     expr    := ".{" (INT | HEX | NAME | OP | "abs")* "}."
/// ```
///
/// # Example
/// ```
/// use conflang::translator::{parser::core::Parser, value::core::Value};
///
/// let mut parser = Parser::new("(define base 8000)\nport .{base 80 +}.").unwrap();
/// let config = parser.parse().unwrap();
///
/// assert_eq!(config.get("port"), Some(&Value::Int(8080)));
/// assert_eq!(parser.constants().get("base"), Some(&Value::Int(8000)));
/// ```
pub struct Parser<'src> {
    tokens:                                      Tokenizer<'src>,
    pub(in crate::translator::parser) current:   Token<'src>,
    pub(in crate::translator::parser) constants: SymbolTable,
}

impl<'src> Parser<'src> {
    /// Creates a parser and reads the first token of `source`.
    ///
    /// # Errors
    /// Returns the lexical error of the first token, if any.
    pub fn new(source: &'src str) -> ParseResult<Self> {
        let mut tokens = Tokenizer::new(source);
        let current = tokens.next_token()?;

        Ok(Self { tokens,
                  current,
                  constants: SymbolTable::new() })
    }

    /// Parses the whole input into a configuration.
    ///
    /// Stops at the first error; no partial configuration is returned.
    ///
    /// # Errors
    /// The first lexical, structural or evaluation error in source order.
    pub fn parse(&mut self) -> ParseResult<Config> {
        self.parse_entries(Scope::TopLevel)
    }

    /// The constants defined so far.
    #[must_use]
    pub const fn constants(&self) -> &SymbolTable {
        &self.constants
    }

    /// Consumes the current token and returns it, pulling the next one.
    pub(in crate::translator::parser) fn advance(&mut self) -> ParseResult<Token<'src>> {
        let next = self.tokens.next_token()?;
        Ok(mem::replace(&mut self.current, next))
    }

    /// Parses entries until the end of `scope`.
    ///
    /// At the top level the loop ends at end of input. In a block it ends at
    /// `}`, which is consumed; end of input inside a block is an error.
    pub(in crate::translator::parser) fn parse_entries(&mut self,
                                                       scope: Scope)
                                                       -> ParseResult<Config> {
        let mut config = Config::new();

        loop {
            match &self.current.kind {
                TokenKind::Eof if scope == Scope::TopLevel => return Ok(config),
                TokenKind::Eof => return Err(self.end_of_input(scope.context())),
                TokenKind::BlockEnd if scope == Scope::Block => {
                    self.advance()?;
                    return Ok(config);
                },
                TokenKind::Define => self.parse_define()?,
                TokenKind::Name(_) => {
                    let (key, value) = self.parse_pair()?;
                    config.insert(key, value);
                },
                _ => return Err(self.unexpected(scope.context())),
            }
        }
    }

    /// Parses `(define NAME value)` and stores the constant.
    fn parse_define(&mut self) -> ParseResult<()> {
        self.advance()?;
        let name = self.expect_name("a constant name after '(define'")?;
        let value = self.parse_value()?;
        self.expect(&TokenKind::CloseParen, "')' to close the define form")?;

        self.constants.define(name, value);
        Ok(())
    }

    /// Parses `NAME value`, where a value starting with `.{` is evaluated
    /// without a seed.
    fn parse_pair(&mut self) -> ParseResult<(String, Value)> {
        let key = self.expect_name("a key")?;

        let value = if self.current.kind == TokenKind::ExprStart {
            self.parse_expression(None)?
        } else {
            self.parse_value()?
        };

        Ok((key, value))
    }
}

impl Parser<'_> {
    /// Builds an `UnexpectedToken` error for the current token, or an
    /// `UnexpectedEndOfInput` error if the input is exhausted.
    pub(in crate::translator::parser) fn unexpected(&self, context: &'static str) -> Error {
        if self.current.kind == TokenKind::Eof {
            return self.end_of_input(context);
        }

        ParseError::UnexpectedToken { context,
                                      found: self.current.kind.to_string(),
                                      line: self.current.line,
                                      column: self.current.column }.into()
    }

    pub(in crate::translator::parser) fn end_of_input(&self, context: &'static str) -> Error {
        ParseError::UnexpectedEndOfInput { context,
                                           line: self.current.line,
                                           column: self.current.column }.into()
    }
}
