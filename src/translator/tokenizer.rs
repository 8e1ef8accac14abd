use logos::Logos;

use crate::{
    error::{Error, LexError, ParseError},
    translator::lexer::{Builtin, Operator, RawToken},
};

/// The kind of a token handed to the parser.
///
/// Comment and whitespace lexemes never appear here; they are consumed inside
/// the [`Tokenizer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// `(define`
    Define,
    /// `)`, closing a define form.
    CloseParen,
    /// `.{`, the start of a constant expression.
    ExprStart,
    /// `}.`, the end of a constant expression.
    ExprEnd,
    /// `[`
    ArrayStart,
    /// `]`
    ArrayEnd,
    /// `{`
    BlockStart,
    /// `}`
    BlockEnd,
    /// `,`
    Comma,
    /// An unescaped string literal.
    Str(String),
    /// A decimal integer literal.
    Decimal(i64),
    /// A hexadecimal integer literal.
    Hex(i64),
    /// A bare name.
    Name(String),
    /// One of `+ - * /`.
    Operator(Operator),
    /// A built-in function name.
    Function(Builtin),
    /// The end of input. Repeats forever once reached.
    Eof,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Define => write!(f, "'(define'"),
            Self::CloseParen => write!(f, "')'"),
            Self::ExprStart => write!(f, "'.{{'"),
            Self::ExprEnd => write!(f, "'}}.'"),
            Self::ArrayStart => write!(f, "'['"),
            Self::ArrayEnd => write!(f, "']'"),
            Self::BlockStart => write!(f, "'{{'"),
            Self::BlockEnd => write!(f, "'}}'"),
            Self::Comma => write!(f, "','"),
            Self::Str(s) => write!(f, "string {s:?}"),
            Self::Decimal(n) | Self::Hex(n) => write!(f, "integer {n}"),
            Self::Name(name) => write!(f, "name '{name}'"),
            Self::Operator(op) => write!(f, "operator '{op}'"),
            Self::Function(builtin) => write!(f, "function '{builtin}'"),
            Self::Eof => write!(f, "end of input"),
        }
    }
}

/// A token together with its raw lexeme and source position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'src> {
    /// What the token is.
    pub kind:   TokenKind,
    /// The raw source text of the token; empty for end of input.
    pub text:   &'src str,
    /// 1-based line of the first character.
    pub line:   usize,
    /// 1-based column of the first character, counted in characters.
    pub column: usize,
}

/// Pull-based tokenizer over a complete source string.
///
/// Each call to [`Tokenizer::next_token`] produces one token. Once the input
/// is exhausted every further call yields a [`TokenKind::Eof`] token at the
/// end position.
///
/// # Example
/// ```
/// use conflang::translator::tokenizer::{TokenKind, Tokenizer};
///
/// let mut tokens = Tokenizer::new("port 0x1F90 % comment");
///
/// assert_eq!(tokens.next_token().unwrap().kind, TokenKind::Name("port".to_string()));
/// assert_eq!(tokens.next_token().unwrap().kind, TokenKind::Hex(8080));
/// assert_eq!(tokens.next_token().unwrap().kind, TokenKind::Eof);
/// assert_eq!(tokens.next_token().unwrap().kind, TokenKind::Eof);
/// ```
pub struct Tokenizer<'src> {
    lexer:    logos::Lexer<'src, RawToken>,
    source:   &'src str,
    offset:   usize,
    line:     usize,
    column:   usize,
    finished: bool,
}

impl<'src> Tokenizer<'src> {
    /// Creates a tokenizer positioned at line 1, column 1 of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { lexer: RawToken::lexer(source),
               source,
               offset: 0,
               line: 1,
               column: 1,
               finished: false }
    }

    /// Produces the next token.
    ///
    /// # Errors
    /// Returns `ParseError::UnexpectedCharacter` or `ParseError::Lexical`,
    /// positioned at the start of the offending lexeme.
    pub fn next_token(&mut self) -> Result<Token<'src>, Error> {
        loop {
            if self.finished {
                return Ok(self.end_of_input());
            }

            let Some(result) = self.lexer.next() else {
                self.finished = true;
                continue;
            };

            self.advance_to(self.lexer.span().start);
            let text = self.lexer.slice();

            let raw = match result {
                Ok(raw) => raw,
                Err(LexError::UnexpectedCharacter) => {
                    return Err(ParseError::UnexpectedCharacter { found:  text.chars()
                                                                             .next()
                                                                             .unwrap_or_default(),
                                                                 line:   self.line,
                                                                 column: self.column, }.into());
                },
                Err(error) => {
                    return Err(ParseError::Lexical { error,
                                                     line: self.line,
                                                     column: self.column }.into());
                },
            };

            let kind = match raw {
                RawToken::LineComment | RawToken::BlockComment | RawToken::Whitespace => continue,
                RawToken::Define => TokenKind::Define,
                RawToken::CloseParen => TokenKind::CloseParen,
                RawToken::ExprStart => TokenKind::ExprStart,
                RawToken::ExprEnd => TokenKind::ExprEnd,
                RawToken::ArrayStart => TokenKind::ArrayStart,
                RawToken::ArrayEnd => TokenKind::ArrayEnd,
                RawToken::BlockStart => TokenKind::BlockStart,
                RawToken::BlockEnd => TokenKind::BlockEnd,
                RawToken::Comma => TokenKind::Comma,
                RawToken::Str(s) => TokenKind::Str(s),
                RawToken::Decimal(n) => TokenKind::Decimal(n),
                RawToken::Hex(n) => TokenKind::Hex(n),
                RawToken::Name(name) => TokenKind::Name(name),
                RawToken::Operator(op) => TokenKind::Operator(op),
                RawToken::Function(builtin) => TokenKind::Function(builtin),
            };

            return Ok(Token { kind,
                              text,
                              line: self.line,
                              column: self.column });
        }
    }

    fn end_of_input(&mut self) -> Token<'src> {
        self.advance_to(self.source.len());
        Token { kind:   TokenKind::Eof,
                text:   "",
                line:   self.line,
                column: self.column, }
    }

    /// Moves the line/column cursor forward to byte `offset`.
    fn advance_to(&mut self, offset: usize) {
        for c in self.source[self.offset..offset].chars() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.offset = offset;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        let mut tokenizer = Tokenizer::new(source);
        let mut kinds = Vec::new();
        loop {
            let token = tokenizer.next_token().unwrap();
            if token.kind == TokenKind::Eof {
                return kinds;
            }
            kinds.push(token.kind);
        }
    }

    fn lex_error(source: &str) -> Error {
        let mut tokenizer = Tokenizer::new(source);
        loop {
            match tokenizer.next_token() {
                Ok(token) if token.kind == TokenKind::Eof => panic!("{source:?} lexed cleanly"),
                Ok(_) => {},
                Err(e) => return e,
            }
        }
    }

    #[test]
    fn skips_both_comment_forms() {
        let source = "% heading\nkey1 1 % trailing\n<# spans\nlines #> key2 2";
        assert_eq!(kinds(source),
                   vec![TokenKind::Name("key1".into()),
                        TokenKind::Decimal(1),
                        TokenKind::Name("key2".into()),
                        TokenKind::Decimal(2)]);
    }

    #[test]
    fn define_form_and_delimiters() {
        assert_eq!(kinds("(define x .{x 1 +}.) [a, b] {}"),
                   vec![TokenKind::Define,
                        TokenKind::Name("x".into()),
                        TokenKind::ExprStart,
                        TokenKind::Name("x".into()),
                        TokenKind::Decimal(1),
                        TokenKind::Operator(Operator::Add),
                        TokenKind::ExprEnd,
                        TokenKind::CloseParen,
                        TokenKind::ArrayStart,
                        TokenKind::Name("a".into()),
                        TokenKind::Comma,
                        TokenKind::Name("b".into()),
                        TokenKind::ArrayEnd,
                        TokenKind::BlockStart,
                        TokenKind::BlockEnd]);
    }

    #[test]
    fn abs_is_only_a_function_as_a_whole_word() {
        assert_eq!(kinds("abs absolute"),
                   vec![TokenKind::Function(Builtin::Abs), TokenKind::Name("absolute".into())]);
    }

    #[test]
    fn doubled_quotes_are_unescaped() {
        assert_eq!(kinds(r#"@"say ""hi""" @"plain""#),
                   vec![TokenKind::Str("say \"hi\"".into()), TokenKind::Str("plain".into())]);
    }

    #[test]
    fn positions_are_line_and_column() {
        let mut tokenizer = Tokenizer::new("a 1\n  <# x\n #> @\"é\" b");
        let positions: Vec<(usize, usize, &str)> =
            std::iter::from_fn(|| {
                let token = tokenizer.next_token().unwrap();
                (token.kind != TokenKind::Eof).then_some((token.line, token.column, token.text))
            }).collect();

        assert_eq!(positions,
                   vec![(1, 1, "a"), (1, 3, "1"), (3, 5, "@\"é\""), (3, 10, "b")]);
    }

    #[test]
    fn unicode_names_and_whitespace() {
        let mut tokenizer = Tokenizer::new("ключ\u{a0}1\u{b}\n\u{2003}значение_2");
        let positions: Vec<(usize, usize, TokenKind)> =
            std::iter::from_fn(|| {
                let token = tokenizer.next_token().unwrap();
                (token.kind != TokenKind::Eof).then_some((token.line, token.column, token.kind))
            }).collect();

        assert_eq!(positions,
                   vec![(1, 1, TokenKind::Name("ключ".into())),
                        (1, 6, TokenKind::Decimal(1)),
                        (2, 2, TokenKind::Name("значение_2".into()))]);
    }

    #[test]
    fn lexical_errors_are_positioned() {
        assert_eq!(lex_error("key @\"open"),
                   Error::Parse(ParseError::Lexical { error:  LexError::UnclosedString,
                                                      line:   1,
                                                      column: 5, }));
        assert_eq!(lex_error("a 1\n<# never closed"),
                   Error::Parse(ParseError::Lexical { error:  LexError::UnclosedComment,
                                                      line:   2,
                                                      column: 1, }));
        assert_eq!(lex_error("x $"),
                   Error::Parse(ParseError::UnexpectedCharacter { found:  '$',
                                                                  line:   1,
                                                                  column: 3, }));
        assert_eq!(lex_error("(let x 1)"),
                   Error::Parse(ParseError::Lexical { error:  LexError::MalformedDefine { found:
                                                                                             "let".into(), },
                                                      line:   1,
                                                      column: 1, }));
        assert_eq!(lex_error("v 0x"),
                   Error::Parse(ParseError::Lexical { error:  LexError::MissingDigits,
                                                      line:   1,
                                                      column: 3, }));
    }
}
