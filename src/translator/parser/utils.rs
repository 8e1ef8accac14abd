use crate::{
    error::{Error, ParseError},
    translator::{
        parser::core::{ParseResult, Parser},
        tokenizer::{Token, TokenKind},
    },
};

impl<'src> Parser<'src> {
    /// Consumes the current token if it is `kind`.
    ///
    /// # Parameters
    /// - `kind`: The required token.
    /// - `expected`: Description of the requirement used in the error.
    ///
    /// # Returns
    /// The consumed token.
    ///
    /// # Errors
    /// Returns a `ParseError` if the current token is a different one,
    /// including the end of input.
    pub(in crate::translator::parser) fn expect(&mut self,
                                                kind: &TokenKind,
                                                expected: &'static str)
                                                -> ParseResult<Token<'src>> {
        if &self.current.kind == kind {
            return self.advance();
        }

        Err(self.expected(expected))
    }

    /// Consumes a bare name and returns it.
    ///
    /// # Errors
    /// Returns a `ParseError` if the current token is not a name.
    pub(in crate::translator::parser) fn expect_name(&mut self,
                                                     expected: &'static str)
                                                     -> ParseResult<String> {
        let TokenKind::Name(name) = &self.current.kind else {
            return Err(self.expected(expected));
        };
        let name = name.clone();
        self.advance()?;

        Ok(name)
    }

    /// Parses a comma-separated list of items until a closing token.
    ///
    /// The current token must be the first item or the closing token; an
    /// immediately encountered closing token produces an empty list. After
    /// each item the parser expects either a comma, to continue the list, or
    /// the closing token, to end it. A comma directly before the closing
    /// token leaves `parse_item` facing the closing token, which it rejects.
    ///
    /// Grammar (simplified): `list := (item ("," item)*)? closing`
    ///
    /// # Parameters
    /// - `parse_item`: Function used to parse each list element.
    /// - `closing`: The token that terminates the list.
    /// - `context`: Name of the construct for error messages.
    ///
    /// # Returns
    /// A vector of parsed items.
    ///
    /// # Errors
    /// Returns a `ParseError` if:
    /// - an item fails to parse,
    /// - an unexpected token follows an item,
    /// - the input ends before the closing token.
    pub(in crate::translator::parser) fn parse_comma_separated<T>(
        &mut self,
        parse_item: impl Fn(&mut Self) -> ParseResult<T>,
        closing: &TokenKind,
        context: &'static str)
        -> ParseResult<Vec<T>> {
        let mut items = Vec::new();
        if &self.current.kind == closing {
            self.advance()?;

            return Ok(items);
        }
        loop {
            items.push(parse_item(self)?);
            match &self.current.kind {
                TokenKind::Comma => {
                    self.advance()?;
                },
                kind if kind == closing => {
                    self.advance()?;
                    break;
                },
                TokenKind::Eof => return Err(self.end_of_input(context)),
                _ => {
                    return Err(ParseError::ExpectedToken { expected: format!("',' or {closing}"),
                                                           found:    self.current.kind.to_string(),
                                                           line:     self.current.line,
                                                           column:   self.current.column, }.into());
                },
            }
        }
        Ok(items)
    }

    /// Builds an `ExpectedToken` error for the current token.
    fn expected(&self, expected: &'static str) -> Error {
        ParseError::ExpectedToken { expected: expected.to_string(),
                                    found:    self.current.kind.to_string(),
                                    line:     self.current.line,
                                    column:   self.current.column, }.into()
    }
}
