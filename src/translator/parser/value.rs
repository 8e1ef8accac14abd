use crate::translator::{
    evaluator::core::{Evaluator, Operand},
    parser::core::{ParseResult, Parser, Scope},
    tokenizer::TokenKind,
    value::core::Value,
};

impl Parser<'_> {
    /// Parses one value.
    ///
    /// A value is an integer, a string, an array, a block, a constant
    /// expression or a bare name. A bare name directly in front of `.{`
    /// seeds that expression; otherwise it is replaced by the constant it
    /// names, and an unknown name stands for itself.
    ///
    /// Grammar: `value := INT | HEX | STRING | array | block | expr | NAME
    /// expr?`
    ///
    /// # Errors
    /// Returns an error if:
    /// - the current token cannot start a value,
    /// - a nested array, block or expression fails.
    pub(in crate::translator::parser) fn parse_value(&mut self) -> ParseResult<Value> {
        if self.current.kind == TokenKind::ExprStart {
            return self.parse_expression(None);
        }

        let token = match self.current.kind {
            TokenKind::Decimal(_)
            | TokenKind::Hex(_)
            | TokenKind::Str(_)
            | TokenKind::Name(_)
            | TokenKind::ArrayStart
            | TokenKind::BlockStart => self.advance()?,
            _ => return Err(self.unexpected("value")),
        };

        match token.kind {
            TokenKind::Decimal(n) | TokenKind::Hex(n) => Ok(Value::Int(n)),
            TokenKind::Str(s) => Ok(Value::Str(s)),
            TokenKind::Name(name) if self.current.kind == TokenKind::ExprStart => {
                let seed = Evaluator::resolve_seed(&name, &self.constants, token.line, token.column)?;
                self.parse_expression(Some(seed))
            },
            TokenKind::Name(name) => match self.constants.get(&name) {
                Some(value) => Ok(value.clone()),
                None => Ok(Value::Name(name)),
            },
            TokenKind::ArrayStart => {
                let items = self.parse_comma_separated(Self::parse_value, &TokenKind::ArrayEnd, "array")?;
                Ok(Value::Array(items))
            },
            _ => Ok(Value::Table(self.parse_entries(Scope::Block)?)),
        }
    }

    /// Parses and evaluates a `.{ ... }.` region.
    ///
    /// Each token is handed to the evaluator before the next one is read, so
    /// errors surface in source order.
    ///
    /// # Parameters
    /// - `seed`: The operand written in front of the region, if any.
    ///
    /// # Errors
    /// Returns an error if:
    /// - the region is not opened by `.{`,
    /// - the input ends before `}.`,
    /// - evaluation fails.
    pub(in crate::translator::parser) fn parse_expression(&mut self,
                                                          seed: Option<Operand>)
                                                          -> ParseResult<Value> {
        self.expect(&TokenKind::ExprStart, "'.{'")?;

        let mut evaluator = seed.map_or_else(Evaluator::new, Evaluator::with_seed);

        loop {
            match self.current.kind {
                TokenKind::ExprEnd => {
                    let value = evaluator.finish(&self.current)?;
                    self.advance()?;
                    return Ok(value);
                },
                TokenKind::Eof => return Err(self.end_of_input("constant expression")),
                _ => {
                    evaluator.apply(&self.current, &self.constants)?;
                    self.advance()?;
                },
            }
        }
    }
}
