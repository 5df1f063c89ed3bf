use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            utils::{KEYWORDS, parse_number},
        },
        lexer::Token,
        parser::literal::parse_matrix_literal,
        value::core::Matrix,
    },
};

impl Context {
    /// Parses prefix operators and primary expressions.
    ///
    /// The rule is:
    /// ```text
    /// unary := "!" unary | "-" unary
    ///        | "rank" unary | "gem" unary | "det" unary
    ///        | "(" addsub ")" | "[" literal | NUMBER | NAME
    /// ```
    ///
    /// # Parameters
    /// - `tokens`: Token stream with column information.
    ///
    /// # Returns
    /// The operand value.
    ///
    /// # Errors
    /// - `ParseError::ExpectedClosingParen` for an unbalanced `(`.
    /// - `ParseError::UnexpectedToken` for a token that cannot start an
    ///   operand.
    /// - `ParseError::UnexpectedEndOfInput` if the line ends first.
    /// - `RuntimeError::UnknownVariable` for an unbound name.
    pub fn parse_unary<'a, I>(&mut self, tokens: &mut Peekable<I>) -> EvalResult<Matrix>
        where I: Iterator<Item = &'a (Token, usize)> + Clone
    {
        let Some((token, column)) = tokens.next() else {
            return Err(ParseError::UnexpectedEndOfInput.into());
        };

        match token {
            Token::Bang => Ok(self.parse_unary(tokens)?.transpose()),
            Token::Minus => Ok(self.parse_unary(tokens)?.neg()),
            Token::LParen => {
                let value = self.parse_addsub(tokens)?;
                match tokens.next() {
                    Some((Token::RParen, _)) => Ok(value),
                    _ => Err(ParseError::ExpectedClosingParen { column: *column }.into()),
                }
            },
            Token::LBracket => parse_matrix_literal(tokens, *column),
            Token::Word(word) => match word.as_str() {
                "rank" => Ok(self.parse_unary(tokens)?.rank()),
                "gem" => Ok(self.parse_unary(tokens)?.gem()),
                "det" => Ok(self.parse_unary(tokens)?.det()?),
                _ if KEYWORDS.contains(&word.as_str()) => {
                    Err(ParseError::UnexpectedToken { token:  word.clone(),
                                                      column: *column, }.into())
                },
                _ => match parse_number(word) {
                    Some(value) => Ok(Matrix::Number(value)),
                    None => self.lookup(word),
                },
            },
            other => Err(ParseError::UnexpectedToken { token:  other.to_string(),
                                                       column: *column, }.into()),
        }
    }
}
