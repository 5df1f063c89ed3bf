use std::iter::Peekable;

use log::debug;

use crate::{
    error::ParseError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            utils::is_reserved_identifier,
        },
        lexer::Token,
        parser::utils::{expect_end, parse_name},
        value::core::Matrix,
    },
};

/// Returns the target name if the statement is an assignment `NAME = ...`.
fn assignment_target<'a, I>(tokens: &Peekable<I>) -> Option<&'a str>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut lookahead = tokens.clone();
    match (lookahead.next(), lookahead.next()) {
        (Some((Token::Word(name), _)), Some((Token::Equals, _))) => Some(name.as_str()),
        _ => None,
    }
}

impl Context {
    /// Parses and evaluates one statement.
    ///
    /// The statement must use up the whole line. Leftover tokens are reported
    /// before the statement takes any effect, so a failed assignment, `load`
    /// or `exit` changes nothing.
    ///
    /// The rule is:
    /// ```text
    /// statement := NAME "=" expr | "exit" | "load" NAME | "save" NAME | expr
    /// ```
    ///
    /// # Parameters
    /// - `tokens`: Token stream of one line.
    ///
    /// # Returns
    /// `Some(Matrix)` for an expression statement, `None` otherwise.
    pub fn parse_statement<'a, I>(&mut self, tokens: &mut Peekable<I>) -> EvalResult<Option<Matrix>>
        where I: Iterator<Item = &'a (Token, usize)> + Clone
    {
        if let Some(name) = assignment_target(tokens) {
            if is_reserved_identifier(name) {
                return Err(ParseError::IdentifierReserved { name: name.to_string() }.into());
            }
            tokens.next();
            tokens.next();

            let value = self.parse_expression(tokens)?;
            expect_end(tokens)?;
            self.set_variable(name, value);
            return Ok(None);
        }

        match tokens.peek().copied() {
            Some((Token::Word(word), _)) if word == "exit" => {
                tokens.next();
                expect_end(tokens)?;
                debug!("exit requested");
                self.stop();
                Ok(None)
            },
            Some((Token::Word(word), _)) if word == "load" => {
                tokens.next();
                let name = parse_name(tokens, "load")?;
                expect_end(tokens)?;
                self.load(&name)?;
                Ok(None)
            },
            Some((Token::Word(word), _)) if word == "save" => {
                tokens.next();
                let name = parse_name(tokens, "save")?;
                expect_end(tokens)?;
                self.save(&name)?;
                Ok(None)
            },
            _ => {
                let value = self.parse_expression(tokens)?;
                expect_end(tokens)?;
                Ok(Some(value))
            },
        }
    }
}
