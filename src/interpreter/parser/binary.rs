use std::iter::Peekable;

use crate::interpreter::{
    evaluator::core::{Context, EvalResult},
    lexer::Token,
    value::core::Matrix,
};

/// Consumes the next token if it equals `expected`.
fn eat<'a, I>(tokens: &mut Peekable<I>, expected: &Token) -> bool
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    tokens.next_if(|(token, _)| token == expected).is_some()
}

impl Context {
    /// Parses addition and subtraction.
    ///
    /// Handles the left-associative operators `+` and `-`.
    ///
    /// The rule is: `addsub := muldiv (("+" | "-") muldiv)*`
    ///
    /// # Parameters
    /// - `tokens`: Token stream with column information.
    ///
    /// # Returns
    /// The sum or difference, narrowed to its most specific kind.
    pub fn parse_addsub<'a, I>(&mut self, tokens: &mut Peekable<I>) -> EvalResult<Matrix>
        where I: Iterator<Item = &'a (Token, usize)> + Clone
    {
        let mut left = self.parse_muldiv(tokens)?;
        loop {
            if eat(tokens, &Token::Plus) {
                let right = self.parse_muldiv(tokens)?;
                left = left.add(&right)?;
            } else if eat(tokens, &Token::Minus) {
                let right = self.parse_muldiv(tokens)?;
                left = left.sub(&right)?;
            } else {
                break;
            }
        }
        Ok(left)
    }

    /// Parses multiplication and division.
    ///
    /// Handles the left-associative operators `*` and `/`. The first operand
    /// is read at the `&` level, every following operand at the `|` level, so
    /// `a * b & c` stops before the `&`.
    ///
    /// The rule is: `muldiv := and (("*" | "/") or)*`
    ///
    /// # Parameters
    /// - `tokens`: Token stream with column information.
    ///
    /// # Returns
    /// The product or quotient.
    pub fn parse_muldiv<'a, I>(&mut self, tokens: &mut Peekable<I>) -> EvalResult<Matrix>
        where I: Iterator<Item = &'a (Token, usize)> + Clone
    {
        let mut left = self.parse_and(tokens)?;
        loop {
            if eat(tokens, &Token::Star) {
                let right = self.parse_or(tokens)?;
                left = left.prod(&right)?;
            } else if eat(tokens, &Token::Slash) {
                let right = self.parse_or(tokens)?;
                left = left.div(&right)?;
            } else {
                break;
            }
        }
        Ok(left)
    }

    /// Parses vertical concatenation.
    ///
    /// `a & b & c` stacks `a` on top of `b & c`.
    ///
    /// The rule is: `and := or ("&" and)?`
    pub fn parse_and<'a, I>(&mut self, tokens: &mut Peekable<I>) -> EvalResult<Matrix>
        where I: Iterator<Item = &'a (Token, usize)> + Clone
    {
        let top = self.parse_or(tokens)?;
        if eat(tokens, &Token::Ampersand) {
            let bottom = self.parse_and(tokens)?;
            return Ok(top.vconcat(&bottom)?);
        }
        Ok(top)
    }

    /// Parses horizontal concatenation.
    ///
    /// The rule is: `or := power ("|" or)?`
    pub fn parse_or<'a, I>(&mut self, tokens: &mut Peekable<I>) -> EvalResult<Matrix>
        where I: Iterator<Item = &'a (Token, usize)> + Clone
    {
        let left = self.parse_power(tokens)?;
        if eat(tokens, &Token::Pipe) {
            let right = self.parse_or(tokens)?;
            return Ok(left.hconcat(&right)?);
        }
        Ok(left)
    }

    /// Parses exponentiation.
    ///
    /// Right-associative: `a ^ b ^ c` is `a ^ (b ^ c)`.
    ///
    /// The rule is: `power := backslash ("^" power)?`
    pub fn parse_power<'a, I>(&mut self, tokens: &mut Peekable<I>) -> EvalResult<Matrix>
        where I: Iterator<Item = &'a (Token, usize)> + Clone
    {
        let base = self.parse_backslash(tokens)?;
        if eat(tokens, &Token::Caret) {
            let exponent = self.parse_power(tokens)?;
            return Ok(base.power(&exponent)?);
        }
        Ok(base)
    }

    /// Parses cropping.
    ///
    /// `m \ s` cuts the region described by the selector `s` out of `m`.
    ///
    /// The rule is: `backslash := unary ("\" backslash)?`
    pub fn parse_backslash<'a, I>(&mut self, tokens: &mut Peekable<I>) -> EvalResult<Matrix>
        where I: Iterator<Item = &'a (Token, usize)> + Clone
    {
        let source = self.parse_unary(tokens)?;
        if eat(tokens, &Token::Backslash) {
            let selector = self.parse_backslash(tokens)?;
            return Ok(source.crop(&selector)?);
        }
        Ok(source)
    }
}
