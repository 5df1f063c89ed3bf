use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        evaluator::{core::EvalResult, utils::{is_reserved_identifier, parse_number}},
        lexer::Token,
    },
};

/// Consumes the next token if it is a word that reads as a number.
pub(in crate::interpreter::parser) fn next_number<'a, I>(tokens: &mut Peekable<I>) -> Option<f64>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let value = match tokens.peek().copied() {
        Some((Token::Word(word), _)) => parse_number(word)?,
        _ => return None,
    };
    tokens.next();
    Some(value)
}

/// Consumes the name that follows `keyword` in a `load` or `save`
/// statement.
///
/// # Errors
/// - `ParseError::ExpectedName` if no word follows.
/// - `ParseError::IdentifierReserved` if the word is a keyword or a number.
pub(in crate::interpreter::parser) fn parse_name<'a, I>(tokens: &mut Peekable<I>,
                                                        keyword: &str)
                                                        -> EvalResult<String>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Word(name), _)) if is_reserved_identifier(name) => {
            Err(ParseError::IdentifierReserved { name: name.clone() }.into())
        },
        Some((Token::Word(name), _)) => Ok(name.clone()),
        _ => Err(ParseError::ExpectedName { keyword: keyword.to_string() }.into()),
    }
}

/// Fails with `ParseError::IgnoredInput` unless every token was consumed.
pub(in crate::interpreter::parser) fn expect_end<'a, I>(tokens: &mut Peekable<I>) -> EvalResult<()>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((token, _)) => Err(ParseError::IgnoredInput { token: token.to_string() }.into()),
        None => Ok(()),
    }
}
