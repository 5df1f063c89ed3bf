use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        evaluator::core::EvalResult,
        lexer::Token,
        parser::utils::next_number,
        value::core::Matrix,
    },
};

/// Reads one row of numbers, stopping at the first token that is not one.
fn parse_row<'a, I>(tokens: &mut Peekable<I>) -> Vec<f64>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut row = Vec::new();
    while let Some(value) = next_number(tokens) {
        row.push(value);
    }
    row
}

/// Parses the rest of a matrix literal after its opening `[`.
///
/// Rows are separated by `&` and must all have the same length. `[]` is
/// the empty matrix.
///
/// The rule is: `literal := "]" | row ("&" row)* "]"`
///
/// # Parameters
/// - `tokens`: Token stream positioned after the `[`.
/// - `column`: Where the `[` is, for error messages.
///
/// # Returns
/// The literal, narrowed to its most specific kind.
///
/// # Errors
/// - `ParseError::EmptyRow` if a row holds no numbers.
/// - `ParseError::ExpectedClosingBracket` if the literal is not closed.
/// - `MatrixError::Shape` if the rows differ in length.
pub(in crate::interpreter::parser) fn parse_matrix_literal<'a, I>(tokens: &mut Peekable<I>,
                                                                  column: usize)
                                                                  -> EvalResult<Matrix>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if tokens.next_if(|(token, _)| *token == Token::RBracket).is_some() {
        return Ok(Matrix::empty());
    }

    let mut rows = Vec::new();
    loop {
        let row = parse_row(tokens);
        if row.is_empty() {
            return Err(ParseError::EmptyRow { column }.into());
        }
        rows.push(row);

        match tokens.next() {
            Some((Token::Ampersand, _)) => {},
            Some((Token::RBracket, _)) => break,
            _ => return Err(ParseError::ExpectedClosingBracket { column }.into()),
        }
    }
    Ok(Matrix::from_rows(rows)?)
}
