use std::iter::Peekable;

use crate::interpreter::{
    evaluator::core::{Context, EvalResult},
    lexer::Token,
    value::core::Matrix,
};

impl Context {
    /// Parses and evaluates an expression.
    ///
    /// This is the loosest precedence level; it delegates to
    /// [`Context::parse_addsub`].
    ///
    /// The rule is: `expr := addsub`
    ///
    /// # Parameters
    /// - `tokens`: Token stream with column information.
    ///
    /// # Returns
    /// The value of the expression.
    pub fn parse_expression<'a, I>(&mut self, tokens: &mut Peekable<I>) -> EvalResult<Matrix>
        where I: Iterator<Item = &'a (Token, usize)> + Clone
    {
        self.parse_addsub(tokens)
    }
}
