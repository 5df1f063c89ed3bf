use std::collections::HashMap;

use log::debug;

use crate::{
    error::{Error, RuntimeError},
    interpreter::{lexer::tokenize, value::core::Matrix},
    storage::MatrixStore,
};

/// Result type used by the evaluator.
///
/// Evaluation reads and computes in one pass, so every evaluation function
/// returns either a value of type `T` or the syntax or runtime error that
/// stopped the statement.
pub type EvalResult<T> = Result<T, Error>;

/// Stores the state of one calculator session.
///
/// This struct holds the named matrices, the storage collaborator used by
/// `load` and `save`, and whether the session is still running.
///
/// ## Usage
///
/// `Context` is created once per session and fed one line at a time through
/// [`Context::eval_line`]. A failed statement leaves the bindings exactly as
/// they were before it.
pub struct Context {
    variables: HashMap<String, Matrix>,
    store:     Box<dyn MatrixStore>,
    running:   bool,
}

impl Context {
    /// Creates a running session with no bindings that loads and saves
    /// through `store`.
    #[must_use]
    pub fn new(store: impl MatrixStore + 'static) -> Self {
        Self { variables: HashMap::new(),
               store:     Box::new(store),
               running:   true, }
    }

    /// Evaluates one line of input.
    ///
    /// This is the main entry point for evaluation. The line holds exactly one
    /// statement; any token left after it is reported as
    /// `ParseError::IgnoredInput` and the statement has no effect.
    ///
    /// # Returns
    /// `Some(Matrix)` for an expression, `None` for assignments, `load`,
    /// `save` and `exit`.
    ///
    /// # Example
    /// ```
    /// use matix::{interpreter::evaluator::core::Context, storage::DirectoryStore};
    ///
    /// let mut context = Context::new(DirectoryStore::new("."));
    /// assert!(context.eval_line("a = [1 2 & 3 4]").unwrap().is_none());
    ///
    /// let squared = context.eval_line("a ^ 2").unwrap().unwrap();
    /// assert_eq!(squared.label(), "Square Matrix");
    /// assert_eq!(squared.to_string(), "7 10 \n15 22 \n");
    ///
    /// let err = context.eval_line("[1 2] / 0").unwrap_err();
    /// assert_eq!(err.to_string(), "Division by zero");
    /// ```
    pub fn eval_line(&mut self, line: &str) -> EvalResult<Option<Matrix>> {
        let tokens = tokenize(line);
        let mut iter = tokens.iter().peekable();

        let result = self.parse_statement(&mut iter);
        debug!("evaluated '{}': {}",
               line.trim(),
               match &result {
                   Ok(Some(value)) => value.label(),
                   Ok(None) => "no value",
                   Err(_) => "error",
               });
        result
    }

    /// Returns `false` once an `exit` statement has been evaluated.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Looks up a bound matrix.
    #[must_use]
    pub fn get_variable(&self, name: &str) -> Option<&Matrix> {
        self.variables.get(name)
    }

    /// Binds `value` to `name`, replacing any previous binding.
    pub fn set_variable(&mut self, name: &str, value: Matrix) {
        debug!("binding '{name}' to a {}", value.label());
        self.variables.insert(name.to_string(), value);
    }

    pub(crate) fn lookup(&self, name: &str) -> EvalResult<Matrix> {
        self.get_variable(name)
            .cloned()
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string() }.into())
    }

    /// Reads `name` through the store and binds the normalized result.
    pub(crate) fn load(&mut self, name: &str) -> EvalResult<()> {
        let rows = self.store.load(name)?;
        let matrix = Matrix::from_rows(rows)?;
        self.set_variable(name, matrix);
        Ok(())
    }

    /// Writes the matrix bound to `name` through the store.
    pub(crate) fn save(&self, name: &str) -> EvalResult<()> {
        let matrix = self.get_variable(name)
                         .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string() })?;
        self.store.save(name, matrix)?;
        Ok(())
    }

    pub(crate) const fn stop(&mut self) {
        self.running = false;
    }
}
