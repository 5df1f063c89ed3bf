/// Value-model errors.
///
/// Raised by matrix construction and by every matrix operation: dimension
/// mismatches, out-of-range element access, operands outside an operation's
/// domain and division by zero.
pub mod matrix_error;
/// Parsing errors.
///
/// Defines all error types that can occur while reading a statement: unexpected
/// tokens, unbalanced brackets and parentheses, malformed matrix literals and
/// input left over after a complete statement.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised while a statement talks to the session: unbound
/// names and failures of the storage collaborator. Value-model errors are
/// carried through unchanged.
pub mod runtime_error;
/// Configuration errors.
///
/// Raised while resolving the working directory from the configuration file.
pub mod config_error;

pub use config_error::ConfigError;
pub use matrix_error::MatrixError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any error that aborts the evaluation of a single statement.
///
/// The session catches it at the statement boundary, prints its message and
/// carries on with the next line.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The statement could not be read.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The statement was read but failed while evaluating.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl From<MatrixError> for Error {
    fn from(error: MatrixError) -> Self {
        Self::Runtime(RuntimeError::Matrix(error))
    }
}
