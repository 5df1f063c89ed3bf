use crate::error::MatrixError;

/// Represents all errors that can occur while a statement is evaluated.
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    /// A matrix operation failed.
    #[error(transparent)]
    Matrix(#[from] MatrixError),
    /// Referred to a name that has never been bound.
    #[error("Matrix '{name}' not found")]
    UnknownVariable {
        /// The name of the matrix.
        name: String,
    },
    /// The storage collaborator has no matrix under the requested name.
    #[error("File '{path}' not found")]
    FileNotFound {
        /// The file that was looked up.
        path: String,
    },
    /// The storage collaborator could not persist a matrix.
    #[error("Cannot write to file '{path}'")]
    FileNotWritable {
        /// The file that could not be written.
        path: String,
    },
}
