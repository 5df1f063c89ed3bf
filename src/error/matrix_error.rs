/// Represents all errors raised by the matrix value model.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatrixError {
    /// Operand dimensions do not fit the operation, or a grid is ragged.
    #[error("{details}")]
    Shape {
        /// Which dimensions disagreed.
        details: String,
    },
    /// An element was requested outside the matrix.
    #[error("Index ({row}, {col}) is out of range for a {rows}x{cols} matrix")]
    Index {
        /// The requested row.
        row:  usize,
        /// The requested column.
        col:  usize,
        /// Number of rows of the matrix.
        rows: usize,
        /// Number of columns of the matrix.
        cols: usize,
    },
    /// An operand is outside the domain of the operation, such as a
    /// non-square base for a power or a malformed crop selector.
    #[error("{details}")]
    Domain {
        /// Why the operand was rejected.
        details: String,
    },
    /// An arithmetic failure. Only division by an exact zero raises it.
    #[error("{details}")]
    Arithmetic {
        /// Details about the failure.
        details: String,
    },
}

impl MatrixError {
    pub(crate) fn shape(details: impl Into<String>) -> Self {
        Self::Shape { details: details.into() }
    }

    pub(crate) fn domain(details: impl Into<String>) -> Self {
        Self::Domain { details: details.into() }
    }
}
