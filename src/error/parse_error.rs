/// Represents all errors that can occur while reading a statement.
///
/// Columns are byte offsets into the input line, counted from zero.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Found a token that does not start or continue any construct.
    #[error("Unexpected token '{token}' at column {column}")]
    UnexpectedToken {
        /// The token encountered.
        token:  String,
        /// Where the token starts.
        column: usize,
    },
    /// The line ended while an operand was still expected.
    #[error("Unexpected end of input")]
    UnexpectedEndOfInput,
    /// A closing parenthesis `)` was expected but not found.
    #[error("Expected ')' to close the parenthesis opened at column {column}")]
    ExpectedClosingParen {
        /// Where the opening parenthesis is.
        column: usize,
    },
    /// A closing bracket `]` was expected but not found.
    #[error("Expected ']' to close the matrix opened at column {column}")]
    ExpectedClosingBracket {
        /// Where the opening bracket is.
        column: usize,
    },
    /// A row of a matrix literal contained no numbers.
    #[error("Empty row in the matrix opened at column {column}")]
    EmptyRow {
        /// Where the opening bracket is.
        column: usize,
    },
    /// `load` or `save` was not followed by a matrix name.
    #[error("Expected a matrix name after '{keyword}'")]
    ExpectedName {
        /// The statement keyword.
        keyword: String,
    },
    /// Tried to bind a keyword or a numeric literal.
    #[error("Identifier '{name}' is reserved")]
    IdentifierReserved {
        /// The reserved identifier.
        name: String,
    },
    /// Found extra tokens after a complete statement.
    #[error("Ignored from '{token}'")]
    IgnoredInput {
        /// The first token left over.
        token: String,
    },
}
