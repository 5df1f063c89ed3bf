/// The evaluator holds the state of a calculator session.
///
/// It owns the named matrices and the storage used by `load` and `save`, and
/// runs one line at a time. There is no syntax tree: the parser applies every
/// operation as soon as its operands are known.
///
/// # Responsibilities
/// - Keeps the bindings from names to matrices.
/// - Evaluates a line and reports values or errors at the statement boundary.
/// - Tracks whether the session has been exited.
pub mod evaluator;
/// The lexer splits a line into tokens.
///
/// Each punctuation character is a token; any other run of non-space
/// characters is a word. Whether a word is a number, a keyword or a name is
/// left to the parser.
pub mod lexer;
/// The parser reads tokens by recursive descent, one function per precedence
/// level, and evaluates as it goes.
///
/// # Responsibilities
/// - Applies precedence and associativity of the matrix operators.
/// - Reads matrix literals and statements.
/// - Reports syntax errors with the column they occur at.
pub mod parser;
/// The value module defines the matrix value model.
///
/// Matrices are kept in the most specific representation that fits them and
/// are narrowed again after every operation.
///
/// # Responsibilities
/// - Defines the `Matrix` enum and its storage.
/// - Implements arithmetic, structural operations and elimination.
/// - Classifies results into their most specific kind.
pub mod value;
