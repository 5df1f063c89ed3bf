/// Entry point of expression parsing.
pub mod core;

/// Binary operators, from `+` down to the crop operator `\`.
///
/// Every level parses its operands and applies the matching matrix
/// operation as soon as both are known.
pub mod binary;

/// Prefix operators, keywords, parentheses, numbers and names.
pub mod unary;

/// Matrix literals such as `[1 2 & 3 4]`.
pub mod literal;

/// Statements: `exit`, `load`, `save`, assignment and bare expressions.
pub mod statement;

/// Token helpers shared by the parsing functions.
pub mod utils;
