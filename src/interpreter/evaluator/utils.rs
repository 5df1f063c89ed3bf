/// Words with a meaning of their own in the grammar.
pub const KEYWORDS: [&str; 6] = ["exit", "load", "save", "rank", "gem", "det"];

/// Reads a word as a number.
///
/// Accepts everything Rust's `f64` parser accepts, including `inf` and `NaN`.
///
/// # Example
/// ```
/// use matix::interpreter::evaluator::utils::parse_number;
///
/// assert_eq!(parse_number("2.5e1"), Some(25.0));
/// assert_eq!(parse_number("a"), None);
/// ```
#[must_use]
pub fn parse_number(word: &str) -> Option<f64> {
    word.parse().ok()
}

/// Checks whether a name cannot be bound: keywords and anything that reads as
/// a number.
///
/// # Example
/// ```
/// use matix::interpreter::evaluator::utils::is_reserved_identifier;
///
/// assert!(is_reserved_identifier("det"));
/// assert!(is_reserved_identifier("12"));
/// assert!(!is_reserved_identifier("m1"));
/// ```
#[must_use]
pub fn is_reserved_identifier(name: &str) -> bool {
    KEYWORDS.contains(&name) || parse_number(name).is_some()
}
