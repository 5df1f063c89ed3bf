/// The matrix type and its queries.
///
/// Defines the `Matrix` sum type with its seven representations, element
/// access, the structural predicates and the classification label.
pub mod core;
/// Dense and packed element storage used by the representations.
pub mod grid;
/// Reclassification into the most specific representation.
///
/// Every operation that produces a new matrix passes it through
/// `normalize` before returning it.
pub mod normalize;
/// Elementwise arithmetic, products, division and powers.
pub mod arithmetic;
/// Transpose, concatenation and cropping.
pub mod structure;
/// Gaussian elimination with the determinant and rank built on it.
pub mod elimination;
