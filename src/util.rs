/// Numeric conversion helpers.
///
/// This module provides safe functions for turning matrix elements into
/// counts, sizes and offsets without silent truncation. Matrix elements are
/// always `f64`; whenever one of them is used as an exponent or a crop
/// extent it goes through these helpers first.
pub mod num;
