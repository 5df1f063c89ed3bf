/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_INT: f64 = 9_007_199_254_740_991.0;

/// Returns `true` if `value` is finite and its fractional part lies within
/// `tolerance` of zero.
///
/// ## Example
/// ```
/// use matix::util::num::is_integral;
///
/// assert!(is_integral(3.0, f64::EPSILON));
/// assert!(!is_integral(2.5, f64::EPSILON));
/// assert!(!is_integral(f64::NAN, f64::EPSILON));
/// ```
#[must_use]
pub fn is_integral(value: f64, tolerance: f64) -> bool {
    value.is_finite() && (value - value.trunc()).abs() <= tolerance
}

/// Safely converts an `f64` to `usize` if the value is a non-negative integer
/// (within `tolerance`) that fits the safe integer range.
///
/// ## Errors
/// Returns `Err(error)` for negative, fractional, non-finite or oversized
/// values.
///
/// ## Parameters
/// - `value`: The floating-point value to convert.
/// - `tolerance`: How far from an integer the value may be.
/// - `error`: The error to return if the conversion is not exact.
///
/// ## Example
/// ```
/// use matix::util::num::f64_to_usize_checked;
///
/// assert_eq!(f64_to_usize_checked(4.0, f64::EPSILON, "bad"), Ok(4));
/// assert_eq!(f64_to_usize_checked(-1.0, f64::EPSILON, "bad"), Err("bad"));
/// assert_eq!(f64_to_usize_checked(0.5, f64::EPSILON, "bad"), Err("bad"));
/// ```
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn f64_to_usize_checked<E>(value: f64, tolerance: f64, error: E) -> Result<usize, E> {
    if !is_integral(value, tolerance) || value < 0.0 || value > MAX_SAFE_INT {
        return Err(error);
    }
    Ok(value.trunc() as usize)
}

/// Converts a count to `f64`.
///
/// Counts in this crate are matrix dimensions and ranks, which stay far below
/// `2^53`.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn usize_to_f64(value: usize) -> f64 {
    value as f64
}
