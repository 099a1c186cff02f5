use crate::error::MathError;

/// Converts an `i64` to `f64`.
///
/// Values beyond `2^53` in absolute value are rounded to the nearest
/// representable real, as any mixed integer and real arithmetic would.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Converts an `f64` to `i64` if the value is finite, within range, and not
/// fractional.
///
/// ## Errors
/// Returns `InvalidArgument` for non-finite or fractional values and
/// `Overflow` for values out of the `i64` range.
///
/// ## Example
/// ```
/// use evil::{MathError, util::num::f64_to_i64_exact};
///
/// assert_eq!(f64_to_i64_exact(1000.0), Ok(1000));
/// assert!(matches!(f64_to_i64_exact(1.5), Err(MathError::InvalidArgument { .. })));
/// assert!(matches!(f64_to_i64_exact(1e20), Err(MathError::Overflow { .. })));
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
pub fn f64_to_i64_exact(value: f64) -> Result<i64, MathError> {
    if !value.is_finite() {
        return Err(MathError::InvalidArgument { details: format!("{value} is not a finite number") });
    }
    if value.fract() != 0.0 {
        return Err(MathError::InvalidArgument { details: format!("{value} is not an integer") });
    }
    // i64::MAX rounds up to 2^63 as a real, which is already out of range.
    if value < i64::MIN as f64 || value >= i64::MAX as f64 {
        return Err(MathError::Overflow { operation: "conversion to integer" });
    }
    Ok(value as i64)
}

/// Converts an `i64` exponent to `u32`.
///
/// ## Errors
/// Returns `InvalidArgument` for negative values and `Overflow` for values
/// above `u32::MAX`.
///
/// ## Example
/// ```
/// use evil::{MathError, util::num::i64_to_u32_checked};
///
/// assert_eq!(i64_to_u32_checked(45), Ok(45));
/// assert!(matches!(i64_to_u32_checked(-1), Err(MathError::InvalidArgument { .. })));
/// assert!(matches!(i64_to_u32_checked(i64::MAX), Err(MathError::Overflow { .. })));
/// ```
pub fn i64_to_u32_checked(value: i64) -> Result<u32, MathError> {
    if value < 0 {
        return Err(MathError::InvalidArgument { details: format!("{value} is negative") });
    }
    u32::try_from(value).map_err(|_| MathError::Overflow { operation: "exponent" })
}

/// Computes `n!` with checked multiplication.
///
/// ## Errors
/// Returns `InvalidArgument` for negative `n` and `Overflow` once the result
/// no longer fits an `i64` (from `21!` on).
///
/// ## Example
/// ```
/// use evil::{MathError, util::num::factorial};
///
/// assert_eq!(factorial(0), Ok(1));
/// assert_eq!(factorial(4), Ok(24));
/// assert!(matches!(factorial(21), Err(MathError::Overflow { .. })));
/// ```
pub fn factorial(n: i64) -> Result<i64, MathError> {
    if n < 0 {
        return Err(MathError::InvalidArgument { details: format!("factorial is not defined for negative integer {n}") });
    }

    let mut result = 1i64;
    for k in 2..=n {
        result = result.checked_mul(k)
                       .ok_or(MathError::Overflow { operation: "factorial" })?;
    }
    Ok(result)
}
