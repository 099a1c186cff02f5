/// Numeric conversion helpers.
///
/// This module provides checked conversions between integer and
/// floating-point types and the checked factorial used by the numeric preset.
/// Every fallible helper returns a `MathError` instead of silently wrapping,
/// truncating or rounding.
pub mod num;
