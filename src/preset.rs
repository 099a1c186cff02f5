/// Numeric and boolean arithmetic.
///
/// Numbers are integers or reals; comparisons yield `1` or `0`. Includes a
/// postfix factorial, powers, the four arithmetic operations and the
/// comparison operators.
pub mod maths;
/// Set arithmetic over strings.
///
/// Pattern tokens are resolved by a caller-supplied lookup into sets of
/// strings that are combined with intersection, union and difference.
pub mod set;
