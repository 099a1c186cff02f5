use std::{cmp::Ordering, fmt::Display};

use ordered_float::OrderedFloat;

use crate::{
    error::{ConfigError, Error, MathError},
    interpreter::{
        evaluator::core,
        lexer::ExprTokenizer,
        operator::{Operator, OperatorTable},
    },
    util::num::{f64_to_i64_exact, factorial, i64_to_f64, i64_to_u32_checked},
};

/// A number handled by the numeric preset.
///
/// Integers stay integers as long as the operations on them do; division and
/// any operation involving a real produce a real. Comparisons produce the
/// integers `1` and `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Number {
    /// A 64 bit integer such as `42`.
    Integer(i64),
    /// A double precision real such as `2.5`.
    Real(OrderedFloat<f64>),
}

impl Number {
    /// Parses a token, as an integer when possible and as a real otherwise.
    ///
    /// # Errors
    /// Returns `InvalidNumber` when the token is neither.
    ///
    /// # Example
    /// ```
    /// use evil::preset::maths::Number;
    ///
    /// assert_eq!(Number::parse("42"), Ok(Number::Integer(42)));
    /// assert_eq!(Number::parse("2.5"), Ok(Number::from(2.5)));
    /// assert!(Number::parse("two").is_err());
    /// ```
    pub fn parse(token: &str) -> Result<Self, MathError> {
        if let Ok(integer) = token.parse::<i64>() {
            return Ok(Self::Integer(integer));
        }
        token.parse::<f64>()
             .map(Self::from)
             .map_err(|_| MathError::InvalidNumber { token: token.to_string() })
    }

    /// The value as a real.
    #[must_use]
    pub const fn as_f64(self) -> f64 {
        match self {
            Self::Integer(i) => i64_to_f64(i),
            Self::Real(r) => r.0,
        }
    }

    /// Compares two numbers, exactly for two integers and as reals otherwise.
    /// Returns `None` when a real is NaN.
    fn compare(self, other: Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => Some(a.cmp(&b)),
            _ => self.as_f64().partial_cmp(&other.as_f64()),
        }
    }
}

impl From<i64> for Number {
    fn from(i: i64) -> Self {
        Self::Integer(i)
    }
}

impl From<f64> for Number {
    fn from(r: f64) -> Self {
        Self::Real(OrderedFloat(r))
    }
}

impl From<bool> for Number {
    fn from(b: bool) -> Self {
        Self::Integer(i64::from(b))
    }
}

impl Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{i}"),
            Self::Real(r) => write!(f, "{r}"),
        }
    }
}

/// Applies a checked integer operation to two integers, or a real operation
/// when either side is a real.
fn arithmetic(a: Number,
              b: Number,
              operation: &'static str,
              integer: fn(i64, i64) -> Option<i64>,
              real: fn(f64, f64) -> f64)
              -> Result<Number, Error> {
    match (a, b) {
        (Number::Integer(a), Number::Integer(b)) => {
            integer(a, b).map(Number::Integer)
                         .ok_or_else(|| MathError::Overflow { operation }.into())
        },
        _ => Ok(Number::from(real(a.as_f64(), b.as_f64()))),
    }
}

/// `a + b`.
pub fn add(a: Number, b: Number) -> Result<Number, Error> {
    arithmetic(a, b, "addition", i64::checked_add, |x, y| x + y)
}

/// `a - b`.
pub fn sub(a: Number, b: Number) -> Result<Number, Error> {
    arithmetic(a, b, "subtraction", i64::checked_sub, |x, y| x - y)
}

/// `a * b`.
pub fn mul(a: Number, b: Number) -> Result<Number, Error> {
    arithmetic(a, b, "multiplication", i64::checked_mul, |x, y| x * y)
}

/// `a / b`, always a real.
///
/// # Errors
/// Returns `DivisionByZero` when `b` is zero.
pub fn div(a: Number, b: Number) -> Result<Number, Error> {
    let divisor = b.as_f64();
    if divisor == 0.0 {
        return Err(MathError::DivisionByZero.into());
    }
    Ok(Number::from(a.as_f64() / divisor))
}

/// `base ^ exponent`.
///
/// Two integers with a non-negative exponent give a checked integer power;
/// anything else is computed on reals. The bases `0`, `1` and `-1` accept
/// any exponent.
pub fn pow(base: Number, exponent: Number) -> Result<Number, Error> {
    match (base, exponent) {
        (Number::Integer(b @ (0 | 1)), Number::Integer(e)) if e > 0 => Ok(Number::Integer(b)),
        (Number::Integer(-1), Number::Integer(e)) if e >= 0 => {
            Ok(Number::Integer(if e % 2 == 0 { 1 } else { -1 }))
        },
        (Number::Integer(b), Number::Integer(e)) if e >= 0 => {
            b.checked_pow(i64_to_u32_checked(e)?)
             .map(Number::Integer)
             .ok_or_else(|| MathError::Overflow { operation: "exponentiation" }.into())
        },
        _ => Ok(Number::from(base.as_f64().powf(exponent.as_f64()))),
    }
}

/// `n!`, for non-negative integers and reals without a fractional part.
///
/// # Errors
/// Returns `InvalidArgument` outside that domain and `Overflow` when the
/// result no longer fits an integer.
pub fn fact(n: Number) -> Result<Number, Error> {
    let n = match n {
        Number::Integer(i) => i,
        Number::Real(r) => f64_to_i64_exact(r.0)?,
    };
    Ok(Number::Integer(factorial(n)?))
}

fn comparison(a: Number, b: Number, accept: fn(Option<Ordering>) -> bool) -> Result<Number, Error> {
    Ok(Number::from(accept(a.compare(b))))
}

/// The operators of the numeric preset, in precedence order.
///
/// | Token | Fixity | Operation              |
/// |-------|--------|------------------------|
/// | `!`   | left   | factorial              |
/// | `^`   | both   | power                  |
/// | `*`   | both   | multiplication         |
/// | `/`   | both   | true division          |
/// | `+`   | both   | addition               |
/// | `-`   | both   | subtraction            |
/// | `==`  | both   | equal                  |
/// | `<>`  | both   | not equal              |
/// | `>`   | both   | greater than           |
/// | `<`   | both   | less than              |
/// | `>=`  | both   | greater than or equal  |
/// | `<=`  | both   | less than or equal     |
/// | `,`   | both   | addition               |
#[must_use]
pub fn operators() -> Vec<Operator<Number, Error>> {
    vec![Operator::postfix("!", fact),
         Operator::infix("^", pow),
         Operator::infix("*", mul),
         Operator::infix("/", div),
         Operator::infix("+", add),
         Operator::infix("-", sub),
         Operator::infix("==", |a, b| comparison(a, b, |o| o == Some(Ordering::Equal))),
         Operator::infix("<>", |a, b| comparison(a, b, |o| o != Some(Ordering::Equal))),
         Operator::infix(">", |a, b| comparison(a, b, |o| o == Some(Ordering::Greater))),
         Operator::infix("<", |a, b| comparison(a, b, |o| o == Some(Ordering::Less))),
         Operator::infix(">=", |a, b| {
             comparison(a, b, |o| matches!(o, Some(Ordering::Greater | Ordering::Equal)))
         }),
         Operator::infix("<=", |a, b| {
             comparison(a, b, |o| matches!(o, Some(Ordering::Less | Ordering::Equal)))
         }),
         Operator::infix(",", add)]
}

/// Builds the table of [`operators`].
///
/// # Errors
/// Never fails for the preset itself; the `Result` mirrors
/// [`OperatorTable::new`].
pub fn table() -> Result<OperatorTable<Number, Error>, ConfigError> {
    OperatorTable::new(operators())
}

/// Sums the values left in a level; an empty level sums to `0`.
pub fn sum(values: Vec<Number>) -> Result<Number, Error> {
    values.into_iter().try_fold(Number::Integer(0), add)
}

/// Evaluates a numeric expression with the preset operators.
///
/// Every pattern token must be a number; values juxtaposed without an
/// operator are summed.
///
/// # Errors
/// Returns a `SyntaxError` for malformed expressions and a `MathError` for
/// unparsable numbers and failed operations.
///
/// # Example
/// ```
/// use evil::preset::maths::{Number, evaluate};
///
/// assert_eq!(evaluate("(2 + 2)!")?, Number::Integer(24));
/// assert_eq!(evaluate("4 * (10 + 15)")?, Number::Integer(100));
/// assert_eq!(evaluate("1 <> 0")?, Number::Integer(1));
/// # Ok::<(), evil::Error>(())
/// ```
pub fn evaluate(expression: &str) -> Result<Number, Error> {
    evaluate_with(expression, &table()?)
}

/// Evaluates a numeric expression with a caller-supplied operator table.
///
/// # Errors
/// See [`evaluate`].
pub fn evaluate_with(expression: &str,
                     operators: &OperatorTable<Number, Error>)
                     -> Result<Number, Error> {
    core::evaluate(expression,
                   |token: &str| Number::parse(token).map_err(Error::from),
                   operators,
                   Ok,
                   sum,
                   &ExprTokenizer)
}
