use thiserror::Error;

/// Represents all errors raised by the numeric operator preset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MathError {
    /// A token could not be parsed as an integer or a real number.
    #[error("'{token}' is not a number")]
    InvalidNumber {
        /// The unparsable token.
        token: String,
    },
    /// Integer arithmetic overflowed.
    #[error("integer overflow while computing {operation}")]
    Overflow {
        /// The operation that overflowed.
        operation: &'static str,
    },
    /// Attempted division by zero.
    #[error("division by zero")]
    DivisionByZero,
    /// An argument was outside the domain of an operation.
    #[error("invalid argument: {details}")]
    InvalidArgument {
        /// Details about why the argument is invalid.
        details: String,
    },
}
