use thiserror::Error;

/// Represents every way an operator table declaration can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// `(` and `)` delimit sub-expressions and cannot be operators.
    #[error("'{token}' is reserved: ( and ) cannot be declared as operators")]
    ReservedOperator {
        /// The reserved token.
        token: String,
    },
    /// An operator was declared with an empty token.
    #[error("operator tokens cannot be empty")]
    EmptyOperator,
    /// The tokenizer splits on whitespace, so such a token could never match.
    #[error("operator '{token}' contains whitespace and can never be matched")]
    WhitespaceInOperator {
        /// The offending token.
        token: String,
    },
    /// The same token was declared more than once.
    #[error("operator '{token}' is declared more than once")]
    DuplicateOperator {
        /// The duplicated token.
        token: String,
    },
    /// A unary function was declared both-sided, or a binary function
    /// one-sided.
    #[error("operator '{token}' acts on {fixity} but its function takes {arity} argument(s)")]
    ArityMismatch {
        /// The operator token.
        token:  String,
        /// Human readable description of the declared fixity.
        fixity: &'static str,
        /// The number of arguments the supplied function takes.
        arity:  usize,
    },
}
