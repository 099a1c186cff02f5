use thiserror::Error;

/// Operator table configuration errors.
///
/// Raised while an operator table is being built, before any expression is
/// tokenized. They describe operator declarations the evaluator refuses to
/// work with, such as reserved or duplicated tokens.
pub mod config_error;
/// Numeric errors.
///
/// Errors raised by the numeric operator preset: unparsable literals,
/// overflowing integer arithmetic, division by zero and factorials outside
/// their domain.
pub mod math_error;
/// Pattern compilation errors.
///
/// Raised when a shell-style wildcard cannot be turned into a matcher.
pub mod pattern_error;
/// Expression syntax errors.
///
/// Defines the errors raised while an expression is evaluated: operators
/// missing an operand, operators facing one another, and unbalanced
/// parentheses.
pub mod syntax_error;

pub use config_error::ConfigError;
pub use math_error::MathError;
pub use pattern_error::PatternError;
pub use syntax_error::SyntaxError;

/// Every error the bundled presets, lookups and command-line tool can raise.
///
/// The evaluator itself is generic over its error type; this enum is the one
/// used when the lookups and operator tables shipped with the crate are
/// plugged in.
#[derive(Debug, Error)]
pub enum Error {
    /// The operator table was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The expression was malformed.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    /// A numeric operation failed.
    #[error(transparent)]
    Math(#[from] MathError),
    /// A lookup pattern could not be compiled.
    #[error(transparent)]
    Pattern(#[from] PatternError),
    /// The items to search could not be read.
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}
