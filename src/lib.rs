//! # evil
//!
//! evil is a pluggable expression evaluator written in Rust.
//! It tokenizes, parses and evaluates expressions whose operators, operand
//! lookup and result type are all supplied by the caller: the same engine
//! evaluates set queries over file names and plain arithmetic.
//!
//! Operators are declared in a precedence-ordered table, each acting on the
//! value to its left, to its right, or on both. Parentheses group
//! sub-expressions; everything that is neither an operator nor a parenthesis
//! is looked up, and the values left side by side once the operators of a
//! level are applied are folded by a reducer.

#![warn(
    clippy::redundant_clone,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]
// Operator functions take their operands by value and return a `Result`
// even when they cannot fail.
#![allow(clippy::needless_pass_by_value, clippy::unnecessary_wraps)]

/// Provides unified error types for configuration and evaluation.
///
/// This module defines all errors that can be raised while an operator table
/// is built, while an expression is evaluated, or by the bundled lookups and
/// presets. Each error carries the offending token(s) so the message can
/// point at the rule that was broken.
///
/// # Responsibilities
/// - Defines configuration errors for rejected operator tables.
/// - Defines syntax errors for misplaced operators and unbalanced
///   parentheses.
/// - Gathers every error of the bundled components into a single enum.
pub mod error;
/// Orchestrates tokenizing and evaluating expressions.
///
/// This module ties together the tokenizer, the operator table and the
/// evaluation engine. It exposes the generic [`evaluate`] entry point that
/// every preset builds on.
///
/// # Responsibilities
/// - Breaks expressions into tokens.
/// - Declares and validates operators and their precedence.
/// - Evaluates expressions level by level to a single value.
pub mod interpreter;
/// Reference lookups resolving pattern tokens.
///
/// Lookups turn a pattern token into raw items. The ones provided here match
/// shell-style wildcards against an in-memory collection of strings or
/// against the relative paths of the files under a directory.
pub mod lookup;
/// Ready-made operator tables.
///
/// Presets bundle an operator table with the cast and reducer that suit it,
/// for set arithmetic and for numeric arithmetic.
pub mod preset;
/// General utilities for checked numeric conversion.
///
/// This module provides helpers used by the numeric preset to convert
/// between integer and floating-point types and to compute factorials
/// without silent overflow or truncation.
pub mod util;

pub use error::{ConfigError, Error, MathError, PatternError, SyntaxError};
pub use interpreter::{
    evaluator::core::evaluate,
    lexer::{ExprTokenizer, Tokenizer, Tokens, tokenize},
    operator::{BinaryFn, Fixity, Operator, OperatorFn, OperatorTable, UnaryFn, op},
};
