/// Entry point of the evaluation engine.
///
/// Pulls tokens from the tokenizer, keeps one expression level per open
/// parenthesis on an explicit stack, and folds each closed level into its
/// parent until the whole expression collapses into a single value.
pub mod core;

/// Expression levels and operator resolution.
///
/// A level holds the values and not-yet-applied operators found at one
/// parenthesis depth. It checks operator adjacency as elements are appended
/// and applies the operators in precedence order once the level closes.
pub(crate) mod level;
