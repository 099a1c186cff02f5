/// The evaluator module turns a token stream into a single value.
///
/// The evaluator consumes tokens one at a time, looks up and casts pattern
/// tokens, validates where operators may appear, and applies the operators of
/// each parenthesis level in precedence order before reducing the level.
///
/// # Responsibilities
/// - Tracks nested parentheses with an explicit stack of levels.
/// - Rejects operators that are missing an operand or that face each other.
/// - Applies operators in table order and reduces what remains.
pub mod evaluator;
/// The lexer module tokenizes expressions.
///
/// The lexer reads the raw expression and produces a lazy stream of tokens:
/// operator tokens (matched longest first), parentheses, and pattern tokens
/// for everything else. Whitespace only separates tokens.
///
/// # Responsibilities
/// - Skips whitespace runs.
/// - Splits runs of text at every operator occurrence.
/// - Leaves the classification of tokens to the evaluator.
pub mod lexer;
/// The operator module declares operators and their precedence table.
///
/// An operator couples a token with an evaluation function and a fixity
/// telling which side(s) it consumes. Operators are gathered into an ordered,
/// validated table whose order is the precedence order.
///
/// # Responsibilities
/// - Models fixity (left, right, both) and its adjacency rules.
/// - Rejects reserved, duplicated and malformed operator declarations.
/// - Provides the lookups the evaluator needs by token and by rank.
pub mod operator;
