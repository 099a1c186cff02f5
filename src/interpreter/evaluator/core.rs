use tracing::{debug, trace};

use crate::{
    error::SyntaxError,
    interpreter::{
        evaluator::level::Level,
        lexer::Tokenizer,
        operator::{OperatorTable, RESERVED_TOKENS},
    },
};

/// Evaluates an expression to a single value.
///
/// Tokens are pulled from `tokenizer` one at a time. `(` suspends the current
/// level and opens a new one; `)` closes the current level, resolves its
/// operators, reduces it and appends the result to the level it was opened
/// from. Operator tokens are appended to the current level after their
/// adjacency has been checked. Any other token is a pattern: it is passed to
/// `lookup` and the result to `cast`, and the value is appended. When the
/// tokens run out, the outermost level is resolved and reduced into the
/// result.
///
/// Errors raised by `lookup`, `cast`, `reduce` and the operator functions are
/// returned unchanged.
///
/// # Parameters
/// - `expression`: The expression to evaluate.
/// - `lookup`: Resolves a pattern token to raw items.
/// - `operators`: The operators, in precedence order.
/// - `cast`: Converts raw items into a value.
/// - `reduce`: Folds the values left in a level once its operators have been
///   applied. It receives an empty list for an empty level.
/// - `tokenizer`: Breaks the expression into tokens.
///
/// # Returns
/// The value of the whole expression.
///
/// # Errors
/// - `SyntaxError` (converted into `E`) for operators missing an operand,
///   operators facing each other, and unbalanced parentheses.
/// - Any error of the injected functions.
///
/// # Example
/// ```
/// use evil::{Error, ExprTokenizer, MathError, Operator, OperatorTable, evaluate};
///
/// let operators =
///     OperatorTable::<u64, Error>::new([Operator::postfix("!", |n: u64| Ok((1..=n).product())),
///                                       Operator::infix("*", |a: u64, b: u64| Ok(a * b)),
///                                       Operator::infix("+", |a: u64, b: u64| Ok(a + b))])?;
/// let lookup = |token: &str| {
///     token.parse::<u64>()
///          .map_err(|_| Error::from(MathError::InvalidNumber { token: token.to_string() }))
/// };
///
/// let value = evaluate("(1 + 2)! * 2",
///                      lookup,
///                      &operators,
///                      Ok,
///                      |values: Vec<u64>| Ok(values.into_iter().sum()),
///                      &ExprTokenizer)?;
/// assert_eq!(value, 12);
/// # Ok::<(), Error>(())
/// ```
pub fn evaluate<V, E, R, L, C, F, T>(expression: &str,
                                     lookup: L,
                                     operators: &OperatorTable<V, E>,
                                     cast: C,
                                     reduce: F,
                                     tokenizer: &T)
                                     -> Result<V, E>
    where E: From<SyntaxError>,
          L: Fn(&str) -> Result<R, E>,
          C: Fn(R) -> Result<V, E>,
          F: Fn(Vec<V>) -> Result<V, E>,
          T: Tokenizer + ?Sized
{
    debug!(expression, operators = operators.len(), "evaluating expression");

    let operator_tokens = operators.delimited_tokens();
    let [open, close] = RESERVED_TOKENS;

    let mut suspended: Vec<Level<V>> = Vec::new();
    let mut level = Level::new();

    for token in tokenizer.tokenize(expression, &operator_tokens) {
        trace!(token, depth = suspended.len(), "token");

        if token == open {
            suspended.push(std::mem::take(&mut level));
        } else if token == close {
            let parent = suspended.pop().ok_or(SyntaxError::UnmatchedCloseParen)?;
            let value = reduce_level(std::mem::replace(&mut level, parent),
                                     operators,
                                     &reduce,
                                     suspended.len() + 1)?;
            level.push_value(value);
        } else if let Some(rank) = operators.position(token) {
            level.push_operator(rank, operators)?;
        } else {
            level.push_value(cast(lookup(token)?)?);
        }
    }

    if !suspended.is_empty() {
        return Err(SyntaxError::UnclosedParen { open: suspended.len() }.into());
    }

    reduce_level(level, operators, &reduce, 0)
}

/// Resolves the operators of a closed level and reduces what is left.
fn reduce_level<V, E, F>(level: Level<V>,
                         operators: &OperatorTable<V, E>,
                         reduce: &F,
                         depth: usize)
                         -> Result<V, E>
    where E: From<SyntaxError>,
          F: Fn(Vec<V>) -> Result<V, E>
{
    let elements = level.len();
    let values = level.resolve(operators)?;
    debug!(depth, elements, values = values.len(), "reducing level");
    reduce(values)
}
