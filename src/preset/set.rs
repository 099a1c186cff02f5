use std::collections::BTreeSet;

use crate::{
    error::{ConfigError, Error},
    interpreter::{
        evaluator::core,
        lexer::ExprTokenizer,
        operator::{Operator, OperatorTable},
    },
};

/// The value type of the set preset. Ordered, so results print sorted.
pub type Set = BTreeSet<String>;

/// `a = b`: the items present in both sets.
pub fn intersection(a: Set, b: Set) -> Result<Set, Error> {
    Ok(a.intersection(&b).cloned().collect())
}

/// `a + b` and `a, b`: the items present in either set.
pub fn union(mut a: Set, mut b: Set) -> Result<Set, Error> {
    a.append(&mut b);
    Ok(a)
}

/// `a - b`: the items of `a` that are not in `b`.
pub fn difference(mut a: Set, b: Set) -> Result<Set, Error> {
    a.retain(|item| !b.contains(item));
    Ok(a)
}

/// The operators of the set preset, in precedence order.
///
/// | Token | Operation    |
/// |-------|--------------|
/// | `=`   | intersection |
/// | `+`   | union        |
/// | `-`   | difference   |
/// | `,`   | union        |
///
/// All of them are both-sided. Extra operators can be put in front of (or
/// after) these before the table is built.
#[must_use]
pub fn operators() -> Vec<Operator<Set, Error>> {
    vec![Operator::infix("=", intersection),
         Operator::infix("+", union),
         Operator::infix("-", difference),
         Operator::infix(",", union)]
}

/// Builds the table of [`operators`].
///
/// # Errors
/// Never fails for the preset itself; the `Result` mirrors
/// [`OperatorTable::new`].
pub fn table() -> Result<OperatorTable<Set, Error>, ConfigError> {
    OperatorTable::new(operators())
}

/// Collects the items returned by a lookup into a set.
pub fn cast<I>(items: I) -> Result<Set, Error>
    where I: IntoIterator<Item = String>
{
    Ok(items.into_iter().collect())
}

/// Unions the sets left in a level; an empty level is the empty set.
pub fn union_all(values: Vec<Set>) -> Result<Set, Error> {
    Ok(values.into_iter().flatten().collect())
}

/// Evaluates a set expression with the preset operators.
///
/// # Parameters
/// - `expression`: The expression to evaluate.
/// - `lookup`: Resolves a pattern token to the items it stands for, such as
///   [`str_lookup`](crate::lookup::str_lookup) or
///   [`glob_lookup`](crate::lookup::glob_lookup).
///
/// # Errors
/// Returns a `SyntaxError` for malformed expressions and any error of the
/// lookup.
///
/// # Example
/// ```
/// use evil::{lookup::str_lookup, preset::set::evaluate};
///
/// let space = ["a.a", "a.b", "b.a", "b.b"];
/// let result = evaluate("a.* = *.b", |pattern| str_lookup(pattern, &space))?;
/// assert_eq!(result.into_iter().collect::<Vec<_>>(), ["a.b"]);
/// # Ok::<(), evil::Error>(())
/// ```
pub fn evaluate<L, R, E>(expression: &str, lookup: L) -> Result<Set, Error>
    where L: Fn(&str) -> Result<R, E>,
          R: IntoIterator<Item = String>,
          Error: From<E>
{
    evaluate_with(expression, lookup, &table()?)
}

/// Evaluates a set expression with a caller-supplied operator table, for
/// instance the preset operators extended with a domain-specific one.
///
/// # Errors
/// See [`evaluate`].
pub fn evaluate_with<L, R, E>(expression: &str,
                              lookup: L,
                              operators: &OperatorTable<Set, Error>)
                              -> Result<Set, Error>
    where L: Fn(&str) -> Result<R, E>,
          R: IntoIterator<Item = String>,
          Error: From<E>
{
    core::evaluate(expression,
                   |token: &str| lookup(token).map_err(Error::from),
                   operators,
                   cast,
                   union_all,
                   &ExprTokenizer)
}
