use std::cmp::Reverse;

use logos::Logos;

/// Coarse lexical units of an expression: whitespace separates runs of
/// other characters, which are later split at operators.
///
/// Both match a single character and are extended by hand to the end of the
/// run; the generated matcher recurses once per byte of an unbounded match.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
enum Chunk {
    /// The first character of a whitespace run.
    #[regex(r"\s")]
    Space,
    /// The first character of a run of non-whitespace characters.
    #[regex(r"\S")]
    Run,
}

/// Breaks an expression into tokens.
///
/// Implementations receive the expression and every token that must be
/// recognised as an operator (including the parentheses), and return a lazy,
/// single-pass stream of tokens. Every token is a slice of the expression.
pub trait Tokenizer {
    /// Returns the tokens of `expression`.
    fn tokenize<'a>(&self,
                    expression: &'a str,
                    operator_tokens: &'a [&'a str])
                    -> Box<dyn Iterator<Item = &'a str> + 'a>;
}

/// The default tokenizer.
///
/// Whitespace separates tokens and is never emitted. Operator tokens are
/// matched longest first, so `<=` wins over `<`. Anything else up to the next
/// whitespace or operator is a pattern token. Operators are matched at the
/// character level: with `e` declared as an operator, `test` becomes `t`, `e`,
/// `st`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExprTokenizer;

impl Tokenizer for ExprTokenizer {
    fn tokenize<'a>(&self,
                    expression: &'a str,
                    operator_tokens: &'a [&'a str])
                    -> Box<dyn Iterator<Item = &'a str> + 'a> {
        Box::new(tokenize(expression, operator_tokens))
    }
}

/// Tokenizes `expression` with the default rules of [`ExprTokenizer`].
///
/// # Parameters
/// - `expression`: The expression to break into tokens.
/// - `operator_tokens`: Tokens to extract as operators, in any order. Empty
///   tokens are ignored.
///
/// # Returns
/// A lazy iterator over the tokens.
///
/// # Example
/// ```
/// use evil::tokenize;
///
/// let operators = ["^", "^^", "(", ")", "+", "-", ","];
/// let tokens: Vec<&str> = tokenize("^^ ^ (a, b + c)", &operators).collect();
/// assert_eq!(tokens, ["^^", "^", "(", "a", ",", "b", "+", "c", ")"]);
/// ```
#[must_use]
pub fn tokenize<'a>(expression: &'a str, operator_tokens: &[&'a str]) -> Tokens<'a> {
    let mut operators: Vec<&'a str> = operator_tokens.iter()
                                                     .copied()
                                                     .filter(|token| !token.is_empty())
                                                     .collect();
    operators.sort_by_key(|token| Reverse(token.len()));

    Tokens { runs: Chunk::lexer(expression),
             operators,
             rest: "",
             pending: None }
}

/// Lazy token stream returned by [`tokenize`].
pub struct Tokens<'a> {
    runs:      logos::Lexer<'a, Chunk>,
    /// Longest first.
    operators: Vec<&'a str>,
    /// Unscanned remainder of the current run.
    rest:      &'a str,
    /// Operator found right after a pattern token, emitted on the next call.
    pending:   Option<&'a str>,
}

impl<'a> Tokens<'a> {
    fn operator_at(&self, text: &str) -> Option<&'a str> {
        self.operators
            .iter()
            .copied()
            .find(|operator| text.starts_with(*operator))
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if let Some(operator) = self.pending.take() {
            return Some(operator);
        }

        while self.rest.is_empty() {
            let chunk = self.runs.next()?;
            let remainder = self.runs.remainder();
            if matches!(chunk, Ok(Chunk::Space)) {
                self.runs.bump(remainder.find(|c: char| !c.is_whitespace())
                                        .unwrap_or(remainder.len()));
            } else {
                // `Run`; the two variants cover every character.
                self.runs.bump(remainder.find(char::is_whitespace)
                                        .unwrap_or(remainder.len()));
                self.rest = self.runs.slice();
            }
        }

        let run = self.rest;
        for (offset, _) in run.char_indices() {
            if let Some(operator) = self.operator_at(&run[offset..]) {
                let (pattern, tail) = run.split_at(offset);
                let (operator, rest) = tail.split_at(operator.len());
                self.rest = rest;

                if pattern.is_empty() {
                    return Some(operator);
                }
                self.pending = Some(operator);
                return Some(pattern);
            }
        }

        self.rest = "";
        Some(run)
    }
}
