use std::{collections::HashMap, fmt};

use crate::error::ConfigError;

/// Tokens that open and close a sub-expression. They can never be operators.
pub const RESERVED_TOKENS: [&str; 2] = ["(", ")"];

/// Describes which side(s) of itself an operator takes its operand(s) from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fixity {
    /// Unary; consumes the value immediately to its left (postfix).
    Left,
    /// Unary; consumes the value immediately to its right (prefix).
    Right,
    /// Binary; consumes one value on each side (infix).
    Both,
}

impl Fixity {
    /// Builds a fixity from two independent side flags.
    ///
    /// When both flags are equal (both set or both unset) the operator acts on
    /// both sides, otherwise on the single side that is set.
    ///
    /// # Example
    /// ```
    /// use evil::Fixity;
    ///
    /// assert_eq!(Fixity::from_sides(true, false), Fixity::Left);
    /// assert_eq!(Fixity::from_sides(false, true), Fixity::Right);
    /// assert_eq!(Fixity::from_sides(false, false), Fixity::Both);
    /// assert_eq!(Fixity::from_sides(true, true), Fixity::Both);
    /// ```
    #[must_use]
    pub const fn from_sides(acts_left: bool, acts_right: bool) -> Self {
        match (acts_left, acts_right) {
            (true, false) => Self::Left,
            (false, true) => Self::Right,
            _ => Self::Both,
        }
    }

    /// Whether the operator needs a value on its left.
    #[must_use]
    pub const fn acts_left(self) -> bool {
        matches!(self, Self::Left | Self::Both)
    }

    /// Whether the operator needs a value on its right.
    #[must_use]
    pub const fn acts_right(self) -> bool {
        matches!(self, Self::Right | Self::Both)
    }

    /// Whether an operator with this fixity and the operator directly after
    /// it would both claim the (missing) operand between them.
    #[must_use]
    pub const fn faces(self, next: Self) -> bool {
        self.acts_right() && next.acts_left()
    }

    const fn describe(self) -> &'static str {
        match self {
            Self::Left => "its left side",
            Self::Right => "its right side",
            Self::Both => "both sides",
        }
    }
}

/// A one-argument operator function.
pub type UnaryFn<V, E> = Box<dyn Fn(V) -> Result<V, E> + Send + Sync>;
/// A two-argument operator function, called with the left then the right
/// operand.
pub type BinaryFn<V, E> = Box<dyn Fn(V, V) -> Result<V, E> + Send + Sync>;

/// The evaluation function of an operator.
pub enum OperatorFn<V, E> {
    /// Used by operators acting on a single side.
    Unary(UnaryFn<V, E>),
    /// Used by operators acting on both sides.
    Binary(BinaryFn<V, E>),
}

impl<V, E> OperatorFn<V, E> {
    /// Wraps a one-argument function.
    pub fn unary<F>(f: F) -> Self
        where F: Fn(V) -> Result<V, E> + Send + Sync + 'static
    {
        Self::Unary(Box::new(f))
    }

    /// Wraps a two-argument function.
    pub fn binary<F>(f: F) -> Self
        where F: Fn(V, V) -> Result<V, E> + Send + Sync + 'static
    {
        Self::Binary(Box::new(f))
    }

    const fn arity(&self) -> usize {
        match self {
            Self::Unary(_) => 1,
            Self::Binary(_) => 2,
        }
    }
}

/// A single operator declaration: its token, its function and its fixity.
///
/// Declarations are checked when they are gathered into an
/// [`OperatorTable`], not when they are created.
pub struct Operator<V, E> {
    token:  String,
    eval:   OperatorFn<V, E>,
    fixity: Fixity,
}

impl<V, E> Operator<V, E> {
    /// Declares an operator with an explicit fixity.
    pub fn new(token: impl Into<String>, eval: OperatorFn<V, E>, fixity: Fixity) -> Self {
        Self { token: token.into(),
               eval,
               fixity }
    }

    /// Declares a unary operator applied to the value on its right.
    pub fn prefix<F>(token: impl Into<String>, f: F) -> Self
        where F: Fn(V) -> Result<V, E> + Send + Sync + 'static
    {
        Self::new(token, OperatorFn::unary(f), Fixity::Right)
    }

    /// Declares a unary operator applied to the value on its left.
    pub fn postfix<F>(token: impl Into<String>, f: F) -> Self
        where F: Fn(V) -> Result<V, E> + Send + Sync + 'static
    {
        Self::new(token, OperatorFn::unary(f), Fixity::Left)
    }

    /// Declares a binary operator applied to the values on both sides.
    pub fn infix<F>(token: impl Into<String>, f: F) -> Self
        where F: Fn(V, V) -> Result<V, E> + Send + Sync + 'static
    {
        Self::new(token, OperatorFn::binary(f), Fixity::Both)
    }

    /// The operator token.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// The declared fixity.
    #[must_use]
    pub const fn fixity(&self) -> Fixity {
        self.fixity
    }
}

impl<V, E> fmt::Debug for Operator<V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Operator")
         .field("token", &self.token)
         .field("fixity", &self.fixity)
         .finish_non_exhaustive()
    }
}

/// Declares an operator from two side flags.
///
/// `acts_left` and `acts_right` are independent: when they are equal the
/// operator is both-sided, otherwise it acts on the side that is set. See
/// [`Fixity::from_sides`].
///
/// # Example
/// ```
/// use evil::{Fixity, OperatorFn, SyntaxError, op};
///
/// let double = op::<i64, SyntaxError>("@", OperatorFn::unary(|n| Ok(n * 2)), false, true);
/// assert_eq!(double.fixity(), Fixity::Right);
///
/// let add = op::<i64, SyntaxError>("+", OperatorFn::binary(|a, b| Ok(a + b)), false, false);
/// assert_eq!(add.fixity(), Fixity::Both);
/// ```
pub fn op<V, E>(token: impl Into<String>,
                eval: OperatorFn<V, E>,
                acts_left: bool,
                acts_right: bool)
                -> Operator<V, E> {
    Operator::new(token, eval, Fixity::from_sides(acts_left, acts_right))
}

/// An operator function already matched with the side(s) it applies to.
pub(crate) enum Action<V, E> {
    Left(UnaryFn<V, E>),
    Right(UnaryFn<V, E>),
    Both(BinaryFn<V, E>),
}

impl<V, E> Action<V, E> {
    const fn fixity(&self) -> Fixity {
        match self {
            Self::Left(_) => Fixity::Left,
            Self::Right(_) => Fixity::Right,
            Self::Both(_) => Fixity::Both,
        }
    }
}

struct Entry<V, E> {
    token:  String,
    action: Action<V, E>,
}

/// A validated, precedence-ordered set of operators.
///
/// Operators earlier in the table bind tighter: while a parenthesis level is
/// resolved, every occurrence of the first operator is applied before the
/// second operator is looked at, and so on.
///
/// The table is immutable once built. Its functions are `Send + Sync`, so one
/// table can serve concurrent evaluations.
pub struct OperatorTable<V, E> {
    entries: Vec<Entry<V, E>>,
    index:   HashMap<String, usize>,
}

impl<V, E> OperatorTable<V, E> {
    /// Builds a table from declarations given in precedence order.
    ///
    /// # Errors
    /// - `ReservedOperator` if `(` or `)` is declared.
    /// - `EmptyOperator` or `WhitespaceInOperator` if a token could never be
    ///   produced by the tokenizer.
    /// - `DuplicateOperator` if a token is declared twice.
    /// - `ArityMismatch` if a unary function is declared both-sided or a binary
    ///   function one-sided.
    ///
    /// # Example
    /// ```
    /// use evil::{ConfigError, Operator, OperatorTable, SyntaxError};
    ///
    /// let table = OperatorTable::<i64, SyntaxError>::new([Operator::infix("+", |a, b| Ok(a + b))]);
    /// assert!(table.is_ok());
    ///
    /// let reserved = OperatorTable::<i64, SyntaxError>::new([Operator::prefix("(", Ok)]);
    /// assert!(matches!(reserved, Err(ConfigError::ReservedOperator { .. })));
    /// ```
    pub fn new<I>(operators: I) -> Result<Self, ConfigError>
        where I: IntoIterator<Item = Operator<V, E>>
    {
        let mut entries = Vec::new();
        let mut index = HashMap::new();

        for Operator { token, eval, fixity } in operators {
            if RESERVED_TOKENS.contains(&token.as_str()) {
                return Err(ConfigError::ReservedOperator { token });
            }
            if token.is_empty() {
                return Err(ConfigError::EmptyOperator);
            }
            if token.chars().any(char::is_whitespace) {
                return Err(ConfigError::WhitespaceInOperator { token });
            }
            if index.contains_key(&token) {
                return Err(ConfigError::DuplicateOperator { token });
            }

            let action = match (fixity, eval) {
                (Fixity::Left, OperatorFn::Unary(f)) => Action::Left(f),
                (Fixity::Right, OperatorFn::Unary(f)) => Action::Right(f),
                (Fixity::Both, OperatorFn::Binary(f)) => Action::Both(f),
                (fixity, eval) => {
                    return Err(ConfigError::ArityMismatch { token,
                                                            fixity: fixity.describe(),
                                                            arity: eval.arity() });
                },
            };

            index.insert(token.clone(), entries.len());
            entries.push(Entry { token, action });
        }

        Ok(Self { entries, index })
    }

    /// Number of operators in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table declares no operators at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Precedence rank of `token`, or `None` if it is not an operator.
    #[must_use]
    pub fn position(&self, token: &str) -> Option<usize> {
        self.index.get(token).copied()
    }

    /// Token of the operator at `rank`, or `None` past the end of the table.
    #[must_use]
    pub fn token(&self, rank: usize) -> Option<&str> {
        self.entries.get(rank).map(|entry| entry.token.as_str())
    }

    /// Fixity of the operator at `rank`, or `None` past the end of the table.
    #[must_use]
    pub fn fixity(&self, rank: usize) -> Option<Fixity> {
        self.entries.get(rank).map(|entry| entry.action.fixity())
    }

    /// Token of an operator whose rank came from [`position`](Self::position).
    pub(crate) fn token_of(&self, rank: usize) -> &str {
        &self.entries[rank].token
    }

    /// Fixity of an operator whose rank came from
    /// [`position`](Self::position).
    pub(crate) fn fixity_of(&self, rank: usize) -> Fixity {
        self.entries[rank].action.fixity()
    }

    /// Operator tokens in precedence order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.token.as_str())
    }

    /// Every token the tokenizer has to recognise: the parentheses followed by
    /// the operator tokens.
    pub(crate) fn delimited_tokens(&self) -> Vec<&str> {
        RESERVED_TOKENS.iter().copied().chain(self.tokens()).collect()
    }

    pub(crate) fn actions(&self) -> impl Iterator<Item = &Action<V, E>> {
        self.entries.iter().map(|entry| &entry.action)
    }
}

impl<V, E> fmt::Debug for OperatorTable<V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
         .entries(self.entries
                      .iter()
                      .map(|entry| (&entry.token, entry.action.fixity())))
         .finish()
    }
}
