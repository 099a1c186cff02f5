use tracing::trace;

use crate::{
    error::SyntaxError,
    interpreter::operator::{Action, OperatorTable},
};

/// One element of an expression level.
#[derive(Debug)]
enum Element<V> {
    /// An evaluated operand.
    Value(V),
    /// An operator not applied yet, by precedence rank.
    Operator(usize),
}

impl<V> Element<V> {
    fn is_operator(&self, rank: usize) -> bool {
        matches!(self, Self::Operator(r) if *r == rank)
    }

    fn into_value(self) -> Option<V> {
        match self {
            Self::Value(value) => Some(value),
            Self::Operator(_) => None,
        }
    }
}

/// The values and pending operators found at one parenthesis depth.
///
/// Adjacency rules are enforced while the level is built:
/// - an operator acting on its left cannot come before any operand;
/// - an operator acting on its right cannot be followed by one acting on its
///   left, as both would claim the operand between them;
/// - an operator acting on its right cannot end the level (checked when the
///   level is resolved).
#[derive(Debug)]
pub(crate) struct Level<V> {
    elements:      Vec<Element<V>>,
    /// Set once an operand has been appended.
    has_operand:   bool,
    /// Rank of the last element when it is an operator.
    last_operator: Option<usize>,
}

impl<V> Level<V> {
    /// Creates an empty level.
    #[must_use]
    pub(crate) const fn new() -> Self {
        Self { elements:      Vec::new(),
               has_operand:   false,
               last_operator: None, }
    }

    /// Number of elements appended so far.
    #[must_use]
    pub(crate) fn len(&self) -> usize {
        self.elements.len()
    }

    /// Appends an evaluated operand.
    pub(crate) fn push_value(&mut self, value: V) {
        self.elements.push(Element::Value(value));
        self.has_operand = true;
        self.last_operator = None;
    }

    /// Appends the operator of precedence `rank`, checking it against what
    /// precedes it.
    ///
    /// # Errors
    /// - `LeadingOperator` if the operator acts on its left and no operand has
    ///   been appended yet.
    /// - `FacingOperators` if the previous element is an operator acting on
    ///   its right and this one acts on its left.
    pub(crate) fn push_operator<E>(&mut self,
                            rank: usize,
                            operators: &OperatorTable<V, E>)
                            -> Result<(), SyntaxError> {
        let fixity = operators.fixity_of(rank);

        if !self.has_operand && fixity.acts_left() {
            return Err(SyntaxError::LeadingOperator { operator: operators.token_of(rank)
                                                                         .to_string(), });
        }

        if let Some(previous) = self.last_operator
           && operators.fixity_of(previous).faces(fixity)
        {
            return Err(SyntaxError::FacingOperators { left:  operators.token_of(previous)
                                                                      .to_string(),
                                                      right: operators.token_of(rank)
                                                                      .to_string(), });
        }

        self.elements.push(Element::Operator(rank));
        self.last_operator = Some(rank);
        Ok(())
    }

    /// Closes the level and applies its operators in precedence order.
    ///
    /// For each operator of the table, in order, every occurrence is replaced
    /// by the result of its function:
    /// - right-acting operators are applied from the end backward, so a chain
    ///   of them resolves closest to the operand first;
    /// - left-acting and both-sided operators are applied from the start
    ///   forward, so equal infix operators associate to the left.
    ///
    /// # Returns
    /// The values left once every operator has been applied, in order. Values
    /// that were juxtaposed without an operator are all kept.
    ///
    /// # Errors
    /// - `TrailingOperator` if the level ends with an operator acting on its
    ///   right.
    /// - `UnresolvedOperand` if an operator's operand is an operator of lower
    ///   precedence that has not been applied yet.
    /// - Any error returned by an operator function.
    pub(crate) fn resolve<E>(self, operators: &OperatorTable<V, E>) -> Result<Vec<V>, E>
        where E: From<SyntaxError>
    {
        if let Some(last) = self.last_operator
           && operators.fixity_of(last).acts_right()
        {
            return Err(SyntaxError::TrailingOperator { operator: operators.token_of(last)
                                                                          .to_string(), }.into());
        }

        let mut elements = self.elements;

        for (rank, action) in operators.actions().enumerate() {
            match action {
                Action::Right(eval) => {
                    let mut t = elements.len();
                    while t > 0 {
                        t -= 1;
                        if elements[t].is_operator(rank) {
                            trace!(operator = operators.token_of(rank), position = t, "applying prefix operator");
                            let operand = take_operand(&mut elements, t + 1, rank, operators)?;
                            elements[t] = Element::Value(eval(operand)?);
                        }
                    }
                },
                Action::Left(eval) => {
                    let mut t = 0;
                    while t < elements.len() {
                        if elements[t].is_operator(rank) {
                            trace!(operator = operators.token_of(rank), position = t, "applying postfix operator");
                            let operand = take_left_operand(&mut elements, t, rank, operators)?;
                            t -= 1;
                            elements[t] = Element::Value(eval(operand)?);
                        }
                        t += 1;
                    }
                },
                Action::Both(eval) => {
                    let mut t = 0;
                    while t < elements.len() {
                        if elements[t].is_operator(rank) {
                            trace!(operator = operators.token_of(rank), position = t, "applying infix operator");
                            let right = take_operand(&mut elements, t + 1, rank, operators)?;
                            let left = take_left_operand(&mut elements, t, rank, operators)?;
                            t -= 1;
                            elements[t] = Element::Value(eval(left, right)?);
                        }
                        t += 1;
                    }
                },
            }
        }

        // Every operator has been applied by now.
        Ok(elements.into_iter().filter_map(Element::into_value).collect())
    }
}

impl<V> Default for Level<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Removes and returns the operand at `position` for the operator of
/// precedence `rank`.
fn take_operand<V, E>(elements: &mut Vec<Element<V>>,
                      position: usize,
                      rank: usize,
                      operators: &OperatorTable<V, E>)
                      -> Result<V, SyntaxError> {
    if position >= elements.len() {
        return Err(SyntaxError::TrailingOperator { operator: operators.token_of(rank).to_string() });
    }

    match elements.remove(position) {
        Element::Value(value) => Ok(value),
        Element::Operator(neighbour) => {
            Err(SyntaxError::UnresolvedOperand { operator:  operators.token_of(rank).to_string(),
                                                 neighbour: operators.token_of(neighbour)
                                                                     .to_string(), })
        },
    }
}

/// Removes and returns the operand left of the operator at `position`.
fn take_left_operand<V, E>(elements: &mut Vec<Element<V>>,
                           position: usize,
                           rank: usize,
                           operators: &OperatorTable<V, E>)
                           -> Result<V, SyntaxError> {
    if position == 0 {
        return Err(SyntaxError::LeadingOperator { operator: operators.token_of(rank).to_string() });
    }
    take_operand(elements, position - 1, rank, operators)
}
