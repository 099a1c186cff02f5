use thiserror::Error;

/// Represents all errors that can occur while an expression is evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// An operator acting on its left side opened an expression.
    #[error("operator '{operator}' acts on the expression to its left or on both sides and cannot be at the beginning of an expression")]
    LeadingOperator {
        /// The operator token.
        operator: String,
    },
    /// An operator acting on its right side closed an expression.
    #[error("operator '{operator}' acts on the expression to its right or on both sides and cannot be at the end of an expression")]
    TrailingOperator {
        /// The operator token.
        operator: String,
    },
    /// Two adjacent operators would both consume the operand between them.
    #[error("operators '{left}' and '{right}' cannot be beside one another because they act on expressions facing one another")]
    FacingOperators {
        /// The operator on the left.
        left:  String,
        /// The operator on the right.
        right: String,
    },
    /// An operator's operand is another operator that binds more loosely and
    /// has therefore not been applied yet.
    #[error("operator '{operator}' needs an operand but '{neighbour}' beside it is not applied until later")]
    UnresolvedOperand {
        /// The operator being applied.
        operator:  String,
        /// The still unapplied neighbouring operator.
        neighbour: String,
    },
    /// A `)` appeared with no open `(`.
    #[error("unmatched ')'")]
    UnmatchedCloseParen,
    /// The input ended while parentheses were still open.
    #[error("expected {open} closing parenthesis ')' but the expression ended")]
    UnclosedParen {
        /// The number of parentheses left open.
        open: usize,
    },
}
