#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating an expression.
pub enum EvalError {
    /// The expression is structurally invalid: no operator, too many
    /// operators for the operands present, or a token that cannot be read.
    MalformedExpression {
        /// Why the expression was rejected.
        reason: String,
    },
    /// Parentheses do not pair up.
    UnbalancedParens,
    /// The divisor of a `/` was exactly zero.
    DivisionByZero,
    /// The evaluator finished in an impossible state. This is a bug in the
    /// tokenizer or evaluator, never the caller's fault.
    Internal {
        /// Details about the violated postcondition.
        details: String,
    },
}

impl EvalError {
    /// Shorthand for building a [`EvalError::MalformedExpression`].
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedExpression { reason: reason.into() }
    }

    /// Returns `true` for logic errors of the evaluator, as opposed to errors
    /// caused by the input.
    ///
    /// # Example
    /// ```
    /// use infix::error::EvalError;
    ///
    /// assert!(!EvalError::DivisionByZero.is_internal());
    /// assert!(EvalError::Internal { details: "two results".into() }.is_internal());
    /// ```
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal { .. })
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedExpression { reason } => write!(f, "Malformed expression: {reason}."),
            Self::UnbalancedParens => write!(f, "Unbalanced parentheses."),
            Self::DivisionByZero => write!(f, "Division by zero."),
            Self::Internal { details } => write!(f, "Internal evaluator error: {details}."),
        }
    }
}

impl std::error::Error for EvalError {}
