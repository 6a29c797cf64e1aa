/// A binary arithmetic operator.
///
/// Every operator takes exactly two operands. Unary signs never reach this
/// type: the tokenizer folds them into the number literal that follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `^`
    Pow,
}

impl Operator {
    /// Returns the binding strength of the operator.
    ///
    /// `^` binds tightest, then `*` and `/`, then `+` and `-`.
    ///
    /// # Example
    /// ```
    /// use infix::token::Operator;
    ///
    /// assert!(Operator::Pow.precedence() > Operator::Mul.precedence());
    /// assert_eq!(Operator::Mul.precedence(), Operator::Div.precedence());
    /// assert!(Operator::Div.precedence() > Operator::Sub.precedence());
    /// ```
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Pow => 3,
            Self::Mul | Self::Div => 2,
            Self::Add | Self::Sub => 1,
        }
    }

    /// The character this operator is written with.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Pow => '^',
        }
    }

    /// Whether this operator can also act as the sign of a number literal.
    #[must_use]
    pub const fn is_sign(self) -> bool {
        matches!(self, Self::Add | Self::Sub)
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A classified unit of a normalized expression.
///
/// Tokens are produced left to right by
/// [`tokenize`](crate::interpreter::tokenizer::tokenize) and consumed in the
/// same order by the stack evaluator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// A numeric literal, including any sign folded into it.
    Number(f64),
    /// A binary operator.
    Operator(Operator),
    /// `(` (or `[` before normalization).
    OpenParen,
    /// `)` (or `]` before normalization).
    CloseParen,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::OpenParen => write!(f, "("),
            Self::CloseParen => write!(f, ")"),
        }
    }
}
