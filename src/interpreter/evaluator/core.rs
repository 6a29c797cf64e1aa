use tracing::debug;

use crate::{
    error::EvalError,
    interpreter::evaluator::options::{EvalOptions, PowerAssociativity, Rounding},
    token::{Operator, Token},
    util::num::round_half_up,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// An entry of the operator stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    Operator(Operator),
    /// Marks where a `(` was opened.
    OpenParen,
}

/// Reduces a token sequence to a single number with two stacks.
///
/// Works like the shunting-yard algorithm, except that operators are applied
/// as soon as precedence allows instead of being written to an output queue.
///
/// ## Usage
///
/// An `Evaluator` owns its operand and operator stacks, and
/// [`Evaluator::run`] consumes it, so no state survives from one expression
/// to the next.
pub struct Evaluator {
    operands:  Vec<f64>,
    operators: Vec<Pending>,
    options:   EvalOptions,
}

impl Evaluator {
    /// Creates an evaluator with empty stacks.
    #[must_use]
    pub const fn new(options: EvalOptions) -> Self {
        Self { operands: Vec::new(),
               operators: Vec::new(),
               options }
    }

    /// Evaluates a token sequence and returns its value.
    ///
    /// Tokens are processed left to right:
    /// - numbers are pushed onto the operand stack;
    /// - `(` pushes a marker onto the operator stack;
    /// - `)` applies operators until the marker is reached, then drops it;
    /// - an operator first applies every stacked operator of greater or equal
    ///   precedence, then is pushed itself.
    ///
    /// Whatever remains on the operator stack is applied at the end.
    ///
    /// # Parameters
    /// - `tokens`: Tokens as produced by
    ///   [`tokenize`](crate::interpreter::tokenizer::tokenize).
    ///
    /// # Returns
    /// The single value left on the operand stack.
    ///
    /// # Errors
    /// - [`EvalError::UnbalancedParens`] for a `)` without a matching `(`, or
    ///   a `(` that is never closed.
    /// - [`EvalError::DivisionByZero`] when a divisor is zero.
    /// - [`EvalError::MalformedExpression`] when an operator lacks operands.
    /// - [`EvalError::Internal`] when the operand stack does not end with
    ///   exactly one value.
    ///
    /// # Example
    /// ```
    /// use infix::{
    ///     EvalOptions,
    ///     interpreter::{evaluator::core::Evaluator, tokenizer::tokenize},
    /// };
    ///
    /// let tokens = tokenize("(3+4)*2").unwrap();
    /// let value = Evaluator::new(EvalOptions::default()).run(&tokens).unwrap();
    /// assert_eq!(value, 14.0);
    /// ```
    pub fn run(mut self, tokens: &[Token]) -> EvalResult<f64> {
        for token in tokens {
            match *token {
                Token::Number(value) => self.operands.push(value),
                Token::OpenParen => self.operators.push(Pending::OpenParen),
                Token::CloseParen => self.close_group()?,
                Token::Operator(op) => self.push_operator(op)?,
            }
        }

        while let Some(pending) = self.operators.pop() {
            match pending {
                Pending::Operator(op) => self.apply(op)?,
                Pending::OpenParen => return Err(EvalError::UnbalancedParens),
            }
        }

        match self.operands.as_slice() {
            [result] => Ok(*result),
            rest => Err(EvalError::Internal { details: format!("{} values left on the operand stack",
                                                               rest.len()) }),
        }
    }

    fn close_group(&mut self) -> EvalResult<()> {
        loop {
            match self.operators.pop() {
                Some(Pending::Operator(op)) => self.apply(op)?,
                Some(Pending::OpenParen) => return Ok(()),
                None => return Err(EvalError::UnbalancedParens),
            }
        }
    }

    fn push_operator(&mut self, op: Operator) -> EvalResult<()> {
        while let Some(&Pending::Operator(top)) = self.operators.last()
              && self.yields_to(op, top)
        {
            self.operators.pop();
            self.apply(top)?;
        }
        self.operators.push(Pending::Operator(op));
        Ok(())
    }

    /// Whether `top`, already on the stack, must be applied before `incoming`
    /// is pushed.
    fn yields_to(&self, incoming: Operator, top: Operator) -> bool {
        if incoming == Operator::Pow
           && top == Operator::Pow
           && self.options.power == PowerAssociativity::Right
        {
            return false;
        }
        incoming.precedence() <= top.precedence()
    }

    /// Pops two operands, applies `op` and pushes the result.
    fn apply(&mut self, op: Operator) -> EvalResult<()> {
        let (Some(right), Some(left)) = (self.operands.pop(), self.operands.pop()) else {
            return Err(EvalError::malformed(format!("missing operand for '{op}'")));
        };

        let mut result = Self::eval_binary(op, left, right)?;
        if let Rounding::DecimalPlaces(places) = self.options.rounding {
            result = round_half_up(result, places);
        }

        debug!(%op, left, right, result, "applied operator");
        self.operands.push(result);
        Ok(())
    }
}
