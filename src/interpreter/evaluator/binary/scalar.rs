use crate::{
    error::EvalError,
    interpreter::evaluator::core::{EvalResult, Evaluator},
    token::Operator,
};

impl Evaluator {
    /// Evaluates a scalar arithmetic operation.
    ///
    /// All arithmetic is IEEE-754 double precision. Division by zero is
    /// checked explicitly on the right operand, the divisor; a divisor of
    /// `-0.0` counts as zero too. The operator must be one of `Add`, `Sub`,
    /// `Mul` or `Div`; other operators are not processed here.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// An `EvalResult<f64>` containing the computed scalar.
    ///
    /// # Example
    /// ```
    /// use infix::{
    ///     error::EvalError, interpreter::evaluator::core::Evaluator, token::Operator,
    /// };
    ///
    /// assert_eq!(Evaluator::eval_scalar_op(Operator::Div, 9.0, 2.0).unwrap(), 4.5);
    /// assert_eq!(Evaluator::eval_scalar_op(Operator::Div, 9.0, 0.0),
    ///            Err(EvalError::DivisionByZero));
    /// ```
    pub fn eval_scalar_op(op: Operator, left: f64, right: f64) -> EvalResult<f64> {
        match op {
            Operator::Add => Ok(left + right),
            Operator::Sub => Ok(left - right),
            Operator::Mul => Ok(left * right),
            Operator::Div => {
                if right == 0.0 {
                    return Err(EvalError::DivisionByZero);
                }
                Ok(left / right)
            },
            Operator::Pow => {
                Err(EvalError::Internal { details: format!("'{op}' is not a scalar operator") })
            },
        }
    }
}
