use crate::{
    interpreter::evaluator::core::{EvalResult, Evaluator},
    token::Operator,
};

impl Evaluator {
    /// Evaluates a binary operation between two operands.
    ///
    /// `+`, `-`, `*` and `/` are routed to `eval_scalar_op`; `^` calls
    /// `eval_pow`. The left operand is the one pushed earlier on the operand
    /// stack.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// An `EvalResult<f64>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use infix::{interpreter::evaluator::core::Evaluator, token::Operator};
    ///
    /// assert_eq!(Evaluator::eval_binary(Operator::Sub, 10.0, 4.0).unwrap(), 6.0);
    /// assert_eq!(Evaluator::eval_binary(Operator::Pow, 2.0, 10.0).unwrap(), 1024.0);
    /// ```
    pub fn eval_binary(op: Operator, left: f64, right: f64) -> EvalResult<f64> {
        match op {
            Operator::Add | Operator::Sub | Operator::Mul | Operator::Div => {
                Self::eval_scalar_op(op, left, right)
            },
            Operator::Pow => Ok(Self::eval_pow(left, right)),
        }
    }
}
