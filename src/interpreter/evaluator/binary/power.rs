use crate::interpreter::evaluator::core::Evaluator;

impl Evaluator {
    /// Evaluates an exponentiation operation with `powf`.
    ///
    /// No checks are made: a negative base with a fractional exponent yields
    /// `NaN` and overflow yields an infinity, as IEEE-754 prescribes.
    ///
    /// # Example
    /// ```
    /// use infix::interpreter::evaluator::core::Evaluator;
    ///
    /// assert_eq!(Evaluator::eval_pow(2.0, 3.0), 8.0);
    /// assert!(Evaluator::eval_pow(-8.0, 0.5).is_nan());
    /// ```
    #[must_use]
    pub fn eval_pow(base: f64, exponent: f64) -> f64 {
        base.powf(exponent)
    }
}
