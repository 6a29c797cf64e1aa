/// How intermediate results are rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rounding {
    /// Keep full double precision.
    #[default]
    None,
    /// Round every operator result half-up to this many decimal places.
    DecimalPlaces(u8),
}

/// How chains of `^` group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PowerAssociativity {
    /// `2^3^2` is `(2^3)^2`, like every other operator.
    #[default]
    Left,
    /// `2^3^2` is `2^(3^2)`, the usual mathematical convention.
    Right,
}

/// Tunable behavior of the stack evaluator.
///
/// The default keeps full precision and evaluates every operator, `^`
/// included, left to right.
///
/// # Example
/// ```
/// use infix::{EvalOptions, PowerAssociativity, Rounding, evaluate_with};
///
/// let options = EvalOptions::default().with_power(PowerAssociativity::Right);
/// assert_eq!(evaluate_with("2^3^2", &options).unwrap(), 512.0);
///
/// let options = EvalOptions::default().with_rounding(Rounding::DecimalPlaces(1));
/// assert_eq!(evaluate_with("1/3", &options).unwrap(), 0.3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EvalOptions {
    /// Rounding applied after each operator.
    pub rounding: Rounding,
    /// Grouping of chained exponentiation.
    pub power:    PowerAssociativity,
}

impl EvalOptions {
    /// Returns these options with `rounding` replaced.
    #[must_use]
    pub const fn with_rounding(mut self, rounding: Rounding) -> Self {
        self.rounding = rounding;
        self
    }

    /// Returns these options with `power` replaced.
    #[must_use]
    pub const fn with_power(mut self, power: PowerAssociativity) -> Self {
        self.power = power;
        self
    }
}
