/// Binary operator evaluation logic.
///
/// Handles the arithmetic behind each operator, including the division by
/// zero check.
pub mod binary;

/// Core evaluation logic and stack management.
///
/// Contains the two-stack evaluation engine, operator precedence handling and
/// error propagation.
pub mod core;

/// Evaluator configuration.
///
/// Opt-in behaviors that change numeric results: intermediate rounding and
/// right-associative exponentiation.
pub mod options;
