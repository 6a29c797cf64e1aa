//! # infix
//!
//! infix evaluates single arithmetic expressions written in everyday infix
//! notation, such as `3(4 + 5)` or `-(2^3) / [1 + 1]`, and ships a small TCP
//! calculator service built on top of the evaluator.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

/// Provides unified error types for evaluation and transport.
///
/// This module defines every error that can be raised while tokenizing or
/// evaluating an expression, and while exchanging frames with calculator
/// clients. Errors are returned to the caller, never turned into a process
/// exit.
///
/// # Responsibilities
/// - Separates user-input errors from evaluator logic errors.
/// - Implements `Display` and `std::error::Error` for reporting.
pub mod error;
/// Turns expressions into numbers.
///
/// This module ties together normalization, lexing, tokenization and the
/// stack evaluator.
///
/// # Responsibilities
/// - Coordinates the stages from raw text to a single `f64`.
/// - Validates the token sequence before any arithmetic happens.
/// - Exposes evaluator options for rounding and exponent grouping.
pub mod interpreter;
/// The calculator service.
///
/// A TCP server that answers one expression per length-prefixed frame, the
/// matching client, and the per-connection session bookkeeping.
pub mod server;
/// The tokens exchanged between the tokenizer and the evaluator.
pub mod token;
/// General numeric helpers.
///
/// Rounding and result formatting shared by the evaluator and the server.
pub mod util;

pub use error::EvalError;
pub use interpreter::{
    evaluator::{
        core::EvalResult,
        options::{EvalOptions, PowerAssociativity, Rounding},
    },
    normalizer::normalize,
    tokenizer::tokenize,
};

use crate::interpreter::evaluator::core::Evaluator;

/// Evaluates an arithmetic expression with the default options.
///
/// The expression may contain numbers, `+ - * / ^`, parentheses or square
/// brackets, and any whitespace. Every call works on its own stacks, so the
/// function can be called concurrently and always gives the same answer for
/// the same input.
///
/// # Errors
/// Returns an [`EvalError`] if the expression is malformed, its parentheses
/// do not balance, or it divides by zero.
///
/// # Examples
/// ```
/// use infix::{EvalError, evaluate};
///
/// assert_eq!(evaluate("3 + 4 * 2").unwrap(), 11.0);
/// assert_eq!(evaluate("3(4+5)").unwrap(), 27.0);
/// assert_eq!(evaluate("2^3^2").unwrap(), 64.0);
///
/// assert_eq!(evaluate("10/0"), Err(EvalError::DivisionByZero));
/// assert_eq!(evaluate("(1+2"), Err(EvalError::UnbalancedParens));
/// ```
pub fn evaluate(expression: &str) -> EvalResult<f64> {
    evaluate_with(expression, &EvalOptions::default())
}

/// Evaluates an arithmetic expression with explicit options.
///
/// # Errors
/// Same as [`evaluate`].
///
/// # Examples
/// ```
/// use infix::{EvalOptions, PowerAssociativity, evaluate_with};
///
/// let options = EvalOptions::default().with_power(PowerAssociativity::Right);
/// assert_eq!(evaluate_with("2^3^2", &options).unwrap(), 512.0);
/// ```
pub fn evaluate_with(expression: &str, options: &EvalOptions) -> EvalResult<f64> {
    let tokens = tokenize(expression)?;
    let result = Evaluator::new(*options).run(&tokens)?;
    debug!(expression, result, "evaluated expression");
    Ok(result)
}
