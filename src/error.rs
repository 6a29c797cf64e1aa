/// Evaluation errors.
///
/// Defines every way a single expression can be rejected: malformed input,
/// unbalanced parentheses, division by zero, and internal invariant
/// violations of the evaluator itself.
pub mod eval_error;
/// Transport errors.
///
/// Contains the errors raised while moving length-prefixed frames between the
/// calculator server and its clients, such as I/O failures or payloads that
/// are not valid UTF-8.
pub mod wire_error;

pub use eval_error::EvalError;
pub use wire_error::WireError;
