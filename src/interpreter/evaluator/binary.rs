/// Dispatch of binary operators to their handlers.
pub mod core;
/// Exponentiation.
pub mod power;
/// `+`, `-`, `*` and `/`, including the division-by-zero check.
pub mod scalar;
