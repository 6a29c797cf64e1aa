/// Numeric helpers.
///
/// Rounding of intermediate results and the textual form of results sent to
/// calculator clients.
pub mod num;
