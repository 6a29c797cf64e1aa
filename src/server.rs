/// Interactive client side of the calculator protocol.
pub mod client;
/// TCP listener that answers calculator requests, one task per client.
pub mod listener;
/// Per-connection bookkeeping and session log files.
pub mod session;
/// Length-prefixed UTF-8 framing shared by server and client.
pub mod wire;

/// Port the calculator server listens on unless told otherwise.
pub const DEFAULT_PORT: u16 = 5000;

/// A request consisting of exactly this string ends a session.
pub const STOP: &str = "#";
