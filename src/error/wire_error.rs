use std::io;

#[derive(Debug)]
/// Represents all errors that can occur while exchanging frames with a peer.
pub enum WireError {
    /// The underlying socket failed.
    Io(io::Error),
    /// A payload does not fit in the 16-bit length prefix.
    FrameTooLong {
        /// Length of the rejected payload in bytes.
        len: usize,
    },
    /// A frame payload was not valid UTF-8.
    InvalidUtf8,
    /// The peer hung up in the middle of a frame or before answering.
    ConnectionClosed,
}

impl std::fmt::Display for WireError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::FrameTooLong { len } => write!(f,
                                                 "Frame of {len} bytes exceeds the {} byte limit.",
                                                 u16::MAX),
            Self::InvalidUtf8 => write!(f, "Frame payload is not valid UTF-8."),
            Self::ConnectionClosed => write!(f, "Connection closed by peer."),
        }
    }
}

impl std::error::Error for WireError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for WireError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
