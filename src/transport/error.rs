/// Errors that can occur at the transport boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The session is gone.
    Closed,
    /// The coordinator acknowledged with an error.
    Rejected(String),
    /// A frame that does not parse.
    Malformed(String),
    /// The underlying websocket failed.
    Socket(String),
}

impl std::fmt::Display for TransportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Closed => write!(f, "session closed"),
            Self::Rejected(s) => write!(f, "rejected: {}", s),
            Self::Malformed(s) => write!(f, "malformed frame: {}", s),
            Self::Socket(s) => write!(f, "socket error: {}", s),
        }
    }
}

impl std::error::Error for TransportError {}
