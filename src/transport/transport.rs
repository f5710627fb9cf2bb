use super::error::TransportError;
use serde_json::Value;

/// An inbound named message from the coordinator.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub name: String,
    pub payload: Value,
}

impl Notice {
    pub fn new(name: &str, payload: Value) -> Self {
        Self {
            name: name.to_string(),
            payload,
        }
    }
}

/// The session with the coordinator, as seen by the player.
///
/// Notices come out one at a time through [`recv`](Transport::recv), and an
/// [`emit`](Transport::emit) resolves only once the coordinator has
/// acknowledged it. A caller that awaits each emit before the next recv
/// therefore finishes one notice completely before starting the next.
#[async_trait::async_trait]
pub trait Transport: Send {
    /// Sends a named message and waits for the acknowledgment payload.
    async fn emit(&mut self, name: &str, payload: Value) -> Result<Value, TransportError>;
    /// The next inbound message, or None once the session is gone.
    async fn recv(&mut self) -> Option<Notice>;
}
