use super::command::Command;
use super::event::Event;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Errors that can occur while reading coordinator messages.
#[derive(Debug, Clone, PartialEq)]
pub enum ProtocolError {
    UnknownEvent(String),
    Malformed(Event, String),
}

impl std::fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownEvent(s) => write!(f, "unknown event: {}", s),
            Self::Malformed(e, s) => write!(f, "malformed {} payload: {}", e, s),
        }
    }
}

impl std::error::Error for ProtocolError {}

/// Boundary between typed commands and notices and the named JSON messages on the wire.
pub struct Protocol;

impl Protocol {
    /// Converts a command into the event name and payload to emit.
    pub fn encode(command: &Command) -> (Event, Value) {
        (command.event(), command.payload())
    }
    /// Resolves an inbound event name.
    pub fn event(name: &str) -> Result<Event, ProtocolError> {
        Event::try_from(name).map_err(|_| ProtocolError::UnknownEvent(name.to_string()))
    }
    /// Reads a typed payload out of an inbound message or acknowledgment.
    pub fn decode<T>(event: Event, payload: &Value) -> Result<T, ProtocolError>
    where
        T: DeserializeOwned,
    {
        T::deserialize(payload).map_err(|e| ProtocolError::Malformed(event, e.to_string()))
    }
}
