use super::error::TransportError;
use serde_json::Value;

/// Socket.IO v4 packets as carried over Engine.IO v4 text frames.
#[derive(Debug, Clone, PartialEq)]
pub enum Packet {
    /// `0{...}` handshake from the server.
    Open(Value),
    /// `1`
    Close,
    /// `2`
    Ping,
    /// `3`
    Pong,
    /// `6`
    Noop,
    /// `40` namespace connect, with the server's `{sid}` when inbound.
    Connect(Option<Value>),
    /// `41`
    Disconnect,
    /// `42[id]["name", ...args]`
    Event {
        id: Option<u64>,
        name: String,
        args: Vec<Value>,
    },
    /// `43id[...args]`
    Ack { id: u64, args: Vec<Value> },
    /// `44{...}`
    ConnectError(Value),
}

impl Packet {
    pub fn event(id: Option<u64>, name: &str, payload: Value) -> Self {
        Self::Event {
            id,
            name: name.to_string(),
            args: vec![payload],
        }
    }

    pub fn encode(&self) -> String {
        match self {
            Self::Open(info) => format!("0{}", info),
            Self::Close => "1".to_string(),
            Self::Ping => "2".to_string(),
            Self::Pong => "3".to_string(),
            Self::Noop => "6".to_string(),
            Self::Connect(None) => "40".to_string(),
            Self::Connect(Some(auth)) => format!("40{}", auth),
            Self::Disconnect => "41".to_string(),
            Self::Event { id, name, args } => format!(
                "42{}{}",
                id.map(|i| i.to_string()).unwrap_or_default(),
                Value::Array(
                    std::iter::once(Value::from(name.as_str()))
                        .chain(args.iter().cloned())
                        .collect()
                )
            ),
            Self::Ack { id, args } => format!("43{}{}", id, Value::Array(args.clone())),
            Self::ConnectError(err) => format!("44{}", err),
        }
    }

    /// Reads an acknowledgment's `[err, res]` arguments.
    pub fn answer(args: Vec<Value>) -> Result<Value, TransportError> {
        let mut args = args.into_iter();
        match (args.next(), args.next()) {
            (None, _) => Ok(Value::Null),
            (Some(Value::Null), res) => Ok(res.unwrap_or(Value::Null)),
            (Some(err), _) => Err(TransportError::Rejected(err.to_string())),
        }
    }

    fn json(frame: &str, body: &str) -> Result<Value, TransportError> {
        match body {
            "" => Ok(Value::Null),
            body => serde_json::from_str(body)
                .map_err(|e| TransportError::Malformed(format!("{}: {}", frame, e))),
        }
    }

    fn message(frame: &str, body: &str) -> Result<Self, TransportError> {
        let malformed = || TransportError::Malformed(frame.to_string());
        let mut chars = body.chars();
        let kind = chars.next().ok_or_else(malformed)?;
        let rest = chars.as_str();
        let rest = match rest.strip_prefix('/') {
            Some(ns) => ns.split_once(',').map(|(_, r)| r).unwrap_or_default(),
            None => rest,
        };
        let digits = rest.chars().take_while(|c| c.is_ascii_digit()).count();
        let (id, data) = rest.split_at(digits);
        let id = id.parse::<u64>().ok();
        match kind {
            '0' => match data {
                "" => Ok(Self::Connect(None)),
                data => Ok(Self::Connect(Some(Self::json(frame, data)?))),
            },
            '1' => Ok(Self::Disconnect),
            '2' => match Self::json(frame, data)? {
                Value::Array(items) => {
                    let mut items = items.into_iter();
                    match items.next() {
                        Some(Value::String(name)) => Ok(Self::Event {
                            id,
                            name,
                            args: items.collect(),
                        }),
                        _ => Err(malformed()),
                    }
                }
                _ => Err(malformed()),
            },
            '3' => match (id, Self::json(frame, data)?) {
                (Some(id), Value::Array(args)) => Ok(Self::Ack { id, args }),
                _ => Err(malformed()),
            },
            '4' => Ok(Self::ConnectError(Self::json(frame, data)?)),
            _ => Err(malformed()),
        }
    }
}

impl TryFrom<&str> for Packet {
    type Error = TransportError;
    fn try_from(frame: &str) -> Result<Self, Self::Error> {
        let mut chars = frame.chars();
        match chars.next() {
            Some('0') => Ok(Self::Open(Self::json(frame, chars.as_str())?)),
            Some('1') => Ok(Self::Close),
            Some('2') => Ok(Self::Ping),
            Some('3') => Ok(Self::Pong),
            Some('4') => Self::message(frame, chars.as_str()),
            Some('6') => Ok(Self::Noop),
            _ => Err(TransportError::Malformed(frame.to_string())),
        }
    }
}

/// Websocket URL of the Socket.IO endpoint behind a coordinator host.
pub fn endpoint(host: &str) -> String {
    let host = host.trim().trim_end_matches('/');
    let (scheme, rest) = match host.split_once("://") {
        Some(("https" | "wss", rest)) => ("wss", rest),
        Some((_, rest)) => ("ws", rest),
        None => ("ws", host),
    };
    format!("{}://{}/socket.io/?EIO=4&transport=websocket", scheme, rest)
}
