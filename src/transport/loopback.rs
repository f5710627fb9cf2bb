use super::error::TransportError;
use super::transport::*;
use crate::protocol::Event;
use serde_json::Value;
use std::collections::HashMap;
use std::collections::VecDeque;

/// In-memory transport that replays a queue of notices and records
/// every emit. Acknowledgments come from per-event scripts and default
/// to an empty payload.
#[derive(Debug, Default)]
pub struct Loopback {
    inbound: VecDeque<Notice>,
    replies: HashMap<String, VecDeque<Result<Value, TransportError>>>,
    sent: Vec<(String, Value)>,
}

impl Loopback {
    /// Queues an inbound notice.
    pub fn notice(mut self, event: Event, payload: Value) -> Self {
        self.push(event.as_str(), payload);
        self
    }
    /// Scripts the next acknowledgment for an event.
    pub fn reply(mut self, event: Event, answer: Result<Value, TransportError>) -> Self {
        self.replies
            .entry(event.as_str().to_string())
            .or_default()
            .push_back(answer);
        self
    }
    /// Queues an inbound notice under any name.
    pub fn push(&mut self, name: &str, payload: Value) {
        self.inbound.push_back(Notice::new(name, payload));
    }
    pub fn sent(&self) -> &[(String, Value)] {
        &self.sent
    }
    pub fn sent_names(&self) -> Vec<&str> {
        self.sent.iter().map(|(name, _)| name.as_str()).collect()
    }
    pub fn pending(&self) -> usize {
        self.inbound.len()
    }
}

#[async_trait::async_trait]
impl Transport for Loopback {
    async fn emit(&mut self, name: &str, payload: Value) -> Result<Value, TransportError> {
        self.sent.push((name.to_string(), payload));
        self.replies
            .get_mut(name)
            .and_then(|queue| queue.pop_front())
            .unwrap_or(Ok(Value::Null))
    }
    async fn recv(&mut self) -> Option<Notice> {
        self.inbound.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    #[tokio::test]
    async fn records_and_replies() {
        let mut loopback = Loopback::default()
            .reply(Event::DrawCard, Ok(json!({"can_play_draw_card": false})))
            .reply(Event::DrawCard, Err(TransportError::Rejected("no".into())));
        let first = loopback.emit("draw-card", json!({})).await;
        let second = loopback.emit("draw-card", json!({})).await;
        let third = loopback.emit("draw-card", json!({})).await;
        assert_eq!(first, Ok(json!({"can_play_draw_card": false})));
        assert!(second.is_err());
        assert_eq!(third, Ok(Value::Null));
        assert_eq!(loopback.sent_names(), vec!["draw-card"; 3]);
    }
    #[tokio::test]
    async fn replays_notices_in_order() {
        let mut loopback = Loopback::default()
            .notice(Event::FirstPlayer, json!({}))
            .notice(Event::FinishTurn, json!({}));
        assert_eq!(loopback.pending(), 2);
        assert_eq!(loopback.recv().await.map(|n| n.name), Some("first-player".into()));
        assert_eq!(loopback.recv().await.map(|n| n.name), Some("finish-turn".into()));
        assert_eq!(loopback.recv().await, None);
    }
}
