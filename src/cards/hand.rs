use super::card::Card;
use serde::Deserialize;
use serde::Serialize;

/// A player's cards in the order the coordinator lists them.
/// The decision engine only ever reads a snapshot of it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hand(Vec<Card>);

impl Hand {
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.0.iter()
    }
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
    /// Cards left after playing one card, counting `drawn` cards not yet in this snapshot.
    pub fn after_play(&self, drawn: usize) -> usize {
        (self.len() + drawn).saturating_sub(1)
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self(cards)
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "[{}]",
            self.0
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
