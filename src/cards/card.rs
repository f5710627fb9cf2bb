use super::color::Color;
use super::face::Face;
use super::special::Special;
use serde::Deserialize;
use serde::Serialize;

/// Errors from cards that break the rank-xor-special rule on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardError {
    MissingFace,
    AmbiguousFace,
    RankOutOfRange(u8),
}

impl std::fmt::Display for CardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingFace => write!(f, "card has neither number nor special"),
            Self::AmbiguousFace => write!(f, "card has both number and special"),
            Self::RankOutOfRange(n) => write!(f, "card number out of range: {}", n),
        }
    }
}

impl std::error::Error for CardError {}

/// An immutable playing card.
///
/// On the wire a card is `{color, number}` or `{color, special}`.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Wire", into = "Wire")]
pub struct Card {
    color: Color,
    face: Face,
}

impl Card {
    pub fn new(color: Color, face: Face) -> Self {
        Self { color, face }
    }
    pub fn ranked(color: Color, rank: u8) -> Self {
        Self::new(color, Face::Rank(rank))
    }
    pub fn special(color: Color, special: Special) -> Self {
        Self::new(color, Face::Special(special))
    }
    /// A wild as dealt, before any color is named.
    pub fn wild(special: Special) -> Self {
        match special {
            Special::WhiteWild => Self::special(Color::White, special),
            _ => Self::special(Color::Black, special),
        }
    }
    pub fn color(&self) -> Color {
        self.color
    }
    pub fn face(&self) -> Face {
        self.face
    }
    pub fn is_wild(&self) -> bool {
        self.face.is_wild()
    }
    /// Whether playing this card requires naming a color in the same message.
    pub fn takes_color(&self) -> bool {
        self.face.special().is_some_and(|s| s.takes_color())
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            self.color.paint(&format!("{} {}", self.color, self.face))
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Wire {
    color: Color,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    number: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    special: Option<Special>,
}

impl TryFrom<Wire> for Card {
    type Error = CardError;
    fn try_from(wire: Wire) -> Result<Self, Self::Error> {
        match (wire.number, wire.special) {
            (Some(_), Some(_)) => Err(CardError::AmbiguousFace),
            (None, None) => Err(CardError::MissingFace),
            (Some(n), None) if n > Face::MAX_RANK => Err(CardError::RankOutOfRange(n)),
            (Some(n), None) => Ok(Self::ranked(wire.color, n)),
            (None, Some(s)) => Ok(Self::special(wire.color, s)),
        }
    }
}

impl From<Card> for Wire {
    fn from(card: Card) -> Self {
        Self {
            color: card.color,
            number: card.face.rank(),
            special: card.face.special(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    #[test]
    fn decodes_numbered_card() {
        let card = serde_json::from_value::<Card>(json!({"color": "red", "number": 0})).unwrap();
        assert_eq!(card, Card::ranked(Color::Red, 0));
        assert!(!card.is_wild());
    }
    #[test]
    fn decodes_special_card() {
        let card =
            serde_json::from_value::<Card>(json!({"color": "black", "special": "wild_draw_4"}))
                .unwrap();
        assert_eq!(card, Card::wild(Special::WildDrawFour));
        assert!(card.is_wild());
        assert!(card.takes_color());
    }
    #[test]
    fn encodes_without_absent_face() {
        let value = serde_json::to_value(Card::special(Color::Green, Special::Skip)).unwrap();
        assert_eq!(value, json!({"color": "green", "special": "skip"}));
        let value = serde_json::to_value(Card::ranked(Color::Blue, 3)).unwrap();
        assert_eq!(value, json!({"color": "blue", "number": 3}));
    }
    #[test]
    fn rejects_broken_faces() {
        assert!(serde_json::from_value::<Card>(json!({"color": "red"})).is_err());
        assert!(
            serde_json::from_value::<Card>(json!({"color": "red", "number": 1, "special": "skip"}))
                .is_err()
        );
        assert!(serde_json::from_value::<Card>(json!({"color": "red", "number": 12})).is_err());
    }
    #[test]
    fn white_wild_is_white() {
        assert_eq!(Card::wild(Special::WhiteWild).color(), Color::White);
        assert_eq!(Card::wild(Special::WildShuffle).color(), Color::Black);
    }
}
