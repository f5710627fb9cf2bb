use super::card::Card;
use super::color::Color;
use super::face::Face;
use serde::Deserialize;
use serde::Serialize;

/// The active card on the discard pile.
/// Its color is the effective one, already reflecting any wild recoloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Played(Card);

impl Played {
    pub fn color(&self) -> Color {
        self.0.color()
    }
    pub fn face(&self) -> Face {
        self.0.face()
    }
    /// Whether a non-wild card follows this one by color, rank, or special kind.
    pub fn admits(&self, card: &Card) -> bool {
        card.color() == self.color() || card.face() == self.face()
    }
}

impl From<Card> for Played {
    fn from(card: Card) -> Self {
        Self(card)
    }
}

impl std::fmt::Display for Played {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Special;
    #[test]
    fn admits_by_color_rank_or_special() {
        let played = Played::from(Card::ranked(Color::Blue, 5));
        assert!(played.admits(&Card::ranked(Color::Blue, 9)));
        assert!(played.admits(&Card::ranked(Color::Red, 5)));
        assert!(!played.admits(&Card::ranked(Color::Red, 6)));
        let played = Played::from(Card::special(Color::Green, Special::Reverse));
        assert!(played.admits(&Card::special(Color::Yellow, Special::Reverse)));
        assert!(!played.admits(&Card::special(Color::Yellow, Special::Skip)));
    }
    #[test]
    fn admits_rank_zero() {
        let played = Played::from(Card::ranked(Color::Yellow, 0));
        assert!(played.admits(&Card::ranked(Color::Red, 0)));
    }
    #[test]
    fn recolored_wild_governs_by_color() {
        let played = Played::from(Card::special(Color::Red, Special::Wild));
        assert_eq!(played.color(), Color::Red);
        assert!(played.admits(&Card::ranked(Color::Red, 2)));
    }
}
