use crate::cards::*;

/// Preference tiers for legal plays. Lower tiers are played first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    /// Follows the pile by effective color, rank, or special kind.
    Follow,
    /// Wild, shuffle wild, and white wild.
    Wild,
    /// Wild draw four, kept until nothing else is playable.
    WildDrawFour,
}

impl Tier {
    /// The tier a card falls in against the pile, if it is playable at all.
    pub fn of(card: &Card, played: &Played) -> Option<Self> {
        match card.face() {
            Face::Special(Special::WildDrawFour) => Some(Self::WildDrawFour),
            face if face.is_wild() => Some(Self::Wild),
            _ if played.admits(card) => Some(Self::Follow),
            _ => None,
        }
    }
}

/// Picks the card to play: the first card of the lowest non-empty tier.
/// None means nothing is playable and a draw is due.
pub fn choose_card(hand: &Hand, played: &Played) -> Option<Card> {
    hand.iter()
        .filter_map(|card| Tier::of(card, played).map(|tier| (tier, *card)))
        .min_by_key(|(tier, _)| *tier)
        .map(|(_, card)| card)
}
