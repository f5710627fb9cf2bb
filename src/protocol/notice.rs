use super::reason::DrawReason;
use super::sizes::HandSizes;
use super::sizes::PlayerId;
use crate::cards::*;
use serde::Deserialize;

/// `next-player`: it is this player's turn.
#[derive(Debug, Clone, Deserialize)]
pub struct NextPlayer {
    #[serde(default)]
    pub number_card_of_player: HandSizes,
    #[serde(default)]
    pub card_of_player: Hand,
    pub card_before: Played,
    #[serde(default)]
    pub draw_reason: DrawReason,
    #[serde(default)]
    pub must_call_draw_card: bool,
}

/// `play-card` and `play-draw-card` as broadcast for any player.
#[derive(Debug, Clone, Deserialize)]
pub struct Yell {
    pub player: PlayerId,
    #[serde(default)]
    pub yell_uno: bool,
}

/// `draw-card` and `penalty` as broadcast: someone's hand grew.
#[derive(Debug, Clone, Deserialize)]
pub struct Grew {
    pub player: PlayerId,
}

/// `shuffle-wild`: every hand was redistributed.
#[derive(Debug, Clone, Deserialize)]
pub struct Shuffled {
    #[serde(default)]
    pub player: Option<PlayerId>,
    pub number_card_of_player: HandSizes,
}

/// `update-color`: the pile was recolored.
#[derive(Debug, Clone, Deserialize)]
pub struct Recolored {
    pub color: Color,
}

/// Acknowledgment of `join-room`.
#[derive(Debug, Clone, Deserialize)]
pub struct Joined {
    pub your_id: PlayerId,
}

/// Acknowledgment of `draw-card`.
#[derive(Debug, Clone, Deserialize)]
pub struct Drew {
    #[serde(default)]
    pub can_play_draw_card: bool,
    #[serde(default)]
    pub draw_card: Vec<Card>,
}

impl Drew {
    /// The drawn card that may be played right away.
    pub fn playable(&self) -> Option<Card> {
        self.can_play_draw_card
            .then(|| self.draw_card.first().copied())
            .flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    #[test]
    fn decodes_turn_snapshot() {
        let turn = serde_json::from_value::<NextPlayer>(json!({
            "next_player": "p1",
            "before_player": "p3",
            "number_card_of_player": {"p2": 1, "p1": 2, "p3": 5},
            "card_of_player": [{"color": "red", "number": 5}, {"color": "black", "special": "wild"}],
            "card_before": {"color": "blue", "number": 5},
            "draw_reason": "nothing",
            "must_call_draw_card": false,
        }))
        .unwrap();
        assert_eq!(turn.card_of_player.len(), 2);
        assert_eq!(turn.card_before.color(), Color::Blue);
        assert_eq!(turn.number_card_of_player.len(), 3);
        assert!(!turn.must_call_draw_card);
    }
    #[test]
    fn turn_without_pile_is_malformed() {
        assert!(serde_json::from_value::<NextPlayer>(json!({"card_of_player": []})).is_err());
    }
    #[test]
    fn drawn_card_only_when_playable() {
        let card = json!({"color": "green", "number": 1});
        let drew = serde_json::from_value::<Drew>(json!({
            "can_play_draw_card": true,
            "draw_card": [card],
        }))
        .unwrap();
        assert_eq!(drew.playable(), Some(Card::ranked(Color::Green, 1)));
        let drew = serde_json::from_value::<Drew>(json!({
            "can_play_draw_card": false,
            "draw_card": [card],
        }))
        .unwrap();
        assert_eq!(drew.playable(), None);
        let drew = serde_json::from_value::<Drew>(json!({"can_play_draw_card": true})).unwrap();
        assert_eq!(drew.playable(), None);
    }
    #[test]
    fn shuffle_without_player_still_decodes() {
        let shuffled =
            serde_json::from_value::<Shuffled>(json!({"number_card_of_player": {"p2": 1}})).unwrap();
        assert_eq!(shuffled.player, None);
        assert_eq!(shuffled.number_card_of_player.len(), 1);
    }
    #[test]
    fn yell_defaults_to_silent() {
        let yell = serde_json::from_value::<Yell>(json!({"player": "p2"})).unwrap();
        assert!(!yell.yell_uno);
    }
}
