use super::event::Event;
use super::sizes::PlayerId;
use crate::cards::*;
use serde_json::Value;
use serde_json::json;

/// Messages this player sends to the coordinator.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    JoinRoom { player: String, room_name: String },
    ColorOfWild(Color),
    Play {
        card: Card,
        yell_uno: bool,
        color: Option<Color>,
    },
    Draw,
    PlayDrawn { yell_uno: bool, color: Option<Color> },
    Challenge(bool),
    PointOut(PlayerId),
    SpecialLogic(String),
}

impl Command {
    pub fn event(&self) -> Event {
        match self {
            Self::JoinRoom { .. } => Event::JoinRoom,
            Self::ColorOfWild(_) => Event::ColorOfWild,
            Self::Play { .. } => Event::PlayCard,
            Self::Draw => Event::DrawCard,
            Self::PlayDrawn { .. } => Event::PlayDrawCard,
            Self::Challenge(_) => Event::Challenge,
            Self::PointOut(_) => Event::PointedNotSayUno,
            Self::SpecialLogic(_) => Event::SpecialLogic,
        }
    }

    pub fn payload(&self) -> Value {
        match self {
            Self::JoinRoom { player, room_name } => json!({
                "player": player,
                "room_name": room_name,
            }),
            Self::ColorOfWild(color) => json!({ "color_of_wild": color }),
            Self::Play {
                card,
                yell_uno,
                color,
            } => Self::colored(
                json!({
                    "card_play": card,
                    "yell_uno": yell_uno,
                }),
                *color,
            ),
            Self::Draw => json!({}),
            Self::PlayDrawn { yell_uno, color } => Self::colored(
                json!({
                    "is_play_card": true,
                    "yell_uno": yell_uno,
                }),
                *color,
            ),
            Self::Challenge(challenge) => json!({ "is_challenge": challenge }),
            Self::PointOut(target) => json!({ "target": target }),
            Self::SpecialLogic(title) => json!({ "title": title }),
        }
    }

    fn colored(mut payload: Value, color: Option<Color>) -> Value {
        if let (Some(map), Some(color)) = (payload.as_object_mut(), color) {
            map.insert("color_of_wild".to_string(), json!(color));
        }
        payload
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::JoinRoom { player, room_name } => write!(f, "join {} as {}", room_name, player),
            Self::ColorOfWild(color) => write!(f, "name {}", color),
            Self::Play { card, .. } => write!(f, "play {}", card),
            Self::Draw => write!(f, "draw"),
            Self::PlayDrawn { .. } => write!(f, "play drawn card"),
            Self::Challenge(true) => write!(f, "challenge"),
            Self::Challenge(false) => write!(f, "accept"),
            Self::PointOut(target) => write!(f, "point out {}", target),
            Self::SpecialLogic(title) => write!(f, "special logic {}", title),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn play_without_color() {
        let command = Command::Play {
            card: Card::ranked(Color::Red, 5),
            yell_uno: false,
            color: None,
        };
        assert_eq!(command.event(), Event::PlayCard);
        assert_eq!(
            command.payload(),
            json!({"card_play": {"color": "red", "number": 5}, "yell_uno": false})
        );
    }
    #[test]
    fn play_wild_names_color() {
        let command = Command::Play {
            card: Card::wild(Special::Wild),
            yell_uno: true,
            color: Some(Color::Blue),
        };
        assert_eq!(
            command.payload(),
            json!({
                "card_play": {"color": "black", "special": "wild"},
                "yell_uno": true,
                "color_of_wild": "blue",
            })
        );
    }
    #[test]
    fn play_drawn_card() {
        let command = Command::PlayDrawn {
            yell_uno: false,
            color: Some(Color::Green),
        };
        assert_eq!(command.event(), Event::PlayDrawCard);
        assert_eq!(
            command.payload(),
            json!({"is_play_card": true, "yell_uno": false, "color_of_wild": "green"})
        );
    }
    #[test]
    fn small_payloads() {
        assert_eq!(Command::Draw.payload(), json!({}));
        assert_eq!(
            Command::Challenge(true).payload(),
            json!({"is_challenge": true})
        );
        assert_eq!(
            Command::PointOut(PlayerId::from("p2")).payload(),
            json!({"target": "p2"})
        );
        assert_eq!(
            Command::ColorOfWild(Color::Yellow).payload(),
            json!({"color_of_wild": "yellow"})
        );
    }
}
