/// Named messages exchanged with the coordinator.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Event {
    JoinRoom,
    ReceiverCard,
    FirstPlayer,
    ColorOfWild,
    UpdateColor,
    ShuffleWild,
    NextPlayer,
    PlayCard,
    DrawCard,
    PlayDrawCard,
    Challenge,
    PublicCard,
    PointedNotSayUno,
    SpecialLogic,
    FinishTurn,
    FinishGame,
    Penalty,
}

impl Event {
    pub const ALL: [Self; 17] = [
        Self::JoinRoom,
        Self::ReceiverCard,
        Self::FirstPlayer,
        Self::ColorOfWild,
        Self::UpdateColor,
        Self::ShuffleWild,
        Self::NextPlayer,
        Self::PlayCard,
        Self::DrawCard,
        Self::PlayDrawCard,
        Self::Challenge,
        Self::PublicCard,
        Self::PointedNotSayUno,
        Self::SpecialLogic,
        Self::FinishTurn,
        Self::FinishGame,
        Self::Penalty,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::JoinRoom => "join-room",
            Self::ReceiverCard => "receiver-card",
            Self::FirstPlayer => "first-player",
            Self::ColorOfWild => "color-of-wild",
            Self::UpdateColor => "update-color",
            Self::ShuffleWild => "shuffle-wild",
            Self::NextPlayer => "next-player",
            Self::PlayCard => "play-card",
            Self::DrawCard => "draw-card",
            Self::PlayDrawCard => "play-draw-card",
            Self::Challenge => "challenge",
            Self::PublicCard => "public-card",
            Self::PointedNotSayUno => "pointed-not-say-uno",
            Self::SpecialLogic => "special-logic",
            Self::FinishTurn => "finish-turn",
            Self::FinishGame => "finish-game",
            Self::Penalty => "penalty",
        }
    }
}

impl TryFrom<&str> for Event {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|e| e.as_str() == s)
            .ok_or_else(|| format!("unknown event: {}", s))
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
