use serde::Deserialize;
use serde::Serialize;

/// Action and wild card kinds.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Special {
    Skip,
    Reverse,
    #[serde(rename = "draw_2")]
    DrawTwo,
    Wild,
    #[serde(rename = "wild_draw_4")]
    WildDrawFour,
    WildShuffle,
    WhiteWild,
}

impl Special {
    /// Playable regardless of the card on the pile.
    pub fn is_wild(&self) -> bool {
        matches!(
            self,
            Self::Wild | Self::WildDrawFour | Self::WildShuffle | Self::WhiteWild
        )
    }
    /// A new color is named in the same message that plays the card.
    /// Shuffle wilds get their color through a separate request.
    pub fn takes_color(&self) -> bool {
        matches!(self, Self::Wild | Self::WildDrawFour)
    }
}

impl std::fmt::Display for Special {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Skip => "skip",
                Self::Reverse => "reverse",
                Self::DrawTwo => "draw_2",
                Self::Wild => "wild",
                Self::WildDrawFour => "wild_draw_4",
                Self::WildShuffle => "wild_shuffle",
                Self::WhiteWild => "white_wild",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn wild_kinds() {
        assert!(Special::Wild.is_wild());
        assert!(Special::WildDrawFour.is_wild());
        assert!(Special::WildShuffle.is_wild());
        assert!(Special::WhiteWild.is_wild());
        assert!(!Special::Skip.is_wild());
        assert!(!Special::DrawTwo.is_wild());
    }
    #[test]
    fn only_plain_wilds_take_color() {
        assert!(Special::Wild.takes_color());
        assert!(Special::WildDrawFour.takes_color());
        assert!(!Special::WildShuffle.takes_color());
        assert!(!Special::WhiteWild.takes_color());
    }
    #[test]
    fn wire_names_match_display() {
        for special in [Special::DrawTwo, Special::WildDrawFour, Special::WhiteWild] {
            assert_eq!(
                serde_json::to_value(special).unwrap(),
                special.to_string().as_str()
            );
        }
    }
}
