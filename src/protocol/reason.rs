use serde::Deserialize;
use serde::Serialize;

/// Why the player whose turn it is was made to draw.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawReason {
    #[serde(rename = "draw_2")]
    DrawTwo,
    #[serde(rename = "wild_draw_4")]
    WildDrawFour,
    #[serde(rename = "bind_2")]
    BindTwo,
    #[serde(rename = "skip_bind_2")]
    SkipBindTwo,
    #[default]
    Nothing,
    #[serde(other)]
    Unknown,
}

impl DrawReason {
    /// The previous player laid a wild draw four, which may be contested.
    pub fn is_challengeable(&self) -> bool {
        matches!(self, Self::WildDrawFour)
    }
}
