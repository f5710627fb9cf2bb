use std::time::Duration;

/// Knobs for a player session.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Whether to raise the occasional special-logic signal on our turn.
    pub special_logic: bool,
    /// Pause after pointing out a missing declaration.
    pub pacing: Duration,
    /// Title carried by the special-logic signal.
    pub title: String,
}

impl Settings {
    pub const TITLE: &'static str = "Special Logic Name";
    pub const PACING: Duration = Duration::from_millis(10);
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            special_logic: true,
            pacing: Self::PACING,
            title: Self::TITLE.to_string(),
        }
    }
}
