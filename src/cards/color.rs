use colored::ColoredString;
use colored::Colorize;
use serde::Deserialize;
use serde::Serialize;

/// Card color as named by the coordinator.
/// Black marks a wild that has not been recolored; white marks the white wild.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Yellow,
    Green,
    Blue,
    Black,
    White,
}

impl Color {
    /// The colors a wild can be recolored to.
    pub const PALETTE: [Self; 4] = [Self::Red, Self::Yellow, Self::Green, Self::Blue];

    pub fn is_wild(&self) -> bool {
        matches!(self, Self::Black | Self::White)
    }

    /// Paints text in this color for terminal output.
    pub fn paint(&self, text: &str) -> ColoredString {
        match self {
            Self::Red => text.red(),
            Self::Yellow => text.yellow(),
            Self::Green => text.green(),
            Self::Blue => text.blue(),
            Self::Black => text.normal(),
            Self::White => text.white(),
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Red => "red",
                Self::Yellow => "yellow",
                Self::Green => "green",
                Self::Blue => "blue",
                Self::Black => "black",
                Self::White => "white",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn palette_excludes_wild_markers() {
        assert_eq!(Color::PALETTE.len(), 4);
        assert!(Color::PALETTE.iter().all(|c| !c.is_wild()));
    }
    #[test]
    fn wire_names_are_lowercase() {
        assert_eq!(serde_json::to_value(Color::Blue).unwrap(), "blue");
        assert_eq!(
            serde_json::from_value::<Color>(serde_json::json!("black")).unwrap(),
            Color::Black
        );
    }
}
