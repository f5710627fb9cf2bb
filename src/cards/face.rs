use super::special::Special;

/// What is printed on a card besides its color.
/// Exactly one of a rank or a special kind.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Face {
    Rank(u8),
    Special(Special),
}

impl Face {
    pub const MAX_RANK: u8 = 9;

    pub fn rank(&self) -> Option<u8> {
        match self {
            Self::Rank(n) => Some(*n),
            Self::Special(_) => None,
        }
    }
    pub fn special(&self) -> Option<Special> {
        match self {
            Self::Rank(_) => None,
            Self::Special(s) => Some(*s),
        }
    }
    pub fn is_wild(&self) -> bool {
        self.special().is_some_and(|s| s.is_wild())
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Rank(n) => write!(f, "{}", n),
            Self::Special(s) => write!(f, "{}", s),
        }
    }
}
