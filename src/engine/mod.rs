//! Turn decisions: which card to play, which color to name,
//! and whether to contest a wild draw four.
mod dice;
mod select;
mod strategy;

pub use dice::*;
pub use select::*;
pub use strategy::*;
