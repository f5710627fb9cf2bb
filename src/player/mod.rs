mod player;
mod settings;

pub use player::*;
pub use settings::*;
