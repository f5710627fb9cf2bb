mod card;
mod color;
mod face;
mod hand;
mod played;
mod special;

pub use card::*;
pub use color::*;
pub use face::*;
pub use hand::*;
pub use played::*;
pub use special::*;
