//! Wire vocabulary shared with the coordinator.
//!
//! - [`Event`]: message names
//! - [`Command`]: outbound messages this player sends
//! - notices: typed inbound payloads and acknowledgments
//! - [`Protocol`]: encoding and decoding at the boundary
mod codec;
mod command;
mod event;
mod notice;
mod reason;
mod sizes;

pub use codec::*;
pub use command::*;
pub use event::*;
pub use notice::*;
pub use reason::*;
pub use sizes::*;
