mod error;
mod loopback;
mod packet;
#[cfg(feature = "socket")]
mod socket;
mod transport;

pub use error::*;
pub use loopback::*;
pub use packet::*;
#[cfg(feature = "socket")]
pub use socket::*;
pub use transport::*;
