//! Wire types shared by the game client and the relay server
//!
//! - [`protocol`] - Peer messages and relay handshake frames (newline-delimited JSON)
//! - [`room_code`] - Six-character room codes
//! - [`error`] - Protocol and connection errors

pub mod error;
pub mod protocol;
pub mod room_code;

pub use error::{ConnectionError, ProtocolError};
pub use protocol::{PeerMessage, RejectReason, RelayHello, RelayReply};
pub use room_code::RoomCode;
