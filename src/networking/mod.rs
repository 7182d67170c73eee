//! Online play
//!
//! A [`Session`] keeps the local [`chess_engine::GameState`] in step with the
//! opponent's copy by exchanging [`shared::PeerMessage`]s over a
//! [`PeerChannel`]. Two transports implement the channel:
//!
//! - [`LoopbackChannel`] - In-process pair, used by tests and local demos
//! - [`TcpChannel`] - Connection through the room-code relay
//!
//! # Lifecycle
//!
//! ```text
//! Connecting --Open--> Connected --Closed/Error--> Disconnected
//! ```
//!
//! Once disconnected a session neither sends nor applies moves; the board
//! stays readable.

pub mod channel;
pub mod error;
pub mod loopback;
pub mod session;
pub mod tcp;

pub use channel::{ChannelEvent, PeerChannel};
pub use error::{SessionError, SessionResult};
pub use loopback::LoopbackChannel;
pub use session::{LinkState, Role, Session, SessionEvent};
pub use tcp::TcpChannel;
