//! Room-code matchmaking relay
//!
//! Pairs a hosting connection with a joining connection that presents the
//! same room code, then forwards bytes between them until either side hangs
//! up. The relay never interprets peer traffic.

pub mod relay;

pub use relay::{Relay, RelayError, RoomRegistry, DEFAULT_RELAY_ADDR};
