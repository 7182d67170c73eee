//! PeerChess - chess against a friend, the AI, or a remote opponent
//!
//! The rules engine and search live in the `chess_engine` crate and the wire
//! format in `shared`. This crate wires them into playable games:
//!
//! - [`core`] - Settings and core errors
//! - [`game`] - Game controller and the scheduled AI
//! - [`networking`] - Peer channels and the synchronized session
//! - [`ui`] - Terminal rendering

pub mod core;
pub mod game;
pub mod networking;
pub mod ui;
