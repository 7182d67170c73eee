//! Game module - Drives a [`chess_engine::GameState`] for one front end
//!
//! - [`controller`] - Local, AI and online game modes behind one interface
//! - [`ai`] - Deferred, cancelable AI move search
//! - [`error`] - Errors surfaced to the player

pub mod ai;
pub mod controller;
pub mod error;

pub use controller::{GameController, GameMode};
pub use error::{GameError, GameResult};
