//! Public API for the chess engine
//!
//! [`GameState`] is the game state machine: it owns the canonical board, the
//! side to move, the status and the move history, and changes only through
//! [`GameState::apply_move`], the resignation calls and [`GameState::reset`].
//!
//! ## Module Organization
//!
//! - `game` - Game lifecycle (new, from_fen, reset) and accessors
//! - `moves` - Move execution and lookup (apply_move, parse_move)
//! - `state` - Status queries, resignation and AI reply

mod game;
mod moves;
mod state;

pub use game::GameState;
pub use moves::AppliedMove;
