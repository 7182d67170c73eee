//! Alpha-beta search
//!
//! This module implements the AI move choice using:
//! - Minimax with alpha-beta pruning (White maximizes, Black minimizes)
//! - Capture-first move ordering for earlier cutoffs
//! - Fixed depth presets; there is no time-based cutoff
//!
//! Every node regenerates its legal moves from scratch. At the shallow preset
//! depths this is fast enough; a transposition table or iterative deepening
//! could be layered on without changing [`search_best_move`].
//!
//! ## Module Organization
//!
//! - `alphabeta` - Core minimax with alpha-beta pruning
//! - `ordering` - Move ordering heuristics
//! - `difficulty` - Depth presets exposed to players

mod alphabeta;
mod difficulty;
mod ordering;

pub use alphabeta::{search_best_move, SearchResult};
pub use difficulty::Difficulty;
pub use ordering::order_moves;
