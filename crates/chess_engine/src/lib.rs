//! # Chess Engine
//!
//! Rules engine and move search for standard chess.
//!
//! ## Layers
//!
//! - [`board`] - Square-array board model; moves are applied copy-on-write
//! - [`move_gen`] - Pseudo-legal generation, attack detection and the legality filter
//! - [`evaluation`] - Material plus piece-square static evaluation
//! - [`search`] - Minimax with alpha-beta pruning and difficulty presets
//! - [`api`] - [`GameState`], the game state machine used by every front end
//!
//! ## Example
//!
//! ```
//! use chess_engine::{GameState, GameStatus};
//!
//! let mut game = GameState::new();
//! for text in ["f2f3", "e7e5", "g2g4", "d8h4"] {
//!     let mv = game.parse_move(text).unwrap();
//!     game.apply_move(mv).unwrap();
//! }
//! assert_eq!(game.status(), GameStatus::Checkmate);
//! ```
//!
//! Nothing in this crate performs I/O or spawns threads; callers decide where
//! a search runs.

pub mod api;
pub mod board;
pub mod constants;
pub mod error;
pub mod evaluation;
pub mod move_gen;
pub mod search;
pub mod types;
pub mod utils;

pub use api::{AppliedMove, GameState};
pub use board::Board;
pub use error::{ChessEngineError, ChessEngineResult};
pub use move_gen::{is_in_check, legal_moves, position_status};
pub use search::{search_best_move, Difficulty, SearchResult};
pub use types::{CastleSide, CastlingRights, Color, GameStatus, Move, Piece, PieceKind, Square};
