//! Error types for chess engine
//!
//! Rejections from the game state machine (illegal move, wrong side, finished
//! game) leave the state untouched. Parse errors cover user-supplied text.

use thiserror::Error;

use crate::types::{Color, GameStatus, Move};

/// Errors that can occur in the chess engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessEngineError {
    /// Move is not in the current legal move list
    #[error("Illegal move: {mv}")]
    IllegalMove { mv: Move },

    /// Mover is not the side to move
    #[error("Not {color}'s turn")]
    NotYourTurn { color: Color },

    /// Game has already ended
    #[error("Game is over ({status})")]
    GameOver { status: GameStatus },

    /// Board is missing a king, which no legal sequence can produce
    #[error("No {color} king on the board")]
    MissingKing { color: Color },

    #[error("Invalid square: {text:?}")]
    InvalidSquare { text: String },

    #[error("Invalid move notation: {text:?}")]
    InvalidNotation { text: String },

    #[error("Invalid FEN: {message}")]
    InvalidFen { message: String },
}

/// Result type alias for chess engine operations
pub type ChessEngineResult<T> = Result<T, ChessEngineError>;
