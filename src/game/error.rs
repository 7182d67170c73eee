//! Error types for game module
//!
//! Provides custom error types for rejected player input.

use chess_engine::ChessEngineError;

use crate::networking::SessionError;

/// Errors that can occur in game logic
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// Rejected by the rules engine
    #[error(transparent)]
    Engine(#[from] ChessEngineError),

    /// Rejected by the online session
    #[error(transparent)]
    Session(#[from] SessionError),

    /// Player tried to move while the AI is to move
    #[error("Waiting for the AI to move")]
    AiTurn,
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;
