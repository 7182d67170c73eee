//! Error types for online sessions

use chess_engine::ChessEngineError;
use shared::{ConnectionError, ProtocolError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    /// Link not open yet, or colors not assigned
    #[error("Not connected")]
    NotConnected,

    /// Opponent left; the game is frozen
    #[error("Opponent disconnected")]
    Disconnected,

    #[error(transparent)]
    Engine(#[from] ChessEngineError),

    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    #[error(transparent)]
    Connection(#[from] ConnectionError),
}

/// Result type alias for session operations
pub type SessionResult<T> = Result<T, SessionError>;
