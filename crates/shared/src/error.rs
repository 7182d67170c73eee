use thiserror::Error;

use crate::protocol::RejectReason;

/// A line could not be encoded or decoded
#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("Malformed message: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Empty line")]
    EmptyLine,
}

/// Why a session could not be established or was lost
///
/// `Display` is the short status line shown to the player.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConnectionError {
    #[error("Room not found")]
    RoomNotFound,

    #[error("Room code already in use")]
    CodeInUse,

    #[error("Invalid room code")]
    InvalidCode,

    #[error("Connection failed: {0}")]
    Transport(String),
}

impl From<RejectReason> for ConnectionError {
    fn from(reason: RejectReason) -> Self {
        match reason {
            RejectReason::RoomNotFound => ConnectionError::RoomNotFound,
            RejectReason::CodeInUse => ConnectionError::CodeInUse,
            RejectReason::InvalidCode => ConnectionError::InvalidCode,
        }
    }
}

impl From<std::io::Error> for ConnectionError {
    fn from(err: std::io::Error) -> Self {
        ConnectionError::Transport(err.to_string())
    }
}
