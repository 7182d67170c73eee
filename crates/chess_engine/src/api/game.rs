//! Game lifecycle management
//!
//! Functions for creating and resetting games.

use crate::board::Board;
use crate::error::ChessEngineResult;
use crate::move_gen::position_status;
use crate::types::*;

use super::moves::AppliedMove;

/// Canonical state of one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(super) board: Board,
    pub(super) turn: Color,
    pub(super) status: GameStatus,
    pub(super) history: Vec<AppliedMove>,
}

impl GameState {
    /// Create a new game with the initial position, White to move
    pub fn new() -> Self {
        Self {
            board: Board::starting_position(),
            turn: Color::White,
            status: GameStatus::Playing,
            history: Vec::new(),
        }
    }

    /// Start from an arbitrary position; the status is derived from it
    pub fn from_fen(fen: &str) -> ChessEngineResult<Self> {
        let (board, turn) = Board::from_fen(fen)?;
        Ok(Self {
            board,
            turn,
            status: position_status(&board, turn),
            history: Vec::new(),
        })
    }

    /// Reset the game to the starting position
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn history(&self) -> &[AppliedMove] {
        &self.history
    }

    pub fn fen(&self) -> String {
        self.board.to_fen(self.turn)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
