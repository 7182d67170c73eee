//! Move execution and lookup
//!
//! Functions for executing moves and checking move legality.

use tracing::{debug, info};

use crate::error::{ChessEngineError, ChessEngineResult};
use crate::move_gen::{legal_moves, position_status};
use crate::types::*;
use crate::utils::{is_on_board, parse_coordinates};

use super::game::GameState;

/// History record of one applied move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedMove {
    pub mv: Move,
    pub color: Color,
    /// Piece that moved, before any promotion
    pub piece: Piece,
    /// Captured piece and the square it was removed from
    pub captured: Option<(Piece, Square)>,
    /// Status after the move
    pub status: GameStatus,
}

impl GameState {
    /// Apply a move for the side to move
    ///
    /// The move must appear in the current legal move list. On any error the
    /// game is left exactly as it was.
    ///
    /// # Errors
    ///
    /// - [`ChessEngineError::GameOver`] if the game has ended
    /// - [`ChessEngineError::NotYourTurn`] if the piece belongs to the other side
    /// - [`ChessEngineError::IllegalMove`] if the move is not legal here
    pub fn apply_move(&mut self, mv: Move) -> ChessEngineResult<AppliedMove> {
        if self.status.is_terminal() {
            return Err(ChessEngineError::GameOver {
                status: self.status,
            });
        }

        if !is_on_board(mv.from) || !is_on_board(mv.to) {
            return Err(ChessEngineError::IllegalMove { mv });
        }
        let piece = self
            .board
            .piece_at(mv.from)
            .ok_or(ChessEngineError::IllegalMove { mv })?;
        if piece.color != self.turn {
            return Err(ChessEngineError::NotYourTurn { color: piece.color });
        }
        if !legal_moves(&self.board, self.turn).contains(&mv) {
            return Err(ChessEngineError::IllegalMove { mv });
        }

        let captured = self.board.captured_by(&mv);
        let mover = self.turn;

        self.board = self.board.apply(&mv);
        self.turn = mover.opposite();
        self.status = position_status(&self.board, self.turn);

        let record = AppliedMove {
            mv,
            color: mover,
            piece,
            captured,
            status: self.status,
        };
        self.history.push(record);

        debug!("[ENGINE] {} played {} -> {}", mover, mv, self.status);
        if self.status.is_terminal() {
            info!("[ENGINE] Game over after {}: {}", mv, self.status);
        }
        Ok(record)
    }

    /// Apply a move on behalf of `color`
    ///
    /// Used for moves arriving from the AI or the network: a mover that is not
    /// the side to move is rejected even if the piece would match.
    pub fn apply_move_for(&mut self, color: Color, mv: Move) -> ChessEngineResult<AppliedMove> {
        if color != self.turn {
            return Err(ChessEngineError::NotYourTurn { color });
        }
        self.apply_move(mv)
    }

    /// Legal move matching source, destination and promotion
    pub fn find_move(
        &self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> ChessEngineResult<Move> {
        legal_moves(&self.board, self.turn)
            .into_iter()
            .find(|m| m.from == from && m.to == to && m.promotion == promotion)
            .ok_or_else(|| {
                let mut mv = Move::new(from, to);
                mv.promotion = promotion;
                ChessEngineError::IllegalMove { mv }
            })
    }

    /// Resolve coordinate notation (`e2e4`, `e1g1`, `e7e8q`) to a legal move
    pub fn parse_move(&self, text: &str) -> ChessEngineResult<Move> {
        let (from, to, promotion) = parse_coordinates(text)?;
        self.find_move(from, to, promotion)
    }
}
