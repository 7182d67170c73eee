//! Game state queries, resignation and AI move generation

use tracing::info;

use crate::move_gen::{self, is_in_check};
use crate::search::{search_best_move, SearchResult};
use crate::types::*;

use super::game::GameState;

impl GameState {
    /// Legal moves for the side to move; empty once the game is over
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.status.is_terminal() {
            return Vec::new();
        }
        move_gen::legal_moves(&self.board, self.turn)
    }

    pub fn in_check(&self) -> bool {
        is_in_check(&self.board, self.turn)
    }

    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// The local player gives up. No-op once the game is over.
    pub fn resign(&mut self) {
        if self.status.is_terminal() {
            return;
        }
        info!("[ENGINE] Local player resigned");
        self.status = GameStatus::Resigned;
    }

    /// The remote player gave up. No-op once the game is over.
    pub fn opponent_resigned(&mut self) {
        if self.status.is_terminal() {
            return;
        }
        info!("[ENGINE] Opponent resigned");
        self.status = GameStatus::OpponentResigned;
    }

    /// Side that was checkmated, if any
    pub fn checkmated_side(&self) -> Option<Color> {
        (self.status == GameStatus::Checkmate).then_some(self.turn)
    }

    /// Search a reply for the side to move
    ///
    /// Does not modify the game; the caller applies the returned move.
    pub fn reply(&self, depth: u8) -> SearchResult {
        search_best_move(&self.board, self.turn, depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resign_is_terminal_and_final() {
        let mut game = GameState::new();
        game.resign();
        assert_eq!(game.status(), GameStatus::Resigned);
        assert!(game.legal_moves().is_empty());

        game.opponent_resigned();
        assert_eq!(game.status(), GameStatus::Resigned);
    }

    #[test]
    fn test_resign_after_mate_keeps_checkmate() {
        let mut game = GameState::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").unwrap();
        game.resign();
        assert_eq!(game.status(), GameStatus::Checkmate);
        assert_eq!(game.checkmated_side(), Some(Color::Black));
    }

    #[test]
    fn test_reply_returns_applicable_move() {
        let mut game = GameState::new();
        let result = game.reply(2);
        let mv = result.best_move.unwrap();
        assert!(game.apply_move(mv).is_ok());
    }
}
