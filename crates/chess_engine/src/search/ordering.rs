//! Move ordering for alpha-beta pruning
//!
//! Captures are tried first, most valuable victim first, which tightens the
//! alpha-beta window early. The sort is stable, so moves of equal value keep
//! generator order and the search stays deterministic.

use std::cmp::Reverse;

use crate::board::Board;
use crate::constants::PAWN_VALUE;
use crate::types::*;

/// Value of the piece a move captures, 0 for quiet moves
pub(crate) fn capture_value(board: &Board, mv: &Move) -> i32 {
    if mv.en_passant {
        return PAWN_VALUE;
    }
    board.piece_at(mv.to).map_or(0, |p| p.kind.value())
}

/// Order moves by captured piece value, descending
pub fn order_moves(board: &Board, moves: &mut [Move]) {
    moves.sort_by_key(|mv| Reverse(capture_value(board, mv)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_moves_prioritizes_captures() {
        // White pawn e4 can take a queen on d5 or push to e5
        let (board, _) = Board::from_fen("4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1").unwrap();
        let mut moves = vec![Move::new(28, 36), Move::new(28, 35)];

        order_moves(&board, &mut moves);

        assert_eq!(moves[0].to, 35, "Capture should be ordered first");
    }

    #[test]
    fn test_order_moves_most_valuable_victim_first() {
        let (board, _) = Board::from_fen("4k3/8/8/2r1n3/3P4/8/8/4K3 w - - 0 1").unwrap();
        let mut moves = vec![Move::new(27, 36), Move::new(27, 34)];

        order_moves(&board, &mut moves);

        assert_eq!(moves[0].to, 34, "Rook capture should precede knight capture");
    }

    #[test]
    fn test_quiet_moves_keep_generator_order() {
        let board = Board::starting_position();
        let mut moves = crate::move_gen::legal_moves(&board, Color::White);
        let original = moves.clone();

        order_moves(&board, &mut moves);

        assert_eq!(moves, original);
    }
}
