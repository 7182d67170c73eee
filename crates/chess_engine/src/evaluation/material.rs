//! Material evaluation
//!
//! Evaluates the material balance of a position by counting piece values.

use crate::board::Board;
use crate::types::*;

/// Material balance, positive when White is ahead
pub fn evaluate_material(board: &Board) -> i32 {
    board
        .pieces()
        .map(|(_, piece)| match piece.color {
            Color::White => piece.kind.value(),
            Color::Black => -piece.kind.value(),
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{PAWN_VALUE, QUEEN_VALUE};

    #[test]
    fn test_starting_position_material_balance() {
        let board = Board::starting_position();
        assert_eq!(evaluate_material(&board), 0);
    }

    #[test]
    fn test_white_up_queen() {
        let mut board = Board::starting_position();
        board.set(59, None); // d8

        assert_eq!(evaluate_material(&board), QUEEN_VALUE);
    }

    #[test]
    fn test_black_up_pawn() {
        let mut board = Board::starting_position();
        board.set(12, None); // e2

        assert_eq!(evaluate_material(&board), -PAWN_VALUE);
    }
}
