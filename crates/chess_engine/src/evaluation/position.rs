//! Full position evaluation
//!
//! Sum over all pieces of material value plus piece-square bonus.

use super::pst::pst_value;
use crate::board::Board;
use crate::types::*;

/// Evaluate full position (material + positional), positive for White
pub fn evaluate_position(board: &Board) -> i32 {
    board
        .pieces()
        .map(|(square, piece)| {
            let value = piece.kind.value() + pst_value(piece.kind, square, piece.color);
            match piece.color {
                Color::White => value,
                Color::Black => -value,
            }
        })
        .sum()
}
