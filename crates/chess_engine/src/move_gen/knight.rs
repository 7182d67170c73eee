//! Knight move generation
//!
//! Knights jump in an L-shape: 2 squares in one direction, then 1 square
//! perpendicular. They ignore pieces in between and may land on any square
//! not holding a friendly piece.

use crate::board::Board;
use crate::constants::KNIGHT_OFFSETS;
use crate::types::*;
use crate::utils::offset;

pub fn generate_knight_moves(board: &Board, from: Square, color: Color, moves: &mut Vec<Move>) {
    for &(df, dr) in &KNIGHT_OFFSETS {
        let Some(to) = offset(from, df, dr) else {
            continue;
        };
        match board.piece_at(to) {
            Some(piece) if piece.color == color => {}
            _ => moves.push(Move::new(from, to)),
        }
    }
}
