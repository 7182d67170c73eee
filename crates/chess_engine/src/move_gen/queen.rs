//! Queen move generation
//!
//! Queens combine rook and bishop movement.

use super::sliding;
use crate::board::Board;
use crate::constants::{BISHOP_DIRS, ROOK_DIRS};
use crate::types::*;

pub fn generate_queen_moves(board: &Board, from: Square, color: Color, moves: &mut Vec<Move>) {
    sliding::generate_sliding_moves(board, from, color, &ROOK_DIRS, moves);
    sliding::generate_sliding_moves(board, from, color, &BISHOP_DIRS, moves);
}
