//! Pawn move generation
//!
//! Handles pawn-specific move generation:
//! - Single and double forward pushes
//! - Diagonal captures, including en passant
//! - Promotion, enumerated as one move per promotion piece
//!
//! ## Pawn Movement Rules
//!
//! - **Forward push**: one square toward the opponent onto an empty square
//! - **Double push**: from the starting rank, two squares, when both are empty
//! - **Captures**: one square diagonally forward onto an enemy piece
//! - **En passant**: diagonally onto the square a double-pushed enemy pawn skipped
//! - **Promotion**: any move reaching the last rank yields knight, bishop, rook
//!   and queen variants

use crate::board::Board;
use crate::types::*;
use crate::utils::{offset, rank_of};

pub fn generate_pawn_moves(board: &Board, from: Square, color: Color, moves: &mut Vec<Move>) {
    let forward = color.forward();

    if let Some(one) = offset(from, 0, forward) {
        if board.is_empty(one) {
            push_with_promotions(from, one, color, moves);

            if rank_of(from) == color.pawn_start_rank() {
                if let Some(two) = offset(one, 0, forward) {
                    if board.is_empty(two) {
                        moves.push(Move::double_push(from, two));
                    }
                }
            }
        }
    }

    for side in [-1, 1] {
        let Some(to) = offset(from, side, forward) else {
            continue;
        };
        match board.piece_at(to) {
            Some(piece) if piece.color != color => push_with_promotions(from, to, color, moves),
            None if board.en_passant == Some(to) => moves.push(Move::en_passant(from, to)),
            _ => {}
        }
    }
}

fn push_with_promotions(from: Square, to: Square, color: Color, moves: &mut Vec<Move>) {
    if rank_of(to) == color.promotion_rank() {
        for kind in PieceKind::PROMOTIONS {
            moves.push(Move::promoting(from, to, kind));
        }
    } else {
        moves.push(Move::new(from, to));
    }
}
