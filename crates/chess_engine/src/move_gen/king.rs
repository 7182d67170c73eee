//! King move generation
//!
//! Kings move one square in any direction. Castling is generated here when
//! the position permits it structurally:
//!
//! - the castling right for that wing is still set
//! - the king stands on its home square and the rook on its home square
//! - every square strictly between king and rook is empty
//!
//! Whether the king passes through or lands on an attacked square is a
//! legality question answered in [`super::legal`].

use crate::board::Board;
use crate::constants::KING_OFFSETS;
use crate::types::*;
use crate::utils::{offset, square_at};

pub fn generate_king_moves(board: &Board, from: Square, color: Color, moves: &mut Vec<Move>) {
    for &(df, dr) in &KING_OFFSETS {
        let Some(to) = offset(from, df, dr) else {
            continue;
        };
        match board.piece_at(to) {
            Some(piece) if piece.color == color => {}
            _ => moves.push(Move::new(from, to)),
        }
    }

    generate_castling_moves(board, from, color, moves);
}

fn generate_castling_moves(board: &Board, from: Square, color: Color, moves: &mut Vec<Move>) {
    let home = square_at(4, color.back_rank());
    if from != home {
        return;
    }

    for side in [CastleSide::Kingside, CastleSide::Queenside] {
        if !board.castling.has(color, side) {
            continue;
        }
        let (rook_home, _) = side.rook_squares(color);
        if board.piece_at(rook_home) != Some(Piece::new(PieceKind::Rook, color)) {
            continue;
        }
        let (low, high) = if rook_home < home {
            (rook_home, home)
        } else {
            (home, rook_home)
        };
        if (low + 1..high).all(|square| board.is_empty(square)) {
            moves.push(Move::castle(color, side));
        }
    }
}
