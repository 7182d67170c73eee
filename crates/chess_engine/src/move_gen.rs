//! Pseudo-legal move generation
//!
//! Produces every move consistent with how each piece moves, ignoring whether
//! the mover's own king is left attacked. The legality filter in [`legal`]
//! removes those afterwards.
//!
//! ## Module Organization
//!
//! - `pawn` - Pushes, double pushes, captures, en passant, promotions
//! - `knight` / `king` - Fixed-offset jumpers (king also castles)
//! - `bishop` / `rook` / `queen` - Ray casters built on `sliding`
//! - `attack` - Square attack detection and check detection
//! - `legal` - Legality filter and position status

pub mod attack;
mod bishop;
mod king;
mod knight;
pub mod legal;
mod pawn;
mod queen;
mod rook;
mod sliding;

use crate::board::Board;
use crate::types::*;

pub use attack::{is_in_check, is_square_attacked};
pub use legal::{has_any_legal_move, is_legal, legal_moves, position_status};

/// Generate all pseudo-legal moves for `color`
pub fn generate_pseudo_legal_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut moves = Vec::with_capacity(48);

    for (from, piece) in board.pieces() {
        if piece.color != color {
            continue;
        }
        match piece.kind {
            PieceKind::Pawn => pawn::generate_pawn_moves(board, from, color, &mut moves),
            PieceKind::Knight => knight::generate_knight_moves(board, from, color, &mut moves),
            PieceKind::Bishop => bishop::generate_bishop_moves(board, from, color, &mut moves),
            PieceKind::Rook => rook::generate_rook_moves(board, from, color, &mut moves),
            PieceKind::Queen => queen::generate_queen_moves(board, from, color, &mut moves),
            PieceKind::King => king::generate_king_moves(board, from, color, &mut moves),
        }
    }

    moves
}
