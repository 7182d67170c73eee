//! Piece-square tables
//!
//! Centipawn bonuses per square, indexed a1 = 0 from White's point of view.
//! Black pieces read the vertically mirrored square.

use crate::types::{Color, PieceKind, Square};
use crate::utils::mirror;

pub(crate) const PAWN_PST: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
     5, 10, 10,-20,-20, 10, 10,  5,
     5, -5,-10,  0,  0,-10, -5,  5,
     0,  0,  0, 20, 20,  0,  0,  0,
     5,  5, 10, 25, 25, 10,  5,  5,
    10, 10, 20, 30, 30, 20, 10, 10,
    50, 50, 50, 50, 50, 50, 50, 50,
     0,  0,  0,  0,  0,  0,  0,  0,
];

pub(crate) const KNIGHT_PST: [i32; 64] = [
   -50,-40,-30,-30,-30,-30,-40,-50,
   -40,-20,  0,  5,  5,  0,-20,-40,
   -30,  5, 10, 15, 15, 10,  5,-30,
   -30,  0, 15, 20, 20, 15,  0,-30,
   -30,  5, 15, 20, 20, 15,  5,-30,
   -30,  0, 10, 15, 15, 10,  0,-30,
   -40,-20,  0,  0,  0,  0,-20,-40,
   -50,-40,-30,-30,-30,-30,-40,-50,
];

pub(crate) const BISHOP_PST: [i32; 64] = [
   -20,-10,-10,-10,-10,-10,-10,-20,
   -10,  5,  0,  0,  0,  0,  5,-10,
   -10, 10, 10, 10, 10, 10, 10,-10,
   -10,  0, 10, 10, 10, 10,  0,-10,
   -10,  5,  5, 10, 10,  5,  5,-10,
   -10,  0,  5, 10, 10,  5,  0,-10,
   -10,  0,  0,  0,  0,  0,  0,-10,
   -20,-10,-10,-10,-10,-10,-10,-20,
];

pub(crate) const ROOK_PST: [i32; 64] = [
     0,  0,  0,  5,  5,  0,  0,  0,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
     5, 10, 10, 10, 10, 10, 10,  5,
     0,  0,  0,  0,  0,  0,  0,  0,
];

pub(crate) const QUEEN_PST: [i32; 64] = [
   -20,-10,-10, -5, -5,-10,-10,-20,
   -10,  0,  0,  0,  0,  0,  0,-10,
   -10,  5,  5,  5,  5,  5,  0,-10,
     0,  0,  5,  5,  5,  5,  0, -5,
    -5,  0,  5,  5,  5,  5,  0, -5,
   -10,  0,  5,  5,  5,  5,  0,-10,
   -10,  0,  0,  0,  0,  0,  0,-10,
   -20,-10,-10, -5, -5,-10,-10,-20,
];

pub(crate) const KING_PST: [i32; 64] = [
    20, 30, 10,  0,  0, 10, 30, 20,
    20, 20,  0,  0,  0,  0, 20, 20,
   -10,-20,-20,-20,-20,-20,-20,-10,
   -20,-30,-30,-40,-40,-30,-30,-20,
   -30,-40,-40,-50,-50,-40,-40,-30,
   -30,-40,-40,-50,-50,-40,-40,-30,
   -30,-40,-40,-50,-50,-40,-40,-30,
   -30,-40,-40,-50,-50,-40,-40,-30,
];

/// Positional value of `kind` on `square`, from the owner's point of view
pub fn pst_value(kind: PieceKind, square: Square, color: Color) -> i32 {
    let index = match color {
        Color::White => square,
        Color::Black => mirror(square),
    } as usize;

    match kind {
        PieceKind::Pawn => PAWN_PST[index],
        PieceKind::Knight => KNIGHT_PST[index],
        PieceKind::Bishop => BISHOP_PST[index],
        PieceKind::Rook => ROOK_PST[index],
        PieceKind::Queen => QUEEN_PST[index],
        PieceKind::King => KING_PST[index],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black_reads_mirrored_square() {
        // e2 for White and e7 for Black are the same relative square
        assert_eq!(
            pst_value(PieceKind::Pawn, 12, Color::White),
            pst_value(PieceKind::Pawn, 52, Color::Black)
        );
        assert_eq!(pst_value(PieceKind::Pawn, 12, Color::White), -20);
    }

    #[test]
    fn test_knights_prefer_the_center() {
        assert!(
            pst_value(PieceKind::Knight, 27, Color::White)
                > pst_value(PieceKind::Knight, 0, Color::White)
        );
    }
}
