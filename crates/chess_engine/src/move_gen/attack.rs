//! Attack detection and square checking
//!
//! Provides functions to check if squares are under attack and if kings are in
//! check. This module is critical for move legality validation and check
//! detection.
//!
//! ## Algorithm
//!
//! Instead of generating every enemy move, we look outward from the target
//! square and ask which piece could reach it:
//!
//! 1. **Knights** on any of the 8 L-shaped squares
//! 2. **Pawns** on the two diagonal squares behind the target (from the
//!    attacker's point of view)
//! 3. **King** on any adjacent square
//! 4. **Sliders**: the first occupied square along each of the 8 rays; a rook
//!    or queen on an orthogonal ray, a bishop or queen on a diagonal one

use crate::board::Board;
use crate::constants::*;
use crate::types::*;
use crate::utils::offset;

/// Check if `square` is attacked by any piece of `by_color`
///
/// # Examples
///
/// ```
/// use chess_engine::board::Board;
/// use chess_engine::move_gen::is_square_attacked;
/// use chess_engine::types::Color;
///
/// let board = Board::starting_position();
/// // f3 (21) is covered by the g1 knight and the e2/g2 pawns
/// assert!(is_square_attacked(&board, 21, Color::White));
/// assert!(!is_square_attacked(&board, 28, Color::White));
/// ```
pub fn is_square_attacked(board: &Board, square: Square, by_color: Color) -> bool {
    let holds = |target: Option<Square>, kinds: &[PieceKind]| {
        target
            .and_then(|sq| board.piece_at(sq))
            .is_some_and(|p| p.color == by_color && kinds.contains(&p.kind))
    };

    if KNIGHT_OFFSETS
        .iter()
        .any(|&(df, dr)| holds(offset(square, df, dr), &[PieceKind::Knight]))
    {
        return true;
    }

    // A pawn of `by_color` attacks forward, so it sits one rank behind the target
    let behind = -by_color.forward();
    if [-1, 1]
        .iter()
        .any(|&df| holds(offset(square, df, behind), &[PieceKind::Pawn]))
    {
        return true;
    }

    if KING_OFFSETS
        .iter()
        .any(|&(df, dr)| holds(offset(square, df, dr), &[PieceKind::King]))
    {
        return true;
    }

    ray_hits(board, square, by_color, &ROOK_DIRS, &[PieceKind::Rook, PieceKind::Queen])
        || ray_hits(board, square, by_color, &BISHOP_DIRS, &[PieceKind::Bishop, PieceKind::Queen])
}

/// First piece along each ray from `square`, tested against `kinds`
fn ray_hits(
    board: &Board,
    square: Square,
    by_color: Color,
    dirs: &[(i8, i8)],
    kinds: &[PieceKind],
) -> bool {
    for &(df, dr) in dirs {
        let mut current = square;
        while let Some(next) = offset(current, df, dr) {
            if let Some(piece) = board.piece_at(next) {
                if piece.color == by_color && kinds.contains(&piece.kind) {
                    return true;
                }
                break;
            }
            current = next;
        }
    }
    false
}

/// Whether `color`'s king is attacked
///
/// A board without that king reports `false`; the game state machine treats a
/// missing king as an error before it gets here.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    board
        .king_square(color)
        .is_some_and(|king| is_square_attacked(board, king, color.opposite()))
}
