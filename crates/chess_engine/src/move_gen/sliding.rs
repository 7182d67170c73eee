//! Sliding piece move generation
//!
//! Common ray casting for bishops, rooks and queens. Each ray is walked one
//! square at a time until the board edge or the first occupied square; an enemy
//! piece on that square is included as a capture, a friendly one is not.

use crate::board::Board;
use crate::types::*;
use crate::utils::offset;

/// Cast rays from `from` in each of `dirs`, appending moves
pub fn generate_sliding_moves(
    board: &Board,
    from: Square,
    color: Color,
    dirs: &[(i8, i8)],
    moves: &mut Vec<Move>,
) {
    for &(df, dr) in dirs {
        let mut current = from;
        while let Some(to) = offset(current, df, dr) {
            match board.piece_at(to) {
                None => moves.push(Move::new(from, to)),
                Some(piece) => {
                    if piece.color != color {
                        moves.push(Move::new(from, to));
                    }
                    break;
                }
            }
            current = to;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::ROOK_DIRS;

    #[test]
    fn test_rook_on_empty_board_reaches_fourteen_squares() {
        let (board, _) = Board::from_fen("k7/8/8/8/3R4/8/8/7K w - - 0 1").unwrap();
        let mut moves = Vec::new();
        generate_sliding_moves(&board, 27, Color::White, &ROOK_DIRS, &mut moves);
        assert_eq!(moves.len(), 14);
    }

    #[test]
    fn test_ray_stops_at_first_piece() {
        // Rook a1, own pawn a3, enemy knight c1
        let (board, _) = Board::from_fen("k7/8/8/8/8/P7/8/R1n4K w - - 0 1").unwrap();
        let mut moves = Vec::new();
        generate_sliding_moves(&board, 0, Color::White, &ROOK_DIRS, &mut moves);
        let targets: Vec<Square> = moves.iter().map(|m| m.to).collect();
        assert_eq!(targets.len(), 3);
        assert!(targets.contains(&8)); // a2
        assert!(targets.contains(&1)); // b1
        assert!(targets.contains(&2)); // c1 capture
    }
}
