//! Legality filter
//!
//! A pseudo-legal move is legal when, after playing it, the mover's king is
//! not attacked. Castling additionally requires that the king is not in check
//! and does not pass through or land on an attacked square.

use super::attack::{is_in_check, is_square_attacked};
use super::generate_pseudo_legal_moves;
use crate::board::Board;
use crate::types::*;

/// Whether a pseudo-legal `mv` by `color` keeps its own king safe
pub fn is_legal(board: &Board, mv: &Move, color: Color) -> bool {
    if mv.castle.is_some() {
        let enemy = color.opposite();
        let (low, high) = if mv.to > mv.from {
            (mv.from, mv.to)
        } else {
            (mv.to, mv.from)
        };
        // King square, transit square and destination
        if (low..=high).any(|square| is_square_attacked(board, square, enemy)) {
            return false;
        }
    }

    !is_in_check(&board.apply(mv), color)
}

/// All legal moves for `color`
pub fn legal_moves(board: &Board, color: Color) -> Vec<Move> {
    generate_pseudo_legal_moves(board, color)
        .into_iter()
        .filter(|mv| is_legal(board, mv, color))
        .collect()
}

pub fn has_any_legal_move(board: &Board, color: Color) -> bool {
    generate_pseudo_legal_moves(board, color)
        .iter()
        .any(|mv| is_legal(board, mv, color))
}

/// Status of the position for the side to move
///
/// Never returns the resignation statuses; those come only from explicit
/// player actions.
pub fn position_status(board: &Board, to_move: Color) -> GameStatus {
    let in_check = is_in_check(board, to_move);
    match (has_any_legal_move(board, to_move), in_check) {
        (true, true) => GameStatus::Check,
        (true, false) => GameStatus::Playing,
        (false, true) => GameStatus::Checkmate,
        (false, false) => GameStatus::Stalemate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup(fen: &str) -> (Board, Color) {
        Board::from_fen(fen).unwrap()
    }

    #[test]
    fn test_pinned_piece_cannot_move_off_line() {
        // White knight e2 pinned by rook e8 against king e1
        let (board, turn) = setup("4r2k/8/8/8/8/8/4N3/4K3 w - - 0 1");
        let moves = legal_moves(&board, turn);
        assert!(moves.iter().all(|m| m.from != 12));
    }

    #[test]
    fn test_king_cannot_castle_out_of_check() {
        let (board, turn) = setup("4r2k/8/8/8/8/8/8/4K2R w K - 0 1");
        assert!(legal_moves(&board, turn).iter().all(|m| m.castle.is_none()));
    }

    #[test]
    fn test_king_cannot_castle_through_attack() {
        // Black rook on f8 covers f1
        let (board, turn) = setup("5r1k/8/8/8/8/8/8/4K2R w K - 0 1");
        assert!(legal_moves(&board, turn).iter().all(|m| m.castle.is_none()));
    }

    #[test]
    fn test_queenside_castle_ignores_attacked_b_file() {
        // b1 attacked by rook b8, king never crosses it
        let (board, turn) = setup("1r5k/8/8/8/8/8/8/R3K3 w Q - 0 1");
        let moves = legal_moves(&board, turn);
        assert!(moves.contains(&Move::castle(Color::White, CastleSide::Queenside)));
    }

    #[test]
    fn test_position_status_variants() {
        let (board, turn) = setup(crate::constants::START_FEN);
        assert_eq!(position_status(&board, turn), GameStatus::Playing);

        let (board, turn) = setup("4k3/8/8/8/8/8/8/4K2r w - - 0 1");
        assert_eq!(position_status(&board, turn), GameStatus::Check);

        let (board, turn) = setup("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
        assert_eq!(position_status(&board, turn), GameStatus::Stalemate);
    }
}
