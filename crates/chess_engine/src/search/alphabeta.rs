//! Minimax with alpha-beta pruning
//!
//! White is the maximizing side, Black the minimizing side; scores are always
//! signed from White's point of view, matching the static evaluator.
//!
//! Leaves (depth 0) return the static evaluation. An interior node whose side
//! to move has no legal moves returns a mate score against that side, or
//! exactly 0 for stalemate. Mate scores shrink by one per ply from the root so
//! a quicker mate is always preferred and a slower one always resisted longer.

use tracing::debug;

use super::ordering::order_moves;
use crate::board::Board;
use crate::constants::*;
use crate::evaluation::evaluate_position;
use crate::move_gen::{is_in_check, legal_moves};
use crate::types::*;

/// Outcome of a root search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// `None` when the side to move has no legal move
    pub best_move: Option<Move>,
    pub score: i32,
    pub depth: u8,
    pub nodes: u64,
    pub cutoffs: u64,
}

#[derive(Default)]
struct SearchStats {
    nodes: u64,
    cutoffs: u64,
}

/// Choose a move for `color` searching `depth` plies (at least 1)
///
/// Ties keep the earliest move in ordered generation order, so the result is
/// deterministic for a given board.
pub fn search_best_move(board: &Board, color: Color, depth: u8) -> SearchResult {
    let depth = depth.max(1);
    let mut stats = SearchStats::default();
    let maximizing = color == Color::White;

    let mut moves = legal_moves(board, color);
    if moves.is_empty() {
        let score = terminal_score(board, color, 0);
        return SearchResult {
            best_move: None,
            score,
            depth,
            nodes: 1,
            cutoffs: 0,
        };
    }
    order_moves(board, &mut moves);

    let mut alpha = -AB_INF;
    let mut beta = AB_INF;
    let mut best: Option<(Move, i32)> = None;

    for mv in moves {
        let child = board.apply(&mv);
        let score = minimax(&child, depth - 1, alpha, beta, color.opposite(), 1, &mut stats);

        let improves = match best {
            None => true,
            Some((_, best_score)) if maximizing => score > best_score,
            Some((_, best_score)) => score < best_score,
        };
        if improves {
            best = Some((mv, score));
        }
        if maximizing {
            alpha = alpha.max(score);
        } else {
            beta = beta.min(score);
        }
    }

    let (best_move, score) = match best {
        Some((mv, score)) => (Some(mv), score),
        None => (None, 0),
    };
    debug!(
        "[AI] depth {} best {:?} score {} nodes {} cutoffs {}",
        depth,
        best_move.map(|m| m.to_string()),
        score,
        stats.nodes,
        stats.cutoffs
    );

    SearchResult {
        best_move,
        score,
        depth,
        nodes: stats.nodes,
        cutoffs: stats.cutoffs,
    }
}

fn minimax(
    board: &Board,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    to_move: Color,
    ply: u32,
    stats: &mut SearchStats,
) -> i32 {
    stats.nodes += 1;

    if depth == 0 {
        return evaluate_position(board);
    }

    let mut moves = legal_moves(board, to_move);
    if moves.is_empty() {
        return terminal_score(board, to_move, ply);
    }
    order_moves(board, &mut moves);

    if to_move == Color::White {
        let mut best = -AB_INF;
        for mv in moves {
            let score = minimax(&board.apply(&mv), depth - 1, alpha, beta, Color::Black, ply + 1, stats);
            best = best.max(score);
            alpha = alpha.max(best);
            if beta <= alpha {
                stats.cutoffs += 1;
                break;
            }
        }
        best
    } else {
        let mut best = AB_INF;
        for mv in moves {
            let score = minimax(&board.apply(&mv), depth - 1, alpha, beta, Color::White, ply + 1, stats);
            best = best.min(score);
            beta = beta.min(best);
            if beta <= alpha {
                stats.cutoffs += 1;
                break;
            }
        }
        best
    }
}

/// Score of a position where `to_move` has no legal moves
fn terminal_score(board: &Board, to_move: Color, ply: u32) -> i32 {
    if !is_in_check(board, to_move) {
        return 0;
    }
    let mated = MATE_SCORE - ply as i32;
    match to_move {
        Color::White => -mated,
        Color::Black => mated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(fen: &str) -> (Board, Color) {
        Board::from_fen(fen).unwrap()
    }

    #[test]
    fn test_depth_one_takes_hanging_queen() {
        // White rook a1 can take an undefended queen on a8
        let (b, turn) = board("q3k3/8/8/8/8/8/8/R3K3 w - - 0 1");
        let result = search_best_move(&b, turn, 1);
        assert_eq!(result.best_move, Some(Move::new(0, 56)));
    }

    #[test]
    fn test_black_minimizes() {
        // Black rook h8 can take an undefended white queen on h1
        let (b, turn) = board("4k2r/8/8/8/8/8/8/4K2Q b - - 0 1");
        let result = search_best_move(&b, turn, 1);
        assert_eq!(result.best_move, Some(Move::new(63, 7)));
        assert!(result.score < 0);
    }

    #[test]
    fn test_finds_mate_in_one() {
        // Back-rank mate: Ra1-a8#
        let (b, turn) = board("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1");
        let result = search_best_move(&b, turn, 2);
        assert_eq!(result.best_move, Some(Move::new(0, 56)));
        assert!(result.score > MATE_SCORE / 2);
    }

    #[test]
    fn test_no_move_when_checkmated() {
        let (b, turn) = board("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1");
        let result = search_best_move(&b, turn, 3);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, MATE_SCORE);
    }

    #[test]
    fn test_stalemate_scores_zero() {
        let (b, turn) = board("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
        let result = search_best_move(&b, turn, 2);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_pruning_happens_at_depth_three() {
        let b = Board::starting_position();
        let result = search_best_move(&b, Color::White, 3);
        assert!(result.best_move.is_some());
        assert!(result.cutoffs > 0);
    }
}
