//! # Chess Engine Constants - Evaluation Values & Board Geometry
//!
//! Centralizes piece valuations (in centipawns), movement offsets, the squares
//! that matter for castling, and the search score bounds.
//!
//! ## Centipawn Valuation System
//!
//! - **Pawn**: 100 centipawns (reference unit)
//! - **Knight**: 320 centipawns
//! - **Bishop**: 330 centipawns
//! - **Rook**: 500 centipawns
//! - **Queen**: 900 centipawns
//! - **King**: 20,000 centipawns
//!
//! Both kings are always on the board, so the king value cancels out of every
//! static evaluation. It only matters for move ordering, where it never occurs
//! because a legal position never lets a king be captured.
//!
//! ## Offsets
//!
//! Movement is expressed as `(file_delta, rank_delta)` pairs rather than linear
//! index deltas. Stepping off the board is then a bounds check on each axis and
//! a move can never wrap from the h-file onto the a-file.

use crate::types::Square;

pub const PAWN_VALUE: i32 = 100;
pub const KNIGHT_VALUE: i32 = 320;
pub const BISHOP_VALUE: i32 = 330;
pub const ROOK_VALUE: i32 = 500;
pub const QUEEN_VALUE: i32 = 900;
pub const KING_VALUE: i32 = 20_000;

/// Score of a checkmate at the root. Exceeds any reachable material total.
pub const MATE_SCORE: i32 = 1_000_000;
/// Alpha-beta window bound.
pub const AB_INF: i32 = 10_000_000;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

pub const BISHOP_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];
pub const ROOK_DIRS: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

pub const A1: Square = 0;
pub const C1: Square = 2;
pub const D1: Square = 3;
pub const E1: Square = 4;
pub const F1: Square = 5;
pub const G1: Square = 6;
pub const H1: Square = 7;
pub const A8: Square = 56;
pub const C8: Square = 58;
pub const D8: Square = 59;
pub const E8: Square = 60;
pub const F8: Square = 61;
pub const G8: Square = 62;
pub const H8: Square = 63;

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
