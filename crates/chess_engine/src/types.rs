//! # Chess Engine Core Types
//!
//! Value types shared by every layer of the engine: colors, piece kinds,
//! squares, moves, castling rights and the game status.
//!
//! ## Square Numbering
//!
//! Squares are `u8` indices computed as `rank * 8 + file`, so a1 = 0, h1 = 7,
//! a8 = 56 and h8 = 63. White starts on ranks 0 and 1.
//!
//! ## The `Move` Structure
//!
//! A `Move` is a small `Copy` value carrying everything needed to replay it on
//! another engine instance without consulting that instance's move generator:
//! source and destination, the promotion piece, and the flags for en passant,
//! double pawn pushes and castling. The serde attributes define the wire shape
//! used by the multiplayer protocol:
//!
//! ```json
//! {"from": 12, "to": 28, "double": true}
//! ```
//!
//! Optional keys are omitted when absent or false.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::*;

pub type Square = u8;

/// Side to move / piece owner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank delta of a pawn advance
    pub fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    pub fn back_rank(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    pub fn pawn_start_rank(self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    pub fn promotion_rank(self) -> u8 {
        self.opposite().back_rank()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Promotion targets in enumeration order
    pub const PROMOTIONS: [PieceKind; 4] = [
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
    ];

    /// Material value in centipawns
    pub fn value(self) -> i32 {
        match self {
            PieceKind::Pawn => PAWN_VALUE,
            PieceKind::Knight => KNIGHT_VALUE,
            PieceKind::Bishop => BISHOP_VALUE,
            PieceKind::Rook => ROOK_VALUE,
            PieceKind::Queen => QUEEN_VALUE,
            PieceKind::King => KING_VALUE,
        }
    }

    /// Lowercase letter used by FEN and coordinate notation
    pub fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }

    /// FEN letter: uppercase for White, lowercase for Black
    pub fn to_char(self) -> char {
        let c = self.kind.to_char();
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        let kind = PieceKind::from_char(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Self::new(kind, color))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    /// King destination for the given color
    pub fn king_target(self, color: Color) -> Square {
        match (color, self) {
            (Color::White, CastleSide::Kingside) => G1,
            (Color::White, CastleSide::Queenside) => C1,
            (Color::Black, CastleSide::Kingside) => G8,
            (Color::Black, CastleSide::Queenside) => C8,
        }
    }

    /// Rook (home, destination) squares for the given color
    pub fn rook_squares(self, color: Color) -> (Square, Square) {
        match (color, self) {
            (Color::White, CastleSide::Kingside) => (H1, F1),
            (Color::White, CastleSide::Queenside) => (A1, D1),
            (Color::Black, CastleSide::Kingside) => (H8, F8),
            (Color::Black, CastleSide::Queenside) => (A8, D8),
        }
    }
}

fn is_false(flag: &bool) -> bool {
    !*flag
}

/// A single move as produced by the generator and relayed over the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promotion: Option<PieceKind>,
    #[serde(rename = "ep", default, skip_serializing_if = "is_false")]
    pub en_passant: bool,
    #[serde(rename = "double", default, skip_serializing_if = "is_false")]
    pub double_push: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub castle: Option<CastleSide>,
}

impl Move {
    pub const fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            promotion: None,
            en_passant: false,
            double_push: false,
            castle: None,
        }
    }

    pub const fn promoting(from: Square, to: Square, kind: PieceKind) -> Self {
        let mut mv = Self::new(from, to);
        mv.promotion = Some(kind);
        mv
    }

    pub const fn double_push(from: Square, to: Square) -> Self {
        let mut mv = Self::new(from, to);
        mv.double_push = true;
        mv
    }

    pub const fn en_passant(from: Square, to: Square) -> Self {
        let mut mv = Self::new(from, to);
        mv.en_passant = true;
        mv
    }

    pub fn castle(color: Color, side: CastleSide) -> Self {
        let from = if color == Color::White { E1 } else { E8 };
        let mut mv = Self::new(from, side.king_target(color));
        mv.castle = Some(side);
        mv
    }
}

impl fmt::Display for Move {
    /// Coordinate notation, e.g. `e2e4` or `e7e8q`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            crate::utils::square_name(self.from),
            crate::utils::square_name(self.to)
        )?;
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind.to_char())?;
        }
        Ok(())
    }
}

/// Castling permissions; only ever cleared, never re-granted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastlingRights {
    pub white_kingside: bool,
    pub white_queenside: bool,
    pub black_kingside: bool,
    pub black_queenside: bool,
}

impl CastlingRights {
    pub const ALL: Self = Self {
        white_kingside: true,
        white_queenside: true,
        black_kingside: true,
        black_queenside: true,
    };

    pub const NONE: Self = Self {
        white_kingside: false,
        white_queenside: false,
        black_kingside: false,
        black_queenside: false,
    };

    pub fn has(&self, color: Color, side: CastleSide) -> bool {
        match (color, side) {
            (Color::White, CastleSide::Kingside) => self.white_kingside,
            (Color::White, CastleSide::Queenside) => self.white_queenside,
            (Color::Black, CastleSide::Kingside) => self.black_kingside,
            (Color::Black, CastleSide::Queenside) => self.black_queenside,
        }
    }

    /// Clear every right tied to `square` (a king or rook home square)
    pub fn revoke_square(&mut self, square: Square) {
        match square {
            E1 => {
                self.white_kingside = false;
                self.white_queenside = false;
            }
            H1 => self.white_kingside = false,
            A1 => self.white_queenside = false,
            E8 => {
                self.black_kingside = false;
                self.black_queenside = false;
            }
            H8 => self.black_kingside = false,
            A8 => self.black_queenside = false,
            _ => {}
        }
    }
}

impl Default for CastlingRights {
    fn default() -> Self {
        Self::ALL
    }
}

/// Lifecycle status of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    Playing,
    Check,
    Checkmate,
    Stalemate,
    Resigned,
    OpponentResigned,
}

impl GameStatus {
    /// No further moves can be applied
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Playing | GameStatus::Check)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GameStatus::Playing => "playing",
            GameStatus::Check => "check",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
            GameStatus::Resigned => "resigned",
            GameStatus::OpponentResigned => "opponent resigned",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_wire_shape_omits_defaults() {
        let json = serde_json::to_string(&Move::new(12, 20)).unwrap();
        assert_eq!(json, r#"{"from":12,"to":20}"#);
    }

    #[test]
    fn test_move_wire_shape_with_flags() {
        let json = serde_json::to_string(&Move::castle(Color::White, CastleSide::Kingside)).unwrap();
        assert_eq!(json, r#"{"from":4,"to":6,"castle":"kingside"}"#);

        let json = serde_json::to_string(&Move::promoting(52, 60, PieceKind::Queen)).unwrap();
        assert_eq!(json, r#"{"from":52,"to":60,"promotion":"queen"}"#);

        let parsed: Move = serde_json::from_str(r#"{"from":36,"to":43,"ep":true}"#).unwrap();
        assert_eq!(parsed, Move::en_passant(36, 43));
    }

    #[test]
    fn test_revoking_king_square_clears_both_wings() {
        let mut rights = CastlingRights::ALL;
        rights.revoke_square(E8);
        assert!(!rights.black_kingside);
        assert!(!rights.black_queenside);
        assert!(rights.white_kingside && rights.white_queenside);
    }

    #[test]
    fn test_move_display_uses_coordinate_notation() {
        assert_eq!(Move::double_push(12, 28).to_string(), "e2e4");
        assert_eq!(Move::promoting(52, 60, PieceKind::Knight).to_string(), "e7e8n");
    }
}
