//! Board model
//!
//! A `Board` is a plain `Copy` value: 64 squares, castling rights and the
//! en-passant target. Applying a move never mutates the receiver; it returns
//! the next board, which keeps search and the game state machine free of
//! make/unmake bookkeeping.

use std::fmt;

use crate::constants::START_FEN;
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::types::*;
use crate::utils::{offset, square_at, square_name};

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Option<Piece>; 64],
    pub castling: CastlingRights,
    pub en_passant: Option<Square>,
}

impl Board {
    pub fn empty() -> Self {
        Self {
            squares: [None; 64],
            castling: CastlingRights::NONE,
            en_passant: None,
        }
    }

    /// Standard initial position
    pub fn starting_position() -> Self {
        let mut board = Self::empty();
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (file, kind) in back.into_iter().enumerate() {
            let file = file as u8;
            board.set(square_at(file, 0), Some(Piece::new(kind, Color::White)));
            board.set(square_at(file, 1), Some(Piece::new(PieceKind::Pawn, Color::White)));
            board.set(square_at(file, 6), Some(Piece::new(PieceKind::Pawn, Color::Black)));
            board.set(square_at(file, 7), Some(Piece::new(kind, Color::Black)));
        }
        board.castling = CastlingRights::ALL;
        board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square as usize]
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.squares[square as usize].is_none()
    }

    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square as usize] = piece;
    }

    /// Occupied squares with their pieces, a1 first
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter_map(|(square, piece)| piece.map(|p| (square as Square, p)))
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, p)| p.kind == PieceKind::King && p.color == color)
            .map(|(square, _)| square)
    }

    /// Square of the pawn removed by an en-passant capture landing on `to`
    pub fn en_passant_victim(to: Square, mover: Color) -> Option<Square> {
        offset(to, 0, -mover.forward())
    }

    /// Piece taken by `mv` and the square it stood on
    pub fn captured_by(&self, mv: &Move) -> Option<(Piece, Square)> {
        if mv.en_passant {
            let mover = self.piece_at(mv.from)?.color;
            let victim = Self::en_passant_victim(mv.to, mover)?;
            return self.piece_at(victim).map(|p| (p, victim));
        }
        if mv.castle.is_some() {
            return None;
        }
        self.piece_at(mv.to).map(|p| (p, mv.to))
    }

    /// Board after `mv`, without any legality check
    ///
    /// Moves the piece (promoting if requested), removes an en-passant victim,
    /// relocates the castling rook, clears every castling right whose home
    /// square the move touched and sets the en-passant target only after a
    /// double push.
    pub fn apply(&self, mv: &Move) -> Board {
        let mut next = *self;
        let Some(piece) = self.piece_at(mv.from) else {
            debug_assert!(false, "apply called with empty source square {}", mv.from);
            return next;
        };

        next.set(mv.from, None);
        if mv.en_passant {
            if let Some(victim) = Self::en_passant_victim(mv.to, piece.color) {
                next.set(victim, None);
            }
        }
        let placed = match mv.promotion {
            Some(kind) => Piece::new(kind, piece.color),
            None => piece,
        };
        next.set(mv.to, Some(placed));

        if let Some(side) = mv.castle {
            let (rook_from, rook_to) = side.rook_squares(piece.color);
            let rook = next.piece_at(rook_from);
            next.set(rook_from, None);
            next.set(rook_to, rook);
        }

        next.castling.revoke_square(mv.from);
        next.castling.revoke_square(mv.to);

        next.en_passant = if mv.double_push {
            offset(mv.from, 0, piece.color.forward())
        } else {
            None
        };
        next
    }

    /// Parse a FEN string into a board and the side to move
    ///
    /// Halfmove and fullmove counters are accepted but ignored.
    pub fn from_fen(fen: &str) -> ChessEngineResult<(Board, Color)> {
        let invalid = |message: &str| ChessEngineError::InvalidFen {
            message: message.to_string(),
        };
        let mut fields = fen.split_whitespace();
        let placement = fields.next().ok_or_else(|| invalid("empty string"))?;

        let mut board = Board::empty();
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(invalid("expected 8 ranks"));
        }
        for (i, row) in ranks.iter().enumerate() {
            let rank = 7 - i as u8;
            let mut file = 0u8;
            for c in row.chars() {
                if let Some(skip) = c.to_digit(10) {
                    if file as u32 + skip > 8 {
                        return Err(invalid("rank overflow"));
                    }
                    file += skip as u8;
                } else {
                    let piece = Piece::from_char(c).ok_or_else(|| invalid("unknown piece"))?;
                    if file > 7 {
                        return Err(invalid("rank overflow"));
                    }
                    board.set(square_at(file, rank), Some(piece));
                    file += 1;
                }
            }
            if file != 8 {
                return Err(invalid("rank does not cover 8 files"));
            }
        }

        let turn = match fields.next() {
            Some("w") | None => Color::White,
            Some("b") => Color::Black,
            Some(_) => return Err(invalid("side to move")),
        };

        board.castling = CastlingRights::NONE;
        if let Some(rights) = fields.next() {
            for c in rights.chars() {
                match c {
                    'K' => board.castling.white_kingside = true,
                    'Q' => board.castling.white_queenside = true,
                    'k' => board.castling.black_kingside = true,
                    'q' => board.castling.black_queenside = true,
                    '-' => {}
                    _ => return Err(invalid("castling rights")),
                }
            }
        }

        board.en_passant = match fields.next() {
            None | Some("-") => None,
            Some(text) => Some(crate::utils::parse_square(text).map_err(|_| invalid("en passant"))?),
        };

        for color in [Color::White, Color::Black] {
            if board.king_square(color).is_none() {
                return Err(ChessEngineError::MissingKing { color });
            }
        }
        Ok((board, turn))
    }

    pub fn to_fen(&self, turn: Color) -> String {
        let mut out = String::new();
        for rank in (0..8).rev() {
            let mut gap = 0;
            for file in 0..8 {
                match self.piece_at(square_at(file, rank)) {
                    Some(piece) => {
                        if gap > 0 {
                            out.push_str(&gap.to_string());
                            gap = 0;
                        }
                        out.push(piece.to_char());
                    }
                    None => gap += 1,
                }
            }
            if gap > 0 {
                out.push_str(&gap.to_string());
            }
            if rank > 0 {
                out.push('/');
            }
        }

        out.push(' ');
        out.push(if turn == Color::White { 'w' } else { 'b' });
        out.push(' ');
        let rights = [
            (self.castling.white_kingside, 'K'),
            (self.castling.white_queenside, 'Q'),
            (self.castling.black_kingside, 'k'),
            (self.castling.black_queenside, 'q'),
        ];
        let before = out.len();
        for (set, c) in rights {
            if set {
                out.push(c);
            }
        }
        if out.len() == before {
            out.push('-');
        }
        out.push(' ');
        match self.en_passant {
            Some(square) => out.push_str(&square_name(square)),
            None => out.push('-'),
        }
        out.push_str(" 0 1");
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting_position()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.to_fen(Color::White))
    }
}

/// Plain text diagram, rank 8 at the top
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8u8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8u8 {
                let c = self
                    .piece_at(square_at(file, rank))
                    .map(Piece::to_char)
                    .unwrap_or('.');
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
