//! Square arithmetic and coordinate notation helpers

use crate::error::{ChessEngineError, ChessEngineResult};
use crate::types::{PieceKind, Square};

#[inline]
pub fn file_of(square: Square) -> u8 {
    square % 8
}

#[inline]
pub fn rank_of(square: Square) -> u8 {
    square / 8
}

#[inline]
pub fn square_at(file: u8, rank: u8) -> Square {
    rank * 8 + file
}

/// Whether `square` indexes one of the 64 board squares
#[inline]
pub fn is_on_board(square: Square) -> bool {
    square < 64
}

/// Step from `square` by a file/rank delta, `None` when leaving the board
#[inline]
pub fn offset(square: Square, file_delta: i8, rank_delta: i8) -> Option<Square> {
    let file = file_of(square) as i8 + file_delta;
    let rank = rank_of(square) as i8 + rank_delta;
    if (0..8).contains(&file) && (0..8).contains(&rank) {
        Some(square_at(file as u8, rank as u8))
    } else {
        None
    }
}

/// Vertical mirror, used to read white-oriented tables for black pieces
#[inline]
pub fn mirror(square: Square) -> Square {
    square ^ 56
}

pub fn square_name(square: Square) -> String {
    let file = (b'a' + file_of(square)) as char;
    let rank = (b'1' + rank_of(square)) as char;
    format!("{file}{rank}")
}

pub fn parse_square(text: &str) -> ChessEngineResult<Square> {
    let bytes = text.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessEngineError::InvalidSquare {
            text: text.to_string(),
        });
    }
    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessEngineError::InvalidSquare {
            text: text.to_string(),
        });
    }
    Ok(square_at(file - b'a', rank - b'1'))
}

/// Parse coordinate notation (`e2e4`, `e7e8q`) into its raw parts
///
/// The flags of the full move (castle, en passant, double push) are filled in
/// by matching against the legal move list, see `GameState::parse_move`.
pub fn parse_coordinates(text: &str) -> ChessEngineResult<(Square, Square, Option<PieceKind>)> {
    let text = text.trim();
    let invalid = || ChessEngineError::InvalidNotation {
        text: text.to_string(),
    };

    if !(4..=5).contains(&text.len()) || !text.is_ascii() {
        return Err(invalid());
    }
    let from = parse_square(&text[0..2]).map_err(|_| invalid())?;
    let to = parse_square(&text[2..4]).map_err(|_| invalid())?;
    let promotion = match text[4..].chars().next() {
        None => None,
        Some(c) => match PieceKind::from_char(c) {
            Some(kind) if PieceKind::PROMOTIONS.contains(&kind) => Some(kind),
            _ => return Err(invalid()),
        },
    };
    Ok((from, to, promotion))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_stays_on_board() {
        assert_eq!(offset(0, -1, 0), None);
        assert_eq!(offset(7, 1, 0), None);
        assert_eq!(offset(63, 0, 1), None);
        assert_eq!(offset(0, 1, 2), Some(17));
    }

    #[test]
    fn test_is_on_board() {
        assert!(is_on_board(0));
        assert!(is_on_board(63));
        assert!(!is_on_board(64));
        assert!(!is_on_board(200));
    }

    #[test]
    fn test_square_names_round_trip() {
        assert_eq!(square_name(0), "a1");
        assert_eq!(square_name(63), "h8");
        assert_eq!(parse_square("e4").unwrap(), 28);
        assert!(parse_square("i9").is_err());
    }

    #[test]
    fn test_parse_coordinates_with_promotion() {
        assert_eq!(
            parse_coordinates("a7a8q").unwrap(),
            (48, 56, Some(PieceKind::Queen))
        );
        assert!(parse_coordinates("a7a8k").is_err());
        assert!(parse_coordinates("e2").is_err());
    }
}
