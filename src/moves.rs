use serde::{Deserialize, Serialize};

use crate::piece::PieceKind;

/// A board coordinate as (row, col). Row 0 is rank 1, col 0 is file a.
pub type Square = (usize, usize);

/// Algebraic name of a square, e.g. `(3, 4)` is "e4".
pub fn square_name(sq: Square) -> String {
    format!("{}{}", file_char(sq.1), rank_char(sq.0))
}

pub fn file_char(col: usize) -> char {
    (b'a' + col as u8) as char
}

pub fn rank_char(row: usize) -> char {
    (b'1' + row as u8) as char
}

/// Parse an algebraic square name such as "e4".
pub fn parse_square(s: &str) -> Option<Square> {
    let bytes = s.as_bytes();
    if bytes.len() != 2 {
        return None;
    }
    let col = bytes[0].checked_sub(b'a')? as usize;
    let row = bytes[1].checked_sub(b'1')? as usize;
    if row < 8 && col < 8 {
        Some((row, col))
    } else {
        None
    }
}

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            promotion: None,
        }
    }

    /// Convert to UCI notation, e.g. "e2e4", "a7a8q"
    pub fn to_uci(&self) -> String {
        let promo = match self.promotion {
            Some(PieceKind::Queen) => "q",
            Some(PieceKind::Rook) => "r",
            Some(PieceKind::Bishop) => "b",
            Some(PieceKind::Knight) => "n",
            _ => "",
        };
        format!("{}{}{promo}", square_name(self.from), square_name(self.to))
    }

    /// Parse from UCI notation
    pub fn from_uci(s: &str) -> Option<Move> {
        if !s.is_ascii() || !(4..=5).contains(&s.len()) {
            return None;
        }
        let from = parse_square(&s[0..2])?;
        let to = parse_square(&s[2..4])?;
        let promotion = match s.as_bytes().get(4) {
            None => None,
            Some(b'q') => Some(PieceKind::Queen),
            Some(b'r') => Some(PieceKind::Rook),
            Some(b'b') => Some(PieceKind::Bishop),
            Some(b'n') => Some(PieceKind::Knight),
            Some(_) => return None,
        };
        Some(Move {
            from,
            to,
            promotion,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_names_follow_rank_and_file() {
        assert_eq!(square_name((0, 0)), "a1");
        assert_eq!(square_name((3, 4)), "e4");
        assert_eq!(square_name((7, 7)), "h8");
        assert_eq!(parse_square("e4"), Some((3, 4)));
        assert_eq!(parse_square("i1"), None);
        assert_eq!(parse_square("a9"), None);
        assert_eq!(parse_square("e"), None);
    }

    #[test]
    fn uci_with_promotion() {
        let m = Move::from_uci("e7e8q").unwrap();
        assert_eq!(m.from, (6, 4));
        assert_eq!(m.to, (7, 4));
        assert_eq!(m.promotion, Some(PieceKind::Queen));
        assert_eq!(m.to_uci(), "e7e8q");
    }

    #[test]
    fn malformed_uci_is_rejected() {
        assert!(Move::from_uci("e2").is_none());
        assert!(Move::from_uci("e2e9").is_none());
        assert!(Move::from_uci("e7e8k").is_none());
        assert!(Move::from_uci("é2e4").is_none());
    }
}
