use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::moves::Square;

/// Orthogonal ray directions as (row, col) deltas.
pub const ROOK_DIRECTIONS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Diagonal ray directions as (row, col) deltas.
pub const BISHOP_DIRECTIONS: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (2, 1), (2, -1), (-2, 1), (-2, -1),
    (1, 2), (1, -2), (-1, 2), (-1, -2),
];

pub const KING_OFFSETS: [(i32, i32); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1), (0, 1),
    (1, -1), (1, 0), (1, 1),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Index for per-color arrays: White = 0, Black = 1.
    pub fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// Row delta of a pawn advance.
    pub fn pawn_direction(self) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    pub fn back_rank(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// The rank a pawn of this color promotes on.
    pub fn promotion_rank(self) -> usize {
        self.opposite().back_rank()
    }
}

impl std::ops::Not for Color {
    type Output = Color;

    fn not(self) -> Color {
        self.opposite()
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

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::King,
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Pawn,
    ];

    /// Index for per-kind tables.
    pub fn index(self) -> usize {
        match self {
            PieceKind::King => 0,
            PieceKind::Queen => 1,
            PieceKind::Rook => 2,
            PieceKind::Bishop => 3,
            PieceKind::Knight => 4,
            PieceKind::Pawn => 5,
        }
    }

    /// Material value in pawns. The king carries none.
    pub fn value(self) -> u32 {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Knight => 3,
            PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 9,
            PieceKind::King => 0,
        }
    }

    /// Notation letter; pawns have none.
    pub fn letter(self) -> Option<char> {
        match self {
            PieceKind::King => Some('K'),
            PieceKind::Queen => Some('Q'),
            PieceKind::Rook => Some('R'),
            PieceKind::Bishop => Some('B'),
            PieceKind::Knight => Some('N'),
            PieceKind::Pawn => None,
        }
    }

    pub fn is_minor(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Knight)
    }

    pub fn is_promotion_target(self) -> bool {
        matches!(
            self,
            PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop | PieceKind::Knight
        )
    }

    /// Whether a piece of this kind attacks along orthogonal rays.
    pub fn slides_orthogonally(self) -> bool {
        matches!(self, PieceKind::Rook | PieceKind::Queen)
    }

    /// Whether a piece of this kind attacks along diagonal rays.
    pub fn slides_diagonally(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Queen)
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::King => "King",
            PieceKind::Queen => "Queen",
            PieceKind::Rook => "Rook",
            PieceKind::Bishop => "Bishop",
            PieceKind::Knight => "Knight",
            PieceKind::Pawn => "Pawn",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
    pub position: Square,
    pub has_moved: bool,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color, position: Square) -> Self {
        Piece {
            color,
            kind,
            position,
            has_moved: false,
        }
    }

    pub fn value(&self) -> u32 {
        self.kind.value()
    }

    /// Geometrically reachable squares, ignoring whether the move would leave
    /// our own king in check.
    ///
    /// With `attack_probe` set, only squares this piece threatens are
    /// returned: no castle markers for the king, and for pawns just the two
    /// diagonals (occupied or not).
    pub fn potential_moves(&self, board: &Board, attack_probe: bool) -> Vec<Square> {
        match self.kind {
            PieceKind::King => self.king_moves(board, attack_probe),
            PieceKind::Queen => {
                let mut moves = slide(board, self, &ROOK_DIRECTIONS);
                moves.extend(slide(board, self, &BISHOP_DIRECTIONS));
                moves
            }
            PieceKind::Rook => slide(board, self, &ROOK_DIRECTIONS),
            PieceKind::Bishop => slide(board, self, &BISHOP_DIRECTIONS),
            PieceKind::Knight => step(board, self, &KNIGHT_OFFSETS),
            PieceKind::Pawn => self.pawn_moves(board, attack_probe),
        }
    }

    fn king_moves(&self, board: &Board, attack_probe: bool) -> Vec<Square> {
        let mut moves = step(board, self, &KING_OFFSETS);
        if !attack_probe && !self.has_moved {
            let (row, col) = self.position;
            // Castle markers; eligibility is checked by the rules layer.
            if col + 2 < 8 {
                moves.push((row, col + 2));
            }
            if col >= 2 {
                moves.push((row, col - 2));
            }
        }
        moves
    }

    fn pawn_moves(&self, board: &Board, attack_probe: bool) -> Vec<Square> {
        let (row, col) = (self.position.0 as i32, self.position.1 as i32);
        let dir = self.color.pawn_direction();
        let forward = row + dir;
        let mut moves = Vec::new();

        if attack_probe {
            for dc in [-1, 1] {
                if let Some(sq) = offset_square(forward, col + dc) {
                    moves.push(sq);
                }
            }
            return moves;
        }

        if let Some(one) = offset_square(forward, col) {
            if board.get(one).is_none() {
                moves.push(one);
                if !self.has_moved {
                    if let Some(two) = offset_square(forward + dir, col) {
                        if board.get(two).is_none() {
                            moves.push(two);
                        }
                    }
                }
            }
        }

        for dc in [-1, 1] {
            let Some(target) = offset_square(forward, col + dc) else {
                continue;
            };
            match board.get(target) {
                Some(p) if p.color != self.color => moves.push(target),
                None if board.en_passant_target == Some(target) => moves.push(target),
                _ => {}
            }
        }

        moves
    }
}

/// Converts a signed (row, col) into a square if it lies on the board.
pub(crate) fn offset_square(row: i32, col: i32) -> Option<Square> {
    if (0..8).contains(&row) && (0..8).contains(&col) {
        Some((row as usize, col as usize))
    } else {
        None
    }
}

/// Ray casting shared by queen, rook and bishop.
fn slide(board: &Board, piece: &Piece, directions: &[(i32, i32)]) -> Vec<Square> {
    let mut moves = Vec::new();
    let (row, col) = (piece.position.0 as i32, piece.position.1 as i32);
    for &(dr, dc) in directions {
        let (mut r, mut c) = (row + dr, col + dc);
        while let Some(sq) = offset_square(r, c) {
            match board.get(sq) {
                None => moves.push(sq),
                Some(p) => {
                    if p.color != piece.color {
                        moves.push(sq);
                    }
                    break;
                }
            }
            r += dr;
            c += dc;
        }
    }
    moves
}

/// Single-step movers: knight offsets and king adjacency.
fn step(board: &Board, piece: &Piece, offsets: &[(i32, i32)]) -> Vec<Square> {
    let (row, col) = (piece.position.0 as i32, piece.position.1 as i32);
    offsets
        .iter()
        .filter_map(|&(dr, dc)| offset_square(row + dr, col + dc))
        .filter(|&sq| board.get(sq).map_or(true, |p| p.color != piece.color))
        .collect()
}
