use serde::{Deserialize, Serialize};

use crate::moves::Square;
use crate::piece::{
    offset_square, Color, Piece, PieceKind, BISHOP_DIRECTIONS, KING_OFFSETS, KNIGHT_OFFSETS,
    ROOK_DIRECTIONS,
};
use crate::zobrist::ZOBRIST;

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Board {
    pub squares: [[Option<Piece>; 8]; 8],
    /// The square passed over by the last double pawn step, if any.
    pub en_passant_target: Option<Square>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board with no pieces. Useful for setting up test positions.
    pub fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
            en_passant_target: None,
        }
    }

    pub fn new() -> Self {
        let mut board = Board::empty();

        // White pieces (rows 0-1), black pieces (rows 6-7)
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            board.place(kind, Color::White, (0, col));
            board.place(PieceKind::Pawn, Color::White, (1, col));
            board.place(PieceKind::Pawn, Color::Black, (6, col));
            board.place(kind, Color::Black, (7, col));
        }
        board
    }

    /// Put a fresh, unmoved piece on `sq`, replacing any occupant.
    pub fn place(&mut self, kind: PieceKind, color: Color, sq: Square) {
        self.set(sq, Some(Piece::new(kind, color, sq)));
    }

    /// Overwrite a cell. The stored position of `piece` is synced to `sq`.
    pub fn set(&mut self, sq: Square, piece: Option<Piece>) {
        if let Some(cell) = self.cell_mut(sq) {
            *cell = piece.map(|p| Piece { position: sq, ..p });
        }
    }

    pub fn remove(&mut self, sq: Square) -> Option<Piece> {
        self.cell_mut(sq).and_then(Option::take)
    }

    /// The occupant of `sq`, or `None` for an empty or off-board square.
    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.squares.get(sq.0).and_then(|row| row.get(sq.1)).copied().flatten()
    }

    /// Signed lookup for offset probes that may fall off the board.
    pub fn get_offset(&self, row: i32, col: i32) -> Option<Piece> {
        offset_square(row, col).and_then(|sq| self.get(sq))
    }

    fn cell_mut(&mut self, sq: Square) -> Option<&mut Option<Piece>> {
        self.squares.get_mut(sq.0).and_then(|row| row.get_mut(sq.1))
    }

    /// Raw move: clears `from`, overwrites `to`, marks the piece as moved and
    /// returns whatever stood on `to`. No legality checks.
    pub fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        if from == to || self.cell_mut(to).is_none() {
            return None;
        }
        let mut piece = self.remove(from)?;
        piece.position = to;
        piece.has_moved = true;
        self.cell_mut(to).and_then(|cell| cell.replace(piece))
    }

    /// Iterate over all pieces of one color.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = Piece> + '_ {
        self.squares
            .iter()
            .flatten()
            .filter_map(|cell| *cell)
            .filter(move |p| p.color == color)
    }

    pub fn all_pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.squares.iter().flatten().filter_map(|cell| *cell)
    }

    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces(color)
            .find(|p| p.kind == PieceKind::King)
            .map(|p| p.position)
    }

    /// Whether any piece of `attacker` threatens `sq`. Pure geometry scan; it
    /// never consults move legality.
    pub fn is_attacked(&self, sq: Square, attacker: Color) -> bool {
        let (row, col) = (sq.0 as i32, sq.1 as i32);
        let is = |p: Option<Piece>, kind: PieceKind| {
            p.map_or(false, |p| p.color == attacker && p.kind == kind)
        };

        // A pawn one step behind (from its own perspective) on either diagonal.
        let pawn_row = row - attacker.pawn_direction();
        for dc in [-1, 1] {
            if is(self.get_offset(pawn_row, col + dc), PieceKind::Pawn) {
                return true;
            }
        }

        for (dr, dc) in KNIGHT_OFFSETS {
            if is(self.get_offset(row + dr, col + dc), PieceKind::Knight) {
                return true;
            }
        }

        for (dr, dc) in KING_OFFSETS {
            if is(self.get_offset(row + dr, col + dc), PieceKind::King) {
                return true;
            }
        }

        let ray_families: [([(i32, i32); 4], fn(PieceKind) -> bool); 2] = [
            (ROOK_DIRECTIONS, PieceKind::slides_orthogonally),
            (BISHOP_DIRECTIONS, PieceKind::slides_diagonally),
        ];
        for (directions, slides) in ray_families {
            for (dr, dc) in directions {
                let (mut r, mut c) = (row + dr, col + dc);
                while let Some(target) = offset_square(r, c) {
                    if let Some(p) = self.get(target) {
                        if p.color == attacker && slides(p.kind) {
                            return true;
                        }
                        break;
                    }
                    r += dr;
                    c += dc;
                }
            }
        }

        false
    }

    pub fn is_in_check(&self, color: Color) -> bool {
        self.find_king(color)
            .map_or(false, |king| self.is_attacked(king, color.opposite()))
    }

    /// Structural hash of (layout, side to move, en-passant target). Stable
    /// across runs; `has_moved` flags are not part of it.
    pub fn position_key(&self, side_to_move: Color) -> u64 {
        let zob = &*ZOBRIST;
        let mut key = self
            .all_pieces()
            .fold(0u64, |acc, p| acc ^ zob.piece(p.color, p.kind, p.position));
        key ^= zob.side_to_move(side_to_move);
        key ^= zob.en_passant(self.en_passant_target);
        key
    }
}
