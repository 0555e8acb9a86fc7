//! Legality rules as free functions over a board and a color.
//!
//! Nothing here depends on a [`Game`](crate::game::Game): check detection,
//! castling eligibility and the legal-move filter only need the board.

use crate::board::Board;
use crate::moves::{Move, Square};
use crate::piece::{Color, Piece, PieceKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    /// Column of the corner rook.
    pub fn rook_from(self) -> usize {
        match self {
            CastleSide::KingSide => 7,
            CastleSide::QueenSide => 0,
        }
    }

    /// Column the rook lands on.
    pub fn rook_to(self) -> usize {
        match self {
            CastleSide::KingSide => 5,
            CastleSide::QueenSide => 3,
        }
    }
}

const KING_HOME_COL: usize = 4;

/// If `from -> to` is a king's two-square castle marker, which side it is.
pub fn castle_side(piece: &Piece, to: Square) -> Option<CastleSide> {
    if piece.kind != PieceKind::King || piece.position.0 != to.0 {
        return None;
    }
    match to.1 as i32 - piece.position.1 as i32 {
        2 => Some(CastleSide::KingSide),
        -2 => Some(CastleSide::QueenSide),
        _ => None,
    }
}

/// Whether the en-passant target makes `piece -> to` an en-passant capture.
pub fn is_en_passant(board: &Board, piece: &Piece, to: Square) -> bool {
    piece.kind == PieceKind::Pawn
        && board.en_passant_target == Some(to)
        && piece.position.1 != to.1
        && board.get(to).is_none()
}

/// Castling eligibility for `king` on `side`.
pub fn can_castle(board: &Board, king: &Piece, side: CastleSide) -> bool {
    let (row, col) = king.position;
    let enemy = king.color.opposite();
    if king.kind != PieceKind::King
        || king.has_moved
        || row != king.color.back_rank()
        || col != KING_HOME_COL
    {
        return false;
    }
    if board.is_attacked(king.position, enemy) {
        return false;
    }

    let rook_col = side.rook_from();
    let rook_ok = board.get((row, rook_col)).map_or(false, |p| {
        p.kind == PieceKind::Rook && p.color == king.color && !p.has_moved
    });
    if !rook_ok {
        return false;
    }

    let (lo, hi) = if rook_col > col { (col + 1, rook_col) } else { (rook_col + 1, col) };
    if (lo..hi).any(|c| board.get((row, c)).is_some()) {
        return false;
    }

    let transit = match side {
        CastleSide::KingSide => [col, col + 1, col + 2],
        CastleSide::QueenSide => [col, col - 1, col - 2],
    };
    !transit.iter().any(|&c| board.is_attacked((row, c), enemy))
}

/// Apply `from -> to` to `board` as a real move would: en-passant removal
/// first, then the relocation, then the castling rook. The en-passant target
/// is reset, or set to the passed-over square after a double step. Returns
/// whatever was captured.
pub fn apply_move(board: &mut Board, from: Square, to: Square) -> Option<Piece> {
    let piece = board.get(from)?;
    let mut captured = None;
    if is_en_passant(board, &piece, to) {
        captured = board.remove((from.0, to.1));
    }
    if let Some(taken) = board.relocate(from, to) {
        captured = Some(taken);
    }
    if let Some(side) = castle_side(&piece, to) {
        board.relocate((from.0, side.rook_from()), (from.0, side.rook_to()));
    }
    let double_step = piece.kind == PieceKind::Pawn && from.0.abs_diff(to.0) == 2;
    board.en_passant_target = double_step.then(|| ((from.0 + to.0) / 2, from.1));
    captured
}

/// A copy of `board` with the move applied.
pub fn simulate(board: &Board, from: Square, to: Square) -> Board {
    let mut scratch = board.clone();
    apply_move(&mut scratch, from, to);
    scratch
}

/// Destinations `piece` may actually move to: potential moves that do not
/// leave its own king attacked. Castle markers go through [`can_castle`].
pub fn legal_moves(board: &Board, piece: &Piece) -> Vec<Square> {
    piece
        .potential_moves(board, false)
        .into_iter()
        .filter(|&to| match castle_side(piece, to) {
            Some(side) => can_castle(board, piece, side),
            None => !simulate(board, piece.position, to).is_in_check(piece.color),
        })
        .collect()
}

/// Every legal move of `color`, with promotions expanded to the four kinds.
pub fn all_legal_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut moves = Vec::new();
    for piece in board.pieces(color) {
        for to in legal_moves(board, &piece) {
            if piece.kind == PieceKind::Pawn && to.0 == color.promotion_rank() {
                for kind in [PieceKind::Queen, PieceKind::Rook, PieceKind::Bishop, PieceKind::Knight] {
                    moves.push(Move {
                        from: piece.position,
                        to,
                        promotion: Some(kind),
                    });
                }
            } else {
                moves.push(Move::new(piece.position, to));
            }
        }
    }
    moves
}

pub fn has_any_legal_move(board: &Board, color: Color) -> bool {
    board
        .pieces(color)
        .any(|piece| !legal_moves(board, &piece).is_empty())
}

/// Draw by material: bare kings, a single minor piece, or two bishops on
/// the same square color (whichever side owns them).
///
/// Known limitation: other dead positions such as K+N vs K+N are not
/// detected.
pub fn has_insufficient_material(board: &Board) -> bool {
    let others: Vec<Piece> = board
        .all_pieces()
        .filter(|p| p.kind != PieceKind::King)
        .collect();
    match others.as_slice() {
        [] => true,
        [only] => only.kind.is_minor(),
        [a, b] if a.kind == PieceKind::Bishop && b.kind == PieceKind::Bishop => {
            square_shade(a.position) == square_shade(b.position)
        }
        _ => false,
    }
}

fn square_shade(sq: Square) -> usize {
    (sq.0 + sq.1) % 2
}
