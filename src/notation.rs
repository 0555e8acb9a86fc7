//! Standard algebraic notation (SAN).

use crate::board::Board;
use crate::moves::{file_char, rank_char, square_name, Square};
use crate::piece::{Piece, PieceKind};
use crate::rules::{self, CastleSide};

/// Check status of the opponent after a move, used for the `+`/`#` suffix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckState {
    None,
    Check,
    Mate,
}

impl CheckState {
    pub fn suffix(self) -> &'static str {
        match self {
            CheckState::None => "",
            CheckState::Check => "+",
            CheckState::Mate => "#",
        }
    }
}

/// SAN for `piece` moving to `to`, computed from the board *before* the move.
pub fn san(board: &Board, piece: &Piece, to: Square, is_capture: bool, check: CheckState) -> String {
    if let Some(side) = rules::castle_side(piece, to) {
        let castle = match side {
            CastleSide::KingSide => "O-O",
            CastleSide::QueenSide => "O-O-O",
        };
        return format!("{castle}{}", check.suffix());
    }

    let mut out = String::new();
    if let Some(letter) = piece.kind.letter() {
        out.push(letter);
    }
    if let Some(c) = disambiguation(board, piece, to) {
        out.push(c);
    }
    if is_capture {
        if piece.kind == PieceKind::Pawn {
            out.push(file_char(piece.position.1));
        }
        out.push('x');
    }
    out.push_str(&square_name(to));
    out.push_str(check.suffix());
    out
}

/// Origin file (or rank, when the rivals share the file) if another piece of
/// the same kind and color could also legally land on `to`.
fn disambiguation(board: &Board, piece: &Piece, to: Square) -> Option<char> {
    if matches!(piece.kind, PieceKind::Pawn | PieceKind::King) {
        return None;
    }
    let rival = board
        .pieces(piece.color)
        .filter(|p| p.kind == piece.kind && p.position != piece.position)
        .find(|p| rules::legal_moves(board, p).contains(&to))?;
    if rival.position.1 != piece.position.1 {
        Some(file_char(piece.position.1))
    } else {
        Some(rank_char(piece.position.0))
    }
}

/// Replace a trailing check marker with the mate marker, or append one.
pub fn mark_mate(notation: &mut String) {
    if notation.ends_with('#') {
        return;
    }
    if notation.ends_with('+') {
        notation.pop();
    }
    notation.push('#');
}

/// Drop a trailing `+` or `#`.
pub fn strip_check(notation: &mut String) {
    while notation.ends_with('+') || notation.ends_with('#') {
        notation.pop();
    }
}
