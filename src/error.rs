use serde::{Deserialize, Serialize};

use crate::moves::Square;
use crate::piece::PieceKind;

/// Why a move request was refused. Returned inside
/// [`MoveOutcome::Rejected`](crate::game::MoveOutcome::Rejected); rule
/// violations are ordinary values, never panics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum MoveError {
    #[error("the game is already over")]
    GameOver,

    #[error("a pawn on {0:?} is waiting to be promoted")]
    PromotionPending(Square),

    #[error("no piece on {0:?}")]
    NoPiece(Square),

    #[error("the piece on {0:?} does not belong to the side to move")]
    WrongTurn(Square),

    #[error("{from:?} -> {to:?} is not a legal move")]
    IllegalDestination { from: Square, to: Square },

    #[error("unreadable move text")]
    InvalidNotation,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PromotionError {
    #[error("no promotion is pending on {0:?}")]
    NoPromotionPending(Square),

    #[error("the piece on {0:?} is not a pawn")]
    NotAPawn(Square),

    #[error("cannot promote to {0}")]
    InvalidKind(PieceKind),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid time control: {0}")]
    Json(#[from] serde_json::Error),

    #[error("base time must be greater than zero")]
    ZeroBaseTime,

    #[error("unknown time control preset: {0}")]
    UnknownPreset(String),
}
