pub mod board;
pub mod clock;
pub mod error;
pub mod game;
pub mod moves;
pub mod notation;
pub mod piece;
pub mod rules;
mod zobrist;

pub use board::Board;
pub use clock::TimeControl;
pub use error::{ConfigError, MoveError, PromotionError};
pub use game::{Game, GameResult, MoveOutcome};
pub use moves::{Move, Square};
pub use piece::{Color, Piece, PieceKind};

#[cfg(target_arch = "wasm32")]
mod wasm_api;
