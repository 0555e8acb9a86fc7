use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::clock::TimeControl;
use crate::game::{Game, MoveOutcome};
use crate::piece::{Color, PieceKind};

#[derive(Serialize)]
struct SquarePiece {
    kind: PieceKind,
    color: Color,
}

#[derive(Serialize)]
struct BoardState {
    squares: Vec<Vec<Option<SquarePiece>>>,
    current_turn: Color,
    game_over: bool,
    result: Option<String>,
    king_in_check: Option<[usize; 2]>,
    pending_promotion: Option<[usize; 2]>,
    captured_by_white: Vec<PieceKind>,
    captured_by_black: Vec<PieceKind>,
    advantage: Option<(Color, u32)>,
    notation: Vec<String>,
    last_move: Option<[[usize; 2]; 2]>,
    time_white_ms: Option<u64>,
    time_black_ms: Option<u64>,
}

#[derive(Serialize)]
struct MoveResult {
    #[serde(flatten)]
    board_state: BoardState,
    outcome: &'static str,
    error: Option<String>,
}

fn string_to_kind(s: &str) -> Option<PieceKind> {
    match s {
        "Queen" => Some(PieceKind::Queen),
        "Rook" => Some(PieceKind::Rook),
        "Bishop" => Some(PieceKind::Bishop),
        "Knight" => Some(PieceKind::Knight),
        _ => None,
    }
}

fn build_board_state(game: &Game) -> BoardState {
    let board = game.board();
    let squares: Vec<Vec<Option<SquarePiece>>> = board
        .squares
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| cell.map(|p| SquarePiece { kind: p.kind, color: p.color }))
                .collect()
        })
        .collect();
    let kinds = |color| -> Vec<PieceKind> {
        game.captured_pieces(color).iter().map(|p| p.kind).collect()
    };
    let millis = |color: Color| game.time_remaining(color).map(|d| d.as_millis() as u64);

    BoardState {
        squares,
        current_turn: game.turn(),
        game_over: game.is_game_over(),
        result: game.result().map(|r| r.to_string()),
        king_in_check: game.king_in_check_square().map(|(r, c)| [r, c]),
        pending_promotion: game.pending_promotion().map(|(r, c)| [r, c]),
        captured_by_white: kinds(Color::White),
        captured_by_black: kinds(Color::Black),
        advantage: game.material_advantage(),
        notation: game.notation_history().to_vec(),
        last_move: game.last_move().map(|((fr, fc), (tr, tc))| [[fr, fc], [tr, tc]]),
        time_white_ms: millis(Color::White),
        time_black_ms: millis(Color::Black),
    }
}

fn to_js<T: Serialize>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or(JsValue::NULL)
}

#[wasm_bindgen]
pub struct ChessGame {
    game: Game,
}

#[wasm_bindgen]
impl ChessGame {
    #[wasm_bindgen(constructor)]
    pub fn new() -> ChessGame {
        ChessGame { game: Game::new() }
    }

    /// A timed game; `preset` is one of the names accepted by
    /// `TimeControl::preset`. Unknown presets fall back to an untimed game.
    pub fn timed(preset: &str, increment_seconds: u64) -> ChessGame {
        let game = match TimeControl::preset(preset) {
            Ok(tc) => Game::with_time_control(tc.with_increment(increment_seconds)),
            Err(_) => Game::new(),
        };
        ChessGame { game }
    }

    pub fn get_board_state(&self) -> JsValue {
        to_js(&build_board_state(&self.game))
    }

    pub fn make_move(&mut self, from_row: usize, from_col: usize, to_row: usize, to_col: usize) -> JsValue {
        let outcome = self.game.play_move((from_row, from_col), (to_row, to_col));
        let (label, error) = match outcome {
            MoveOutcome::Accepted => ("accepted", None),
            MoveOutcome::AwaitingPromotion => ("promotion", None),
            MoveOutcome::Rejected(e) => ("rejected", Some(e.to_string())),
        };
        to_js(&MoveResult {
            board_state: build_board_state(&self.game),
            outcome: label,
            error,
        })
    }

    pub fn promote(&mut self, row: usize, col: usize, kind: &str) -> JsValue {
        let error = match string_to_kind(kind) {
            Some(kind) => self.game.promote((row, col), kind).err().map(|e| e.to_string()),
            None => Some(format!("unknown piece: {kind}")),
        };
        to_js(&MoveResult {
            board_state: build_board_state(&self.game),
            outcome: if error.is_none() { "accepted" } else { "rejected" },
            error,
        })
    }

    pub fn get_legal_moves_for_square(&self, row: usize, col: usize) -> JsValue {
        let squares: Vec<[usize; 2]> = self
            .game
            .legal_moves((row, col))
            .into_iter()
            .map(|(r, c)| [r, c])
            .collect();
        to_js(&squares)
    }

    pub fn resign(&mut self) -> JsValue {
        self.game.resign();
        self.get_board_state()
    }

    pub fn agree_to_draw(&mut self) -> JsValue {
        self.game.agree_to_draw();
        self.get_board_state()
    }

    /// Called by the page's one-second timer.
    pub fn tick(&mut self, elapsed_ms: u64) -> JsValue {
        self.game.tick(std::time::Duration::from_millis(elapsed_ms));
        self.get_board_state()
    }
}

impl Default for ChessGame {
    fn default() -> Self {
        Self::new()
    }
}
