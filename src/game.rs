// =============================================================================
// Game orchestration
//
// Owns the board and everything derived from the move sequence: side to move,
// notation history, captured pieces, repetition table, half-move clock and the
// optional clock. Every mutating entry point is a no-op or a rejection once
// the game has a result.
//
// Coordinate system: row 0 = rank 1, col 0 = file a.
// =============================================================================

use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::clock::{Clock, TimeControl};
use crate::error::{MoveError, PromotionError};
use crate::moves::{Move, Square};
use crate::notation::{self, CheckState};
use crate::piece::{Color, Piece, PieceKind};
use crate::rules;

/// Half-moves without a pawn move or capture before the fifty-move draw.
const FIFTY_MOVE_LIMIT: u32 = 100;

const REPETITION_LIMIT: u32 = 3;

/// Terminal outcome. Where a color is named it is the winner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    CheckmateWhite,
    CheckmateBlack,
    Stalemate,
    DrawByFiftyMoves,
    DrawByRepetition,
    DrawByInsufficientMaterial,
    ResignationWhite,
    ResignationBlack,
    DrawByAgreement,
    TimeoutWhite,
    TimeoutBlack,
}

impl GameResult {
    fn checkmate(winner: Color) -> Self {
        match winner {
            Color::White => GameResult::CheckmateWhite,
            Color::Black => GameResult::CheckmateBlack,
        }
    }

    fn resignation(winner: Color) -> Self {
        match winner {
            Color::White => GameResult::ResignationWhite,
            Color::Black => GameResult::ResignationBlack,
        }
    }

    fn timeout(winner: Color) -> Self {
        match winner {
            Color::White => GameResult::TimeoutWhite,
            Color::Black => GameResult::TimeoutBlack,
        }
    }

    /// The winning side, or `None` for a draw.
    pub fn winner(self) -> Option<Color> {
        match self {
            GameResult::CheckmateWhite | GameResult::ResignationWhite | GameResult::TimeoutWhite => {
                Some(Color::White)
            }
            GameResult::CheckmateBlack | GameResult::ResignationBlack | GameResult::TimeoutBlack => {
                Some(Color::Black)
            }
            _ => None,
        }
    }

    pub fn is_draw(self) -> bool {
        self.winner().is_none()
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GameResult::CheckmateWhite => "Checkmate, White wins",
            GameResult::CheckmateBlack => "Checkmate, Black wins",
            GameResult::Stalemate => "Draw by stalemate",
            GameResult::DrawByFiftyMoves => "Draw by the fifty-move rule",
            GameResult::DrawByRepetition => "Draw by repetition",
            GameResult::DrawByInsufficientMaterial => "Draw by insufficient material",
            GameResult::ResignationWhite => "Black resigned, White wins",
            GameResult::ResignationBlack => "White resigned, Black wins",
            GameResult::DrawByAgreement => "Draw by agreement",
            GameResult::TimeoutWhite => "Black ran out of time, White wins",
            GameResult::TimeoutBlack => "White ran out of time, Black wins",
        };
        f.write_str(text)
    }
}

/// What happened to a move request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    Accepted,
    /// The pawn reached the last rank; call [`Game::promote`] to finish the move.
    AwaitingPromotion,
    Rejected(MoveError),
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    turn: Color,
    result: Option<GameResult>,
    halfmove_clock: u32,
    fullmove_number: u32,
    repetitions: HashMap<u64, u32>,
    notation: Vec<String>,
    captured: [Vec<Piece>; 2],
    last_move: Option<(Square, Square)>,
    king_in_check: Option<Square>,
    pending_promotion: Option<Square>,
    clock: Option<Clock>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Self::from_board(Board::new(), Color::White)
    }

    pub fn with_time_control(control: TimeControl) -> Self {
        let mut game = Self::new();
        game.clock = Some(Clock::new(control));
        game
    }

    /// Start from an arbitrary position. The position counts as the first
    /// occurrence for repetition purposes; no termination check is made.
    pub fn from_board(board: Board, turn: Color) -> Self {
        let mut game = Game {
            board,
            turn,
            result: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            repetitions: HashMap::new(),
            notation: Vec::new(),
            captured: [Vec::new(), Vec::new()],
            last_move: None,
            king_in_check: None,
            pending_promotion: None,
            clock: None,
        };
        game.king_in_check = game.checked_king(turn);
        game.repetitions.insert(game.board.position_key(turn), 1);
        game
    }

    // -------------------------------------------------------------------------
    // Read-only state
    // -------------------------------------------------------------------------

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn is_game_over(&self) -> bool {
        self.result.is_some()
    }

    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    pub fn notation_history(&self) -> &[String] {
        &self.notation
    }

    /// Pieces captured *by* `color`, most valuable first.
    pub fn captured_pieces(&self, color: Color) -> &[Piece] {
        &self.captured[color.index()]
    }

    pub fn last_move(&self) -> Option<(Square, Square)> {
        self.last_move
    }

    /// Square of the side-to-move's king if it is in check.
    pub fn king_in_check_square(&self) -> Option<Square> {
        self.king_in_check
    }

    pub fn pending_promotion(&self) -> Option<Square> {
        self.pending_promotion
    }

    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    pub fn time_remaining(&self, color: Color) -> Option<Duration> {
        self.clock.as_ref().map(|c| c.remaining(color))
    }

    /// Which side is ahead on board material, and by how many points.
    pub fn material_advantage(&self) -> Option<(Color, u32)> {
        let score = |color| self.board.pieces(color).map(|p| p.value()).sum::<u32>();
        let (white, black) = (score(Color::White), score(Color::Black));
        match white.cmp(&black) {
            std::cmp::Ordering::Greater => Some((Color::White, white - black)),
            std::cmp::Ordering::Less => Some((Color::Black, black - white)),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Legal destinations for the piece on `from`, empty if there is none.
    pub fn legal_moves(&self, from: Square) -> Vec<Square> {
        self.board
            .get(from)
            .map(|piece| rules::legal_moves(&self.board, &piece))
            .unwrap_or_default()
    }

    /// Every legal move of the side to move; empty once the game is over.
    pub fn all_legal_moves(&self) -> Vec<Move> {
        if self.is_game_over() || self.pending_promotion.is_some() {
            return Vec::new();
        }
        rules::all_legal_moves(&self.board, self.turn)
    }

    // -------------------------------------------------------------------------
    // Moves
    // -------------------------------------------------------------------------

    pub fn play_move(&mut self, from: Square, to: Square) -> MoveOutcome {
        match self.try_play(from, to) {
            Ok(outcome) => outcome,
            Err(e) => MoveOutcome::Rejected(e),
        }
    }

    /// Play a UCI move such as "e2e4" or "e7e8q"; a promotion suffix
    /// completes the promotion in the same call and is refused on any move
    /// that does not promote.
    pub fn play_uci(&mut self, text: &str) -> MoveOutcome {
        let Some(mv) = Move::from_uci(text) else {
            return MoveOutcome::Rejected(MoveError::InvalidNotation);
        };
        let promotes = self
            .board
            .get(mv.from)
            .map_or(false, |p| p.kind == PieceKind::Pawn && mv.to.0 == p.color.promotion_rank());
        if mv.promotion.is_some() && !promotes {
            return MoveOutcome::Rejected(MoveError::InvalidNotation);
        }
        let outcome = self.play_move(mv.from, mv.to);
        match (outcome, mv.promotion) {
            (MoveOutcome::AwaitingPromotion, Some(kind)) => match self.promote(mv.to, kind) {
                Ok(()) => MoveOutcome::Accepted,
                Err(_) => outcome,
            },
            _ => outcome,
        }
    }

    fn try_play(&mut self, from: Square, to: Square) -> Result<MoveOutcome, MoveError> {
        if self.is_game_over() {
            return Err(MoveError::GameOver);
        }
        if let Some(sq) = self.pending_promotion {
            return Err(MoveError::PromotionPending(sq));
        }
        let piece = self.board.get(from).ok_or(MoveError::NoPiece(from))?;
        if piece.color != self.turn {
            return Err(MoveError::WrongTurn(from));
        }
        if !rules::legal_moves(&self.board, &piece).contains(&to) {
            return Err(MoveError::IllegalDestination { from, to });
        }

        let mover = piece.color;
        let en_passant = rules::is_en_passant(&self.board, &piece, to);
        let is_capture = en_passant || self.board.get(to).is_some();

        // Notation needs the pre-move board and the post-move check facts.
        let after = rules::simulate(&self.board, from, to);
        let check = check_state(&after, mover.opposite());
        self.notation
            .push(notation::san(&self.board, &piece, to, is_capture, check));

        if piece.kind == PieceKind::Pawn || is_capture {
            self.halfmove_clock = 0;
            self.repetitions.clear();
        } else {
            self.halfmove_clock += 1;
        }

        // apply_move handles en-passant removal and the new en-passant target.
        if let Some(taken) = rules::apply_move(&mut self.board, from, to) {
            let captured = &mut self.captured[mover.index()];
            captured.push(taken);
            captured.sort_by_key(|p| std::cmp::Reverse(p.value()));
        }
        self.last_move = Some((from, to));

        if let Some(clock) = self.clock.as_mut() {
            clock.add_increment(mover);
        }

        if piece.kind == PieceKind::Pawn && to.0 == mover.promotion_rank() {
            self.pending_promotion = Some(to);
            return Ok(MoveOutcome::AwaitingPromotion);
        }

        self.finish_turn();
        Ok(MoveOutcome::Accepted)
    }

    /// Complete a pending promotion on `square`.
    pub fn promote(&mut self, square: Square, kind: PieceKind) -> Result<(), PromotionError> {
        if self.pending_promotion != Some(square) {
            return Err(PromotionError::NoPromotionPending(square));
        }
        let pawn = match self.board.get(square) {
            Some(p) if p.kind == PieceKind::Pawn => p,
            _ => return Err(PromotionError::NotAPawn(square)),
        };
        if !kind.is_promotion_target() {
            return Err(PromotionError::InvalidKind(kind));
        }

        self.board.set(
            square,
            Some(Piece {
                kind,
                ..pawn
            }),
        );
        self.pending_promotion = None;

        let check = check_state(&self.board, pawn.color.opposite());
        if let (Some(last), Some(letter)) = (self.notation.last_mut(), kind.letter()) {
            notation::strip_check(last);
            last.push('=');
            last.push(letter);
            last.push_str(check.suffix());
        }

        self.finish_turn();
        Ok(())
    }

    /// Post-move bookkeeping shared by ordinary moves and promotions.
    fn finish_turn(&mut self) {
        if self.turn == Color::Black {
            self.fullmove_number += 1;
        }
        self.turn = self.turn.opposite();
        self.king_in_check = self.checked_king(self.turn);

        let key = self.board.position_key(self.turn);
        let seen = self.repetitions.entry(key).or_insert(0);
        *seen += 1;
        let seen = *seen;

        self.result = if !rules::has_any_legal_move(&self.board, self.turn) {
            if self.king_in_check.is_some() {
                if let Some(last) = self.notation.last_mut() {
                    notation::mark_mate(last);
                }
                Some(GameResult::checkmate(self.turn.opposite()))
            } else {
                Some(GameResult::Stalemate)
            }
        } else if self.halfmove_clock >= FIFTY_MOVE_LIMIT {
            Some(GameResult::DrawByFiftyMoves)
        } else if seen >= REPETITION_LIMIT {
            Some(GameResult::DrawByRepetition)
        } else if rules::has_insufficient_material(&self.board) {
            Some(GameResult::DrawByInsufficientMaterial)
        } else {
            None
        };
    }

    fn checked_king(&self, color: Color) -> Option<Square> {
        self.board
            .find_king(color)
            .filter(|&king| self.board.is_attacked(king, color.opposite()))
    }

    // -------------------------------------------------------------------------
    // Resignation, agreement, time
    // -------------------------------------------------------------------------

    /// The side to move resigns.
    pub fn resign(&mut self) {
        if !self.is_game_over() {
            self.result = Some(GameResult::resignation(self.turn.opposite()));
        }
    }

    pub fn agree_to_draw(&mut self) {
        if !self.is_game_over() {
            self.result = Some(GameResult::DrawByAgreement);
        }
    }

    /// The side to move has run out of time.
    pub fn handle_timeout(&mut self) {
        if !self.is_game_over() {
            self.result = Some(GameResult::timeout(self.turn.opposite()));
        }
    }

    /// Charge `elapsed` to the side to move; flags it when its time is gone.
    /// Does nothing for untimed or finished games.
    pub fn tick(&mut self, elapsed: Duration) {
        if self.is_game_over() {
            return;
        }
        let turn = self.turn;
        let flagged = self
            .clock
            .as_mut()
            .map_or(false, |clock| clock.consume(turn, elapsed));
        if flagged {
            self.handle_timeout();
        }
    }
}

fn check_state(board: &Board, defender: Color) -> CheckState {
    if !board.is_in_check(defender) {
        CheckState::None
    } else if rules::has_any_legal_move(board, defender) {
        CheckState::Check
    } else {
        CheckState::Mate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play_all(game: &mut Game, moves: &[&str]) {
        for m in moves {
            assert_eq!(game.play_uci(m), MoveOutcome::Accepted, "move {m}");
        }
    }

    #[test]
    fn initial_position_has_twenty_moves() {
        let game = Game::new();
        assert_eq!(game.all_legal_moves().len(), 20);
        assert_eq!(game.legal_moves((0, 6)), vec![(2, 7), (2, 5)]);
    }

    #[test]
    fn scholars_mate() {
        let mut game = Game::new();
        play_all(&mut game, &["e2e4", "e7e5", "f1c4", "b8c6", "d1h5", "g8f6", "h5f7"]);
        assert_eq!(game.result(), Some(GameResult::CheckmateWhite));
        assert_eq!(
            game.notation_history(),
            ["e4", "e5", "Bc4", "Nc6", "Qh5", "Nf6", "Qxf7#"]
        );
        assert_eq!(game.king_in_check_square(), Some((7, 4)));
        assert_eq!(game.play_uci("e8f7"), MoveOutcome::Rejected(MoveError::GameOver));
    }

    #[test]
    fn rejections_leave_state_untouched() {
        let mut game = Game::new();
        assert_eq!(game.play_move((3, 3), (4, 3)), MoveOutcome::Rejected(MoveError::NoPiece((3, 3))));
        assert_eq!(
            game.play_move((6, 4), (4, 4)),
            MoveOutcome::Rejected(MoveError::WrongTurn((6, 4)))
        );
        assert_eq!(
            game.play_move((1, 4), (4, 4)),
            MoveOutcome::Rejected(MoveError::IllegalDestination { from: (1, 4), to: (4, 4) })
        );
        assert_eq!(game.play_move((9, 9), (1, 1)), MoveOutcome::Rejected(MoveError::NoPiece((9, 9))));
        assert_eq!(game.play_uci("zz"), MoveOutcome::Rejected(MoveError::InvalidNotation));
        assert_eq!(game.turn(), Color::White);
        assert!(game.notation_history().is_empty());
        assert_eq!(game.board(), &Board::new());
    }

    #[test]
    fn en_passant_removes_the_passed_pawn() {
        let mut game = Game::new();
        play_all(&mut game, &["e2e4", "a7a6", "e4e5", "d7d5"]);
        assert_eq!(game.board().en_passant_target, Some((5, 3)));
        play_all(&mut game, &["e5d6"]);
        assert!(game.board().get((4, 3)).is_none());
        assert_eq!(game.board().get((5, 3)).map(|p| p.kind), Some(PieceKind::Pawn));
        assert_eq!(game.notation_history().last().map(String::as_str), Some("exd6"));
        assert_eq!(game.captured_pieces(Color::White).len(), 1);
        assert_eq!(game.halfmove_clock(), 0);
    }

    #[test]
    fn en_passant_expires_after_one_move() {
        let mut game = Game::new();
        play_all(&mut game, &["e2e4", "a7a6", "e4e5", "d7d5", "h2h3", "h7h6"]);
        assert!(game.board().en_passant_target.is_none());
        let outcome = game.play_uci("e5d6");
        assert!(matches!(outcome, MoveOutcome::Rejected(MoveError::IllegalDestination { .. })));
    }

    #[test]
    fn en_passant_reply_keeps_the_check_from_being_mate() {
        let mut board = Board::empty();
        board.place(PieceKind::King, Color::Black, (4, 5));
        board.place(PieceKind::Pawn, Color::Black, (3, 3));
        board.place(PieceKind::King, Color::White, (2, 5));
        board.place(PieceKind::Pawn, Color::White, (1, 4));
        board.place(PieceKind::Rook, Color::White, (0, 6));
        board.place(PieceKind::Rook, Color::White, (5, 0));
        board.place(PieceKind::Knight, Color::White, (2, 3));
        let mut game = Game::from_board(board, Color::White);

        assert_eq!(game.play_uci("e2e4"), MoveOutcome::Accepted);
        assert_eq!(game.notation_history(), ["e4+"]);
        assert!(!game.is_game_over());
        let replies: Vec<String> = game.all_legal_moves().iter().map(Move::to_uci).collect();
        assert_eq!(replies, vec!["d4e3"]);

        assert_eq!(game.play_uci("d4e3"), MoveOutcome::Accepted);
        assert_eq!(game.notation_history().last().map(String::as_str), Some("dxe3"));
        assert!(game.board().get((3, 4)).is_none());
    }

    #[test]
    fn promotion_suffix_on_an_ordinary_move_is_refused() {
        let mut game = Game::new();
        assert_eq!(game.play_uci("e2e4q"), MoveOutcome::Rejected(MoveError::InvalidNotation));
        assert_eq!(game.board(), &Board::new());
        assert_eq!(game.turn(), Color::White);
        assert!(game.notation_history().is_empty());
    }

    #[test]
    fn kingside_castle_moves_the_rook() {
        let mut game = Game::new();
        play_all(&mut game, &["e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "g8f6", "e1g1"]);
        assert_eq!(game.notation_history().last().map(String::as_str), Some("O-O"));
        assert_eq!(game.board().get((0, 6)).map(|p| p.kind), Some(PieceKind::King));
        assert_eq!(game.board().get((0, 5)).map(|p| p.kind), Some(PieceKind::Rook));
        assert!(game.board().get((0, 7)).is_none());
        assert_eq!(game.halfmove_clock(), 5);
    }

    #[test]
    fn promotion_flow() {
        let mut board = Board::empty();
        board.place(PieceKind::King, Color::White, (0, 0));
        board.place(PieceKind::King, Color::Black, (7, 7));
        board.set(
            (6, 0),
            Some(Piece {
                has_moved: true,
                ..Piece::new(PieceKind::Pawn, Color::White, (6, 0))
            }),
        );
        let mut game = Game::from_board(board, Color::White);

        assert_eq!(game.play_move((6, 0), (7, 0)), MoveOutcome::AwaitingPromotion);
        assert_eq!(game.pending_promotion(), Some((7, 0)));
        assert_eq!(game.turn(), Color::White);
        assert_eq!(
            game.play_move((0, 0), (1, 0)),
            MoveOutcome::Rejected(MoveError::PromotionPending((7, 0)))
        );
        assert_eq!(
            game.promote((7, 0), PieceKind::King),
            Err(PromotionError::InvalidKind(PieceKind::King))
        );
        assert_eq!(
            game.promote((0, 0), PieceKind::Queen),
            Err(PromotionError::NoPromotionPending((0, 0)))
        );

        game.promote((7, 0), PieceKind::Queen).unwrap();
        assert_eq!(game.notation_history(), ["a8=Q+"]);
        assert_eq!(game.turn(), Color::Black);
        assert_eq!(game.king_in_check_square(), Some((7, 7)));
        let queen = game.board().get((7, 0)).unwrap();
        assert_eq!((queen.kind, queen.color), (PieceKind::Queen, Color::White));
        assert_eq!(game.material_advantage(), Some((Color::White, 9)));
    }

    #[test]
    fn underpromotion_is_judged_by_the_new_piece() {
        let mut board = Board::empty();
        board.place(PieceKind::King, Color::White, (0, 0));
        board.place(PieceKind::King, Color::Black, (7, 7));
        board.place(PieceKind::Pawn, Color::White, (6, 0));
        board.place(PieceKind::Pawn, Color::Black, (4, 4));
        let mut game = Game::from_board(board, Color::White);
        assert_eq!(game.play_uci("a7a8n"), MoveOutcome::Accepted);
        assert_eq!(game.notation_history(), ["a8=N"]);
        assert!(game.king_in_check_square().is_none());
    }

    #[test]
    fn resign_draw_timeout_are_one_way() {
        let mut game = Game::new();
        game.resign();
        assert_eq!(game.result(), Some(GameResult::ResignationBlack));
        game.agree_to_draw();
        game.handle_timeout();
        assert_eq!(game.result(), Some(GameResult::ResignationBlack));

        let mut game = Game::new();
        game.play_uci("e2e4");
        game.agree_to_draw();
        assert_eq!(game.result(), Some(GameResult::DrawByAgreement));
        assert!(game.result().unwrap().is_draw());
    }

    #[test]
    fn clock_increment_and_flag_fall() {
        let mut game = Game::with_time_control(TimeControl::new(60, 2).unwrap());
        game.tick(Duration::from_secs(10));
        play_all(&mut game, &["e2e4"]);
        assert_eq!(game.time_remaining(Color::White), Some(Duration::from_secs(52)));
        game.tick(Duration::from_secs(61));
        assert_eq!(game.result(), Some(GameResult::TimeoutWhite));
        assert_eq!(game.time_remaining(Color::Black), Some(Duration::ZERO));
        assert!(Game::new().time_remaining(Color::White).is_none());
    }

    #[test]
    fn knight_shuffle_repeats_three_times() {
        let mut game = Game::new();
        let shuffle = ["g1f3", "g8f6", "f3g1", "f6g8"];
        play_all(&mut game, &shuffle);
        assert!(!game.is_game_over());
        play_all(&mut game, &shuffle[..3]);
        assert!(!game.is_game_over());
        play_all(&mut game, &shuffle[3..]);
        assert_eq!(game.result(), Some(GameResult::DrawByRepetition));
    }

    #[test]
    fn pawn_move_resets_repetition_table() {
        let mut game = Game::new();
        let shuffle = ["g1f3", "g8f6", "f3g1", "f6g8"];
        play_all(&mut game, &shuffle);
        play_all(&mut game, &["a2a3", "a7a6"]);
        assert_eq!(game.halfmove_clock(), 0);
        play_all(&mut game, &shuffle);
        assert!(!game.is_game_over());
        play_all(&mut game, &shuffle);
        assert_eq!(game.result(), Some(GameResult::DrawByRepetition));
    }

    #[test]
    fn capture_resets_repetition_table() {
        let mut game = Game::new();
        play_all(&mut game, &["g1f3", "g8f6", "f3g1", "f6g8"]);
        play_all(&mut game, &["g1f3", "b8c6", "f3e5"]);
        assert_eq!(game.halfmove_clock(), 7);
        play_all(&mut game, &["c6e5"]);
        assert_eq!(game.halfmove_clock(), 0);

        let shuffle = ["b1c3", "g8f6", "c3b1", "f6g8"];
        play_all(&mut game, &shuffle);
        assert!(!game.is_game_over());
        assert_eq!(game.halfmove_clock(), 4);
        play_all(&mut game, &shuffle);
        assert_eq!(game.result(), Some(GameResult::DrawByRepetition));
    }

    #[test]
    fn fifty_move_rule() {
        let mut board = Board::empty();
        board.place(PieceKind::King, Color::White, (0, 0));
        board.place(PieceKind::King, Color::Black, (7, 7));
        board.place(PieceKind::Rook, Color::White, (3, 3));
        board.place(PieceKind::Rook, Color::Black, (4, 4));
        let mut game = Game::from_board(board, Color::White);
        game.halfmove_clock = 99;
        game.play_move((0, 0), (0, 1));
        assert_eq!(game.result(), Some(GameResult::DrawByFiftyMoves));
    }

    #[test]
    fn bare_kings_after_capture() {
        let mut board = Board::empty();
        board.place(PieceKind::King, Color::White, (0, 0));
        board.place(PieceKind::King, Color::Black, (7, 7));
        board.place(PieceKind::Rook, Color::Black, (1, 1));
        let mut game = Game::from_board(board, Color::White);
        assert_eq!(game.play_move((0, 0), (1, 1)), MoveOutcome::Accepted);
        assert_eq!(game.result(), Some(GameResult::DrawByInsufficientMaterial));
        assert_eq!(game.notation_history(), ["Kxb2"]);
        assert_eq!(game.captured_pieces(Color::White)[0].kind, PieceKind::Rook);
    }

    #[test]
    fn stalemate() {
        let mut board = Board::empty();
        board.place(PieceKind::King, Color::White, (5, 5));
        board.place(PieceKind::Queen, Color::White, (4, 6));
        board.place(PieceKind::King, Color::Black, (7, 7));
        let mut game = Game::from_board(board, Color::White);
        assert_eq!(game.play_move((4, 6), (5, 6)), MoveOutcome::Accepted);
        assert_eq!(game.result(), Some(GameResult::Stalemate));
        assert_eq!(game.notation_history(), ["Qg6"]);
    }

    #[test]
    fn captures_sorted_by_value() {
        let mut game = Game::new();
        play_all(
            &mut game,
            &["e2e4", "d7d5", "e4d5", "d8d5", "b1c3", "d5a2", "a1a2", "e7e5", "c3b5", "c8g4", "b5c7", "e8e7", "c7a8"],
        );
        let kinds: Vec<PieceKind> = game.captured_pieces(Color::White).iter().map(|p| p.kind).collect();
        assert_eq!(kinds, vec![PieceKind::Queen, PieceKind::Rook, PieceKind::Pawn, PieceKind::Pawn]);
        let black: Vec<PieceKind> = game.captured_pieces(Color::Black).iter().map(|p| p.kind).collect();
        assert_eq!(black, vec![PieceKind::Pawn, PieceKind::Pawn]);
    }
}
