use chess::game::{Game, MoveOutcome};
use chess::moves::Move;
use chess::piece::PieceKind;
use chess::TimeControl;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

const DEFAULT_MAX_PLIES: usize = 400;

#[derive(Serialize)]
struct Summary {
    seed: u64,
    plies: usize,
    result: Option<String>,
    moves: Vec<String>,
    material: Option<(chess::Color, u32)>,
}

/// Usage: selfplay [seed] [max_plies] [time preset]
fn main() {
    let mut args = std::env::args().skip(1);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(0);
    let max_plies: usize = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_MAX_PLIES);
    let mut game = match args.next().map(|name| TimeControl::preset(&name)) {
        Some(Ok(tc)) => Game::with_time_control(tc),
        Some(Err(e)) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
        None => Game::new(),
    };

    let mut rng = StdRng::seed_from_u64(seed);
    let mut plies = 0;

    while !game.is_game_over() && plies < max_plies {
        let moves = game.all_legal_moves();
        if moves.is_empty() {
            break;
        }
        let mv: Move = moves[rng.gen_range(0..moves.len())];
        match game.play_move(mv.from, mv.to) {
            MoveOutcome::Accepted => {}
            MoveOutcome::AwaitingPromotion => {
                let kind = mv.promotion.unwrap_or(PieceKind::Queen);
                if let Err(e) = game.promote(mv.to, kind) {
                    eprintln!("promotion failed: {e}");
                    break;
                }
            }
            MoveOutcome::Rejected(e) => {
                eprintln!("engine rejected its own move {}: {e}", mv.to_uci());
                break;
            }
        }
        plies += 1;
    }

    let result = game.result().map(|r| r.to_string());
    eprintln!(
        "Game over after {plies} plies: {}",
        result.as_deref().unwrap_or("ongoing")
    );

    let summary = Summary {
        seed,
        plies,
        result,
        moves: game.notation_history().to_vec(),
        material: game.material_advantage(),
    };
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("failed to serialize summary: {e}"),
    }
}
