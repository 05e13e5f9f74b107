//! Headless autoplay
//!
//! Plays random moves for both colours through the same rules engine,
//! selector and history types as the windowed game, without bevy. Useful for
//! smoke-testing the rules boundary and for reproducing a seeded game.

use crate::cli::Cli;
use crate::game::ai::{MoveSelector, RandomMoveSelector};
use crate::game::error::GameResult;
use crate::game::resources::{CapturedPieces, MoveHistory};
use crate::game::rules::{RulesEngine, ShakmatyRules};
use crate::game::types::{GameOutcome, PieceColor, TurnOwner};
use anyhow::Context;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Result of one autoplayed game
#[derive(Debug, Clone)]
pub struct HeadlessReport {
    pub history: MoveHistory,
    pub captured: CapturedPieces,
    /// `None` if the ply limit was reached first
    pub outcome: Option<GameOutcome>,
}

impl HeadlessReport {
    /// Result line, e.g. `Checkmate! White wins!` or `Unfinished after 500 plies`
    pub fn result_line(&self) -> String {
        match self.outcome {
            Some(outcome @ GameOutcome::Draw(reason)) => {
                format!("{} ({})", outcome.message(), reason.description())
            }
            Some(outcome) => outcome.message(),
            None => format!("Unfinished after {} plies", self.history.len()),
        }
    }
}

/// Play from `position` until the game ends or `max_plies` moves were made
pub fn play_out<R: RulesEngine, S: MoveSelector>(
    rules: &R,
    selector: &mut S,
    mut position: R::Position,
    max_plies: usize,
) -> GameResult<HeadlessReport> {
    let mut history = MoveHistory::default();
    let mut captured = CapturedPieces::default();

    let outcome = loop {
        if let Some(outcome) = rules.outcome(&position) {
            break Some(outcome);
        }
        if history.len() >= max_plies {
            break None;
        }

        let legal_moves = rules.legal_moves(&position);
        let chess_move = selector.select(&legal_moves)?;
        debug!("[HEADLESS] {} of {} legal moves", chess_move, legal_moves.len());

        let mover: PieceColor = rules.side_to_move(&position);
        let notation = rules.to_notation(&position, chess_move)?;
        let taken = rules.captured_piece(&position, chess_move);
        rules.apply(&mut position, chess_move)?;

        let record = history.record(mover, notation, taken, chess_move, TurnOwner::Automated);
        if let Some(piece) = taken {
            captured.add_capture(piece);
        }
        info!("[HEADLESS] {}", record.display_line());
    };

    Ok(HeadlessReport {
        history,
        captured,
        outcome,
    })
}

/// Install a `tracing-subscriber` fmt logger; `RUST_LOG` wins over `filter`
pub fn init_logging(filter: &str) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));
    let _ = tracing_subscriber::fmt().with_env_filter(env_filter).try_init();
}

/// Entry point for `--headless`
pub fn run_headless(cli: &Cli) -> anyhow::Result<HeadlessReport> {
    let rules = ShakmatyRules::new();
    let position = match cli.fen.as_deref() {
        Some(fen) => rules
            .position_from_fen(fen)
            .with_context(|| format!("cannot start headless game from FEN {fen:?}"))?,
        None => rules.starting_position(),
    };
    let mut selector = RandomMoveSelector::from_seed_option(cli.seed);
    info!(
        "[HEADLESS] Autoplay with seed {:?}, limit {} plies",
        cli.seed, cli.max_plies
    );

    let report = play_out(&rules, &mut selector, position, cli.max_plies)
        .context("headless game aborted")?;

    for record in report.history.moves() {
        println!("{}", record.display_line());
    }
    println!(
        "White captured: {}",
        report.captured.symbols(PieceColor::White)
    );
    println!(
        "Black captured: {}",
        report.captured.symbols(PieceColor::Black)
    );
    println!("{}", report.result_line());

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ply_limit_is_respected() {
        let rules = ShakmatyRules::new();
        let mut selector = RandomMoveSelector::seeded(3);
        let report = play_out(&rules, &mut selector, rules.starting_position(), 6).unwrap();
        assert!(report.history.len() <= 6);
        if report.outcome.is_none() {
            assert_eq!(report.history.len(), 6);
            assert_eq!(report.result_line(), "Unfinished after 6 plies");
        }
    }

    #[test]
    fn test_finished_position_plays_nothing() {
        let rules = ShakmatyRules::new();
        let mut selector = RandomMoveSelector::seeded(3);
        let bare_kings = rules.position_from_fen("8/8/4k3/8/8/4K3/8/8 w - - 0 1").unwrap();
        let report = play_out(&rules, &mut selector, bare_kings, 100).unwrap();
        assert!(report.history.is_empty());
        assert_eq!(
            report.result_line(),
            "Game Over! It's a draw! (insufficient material)"
        );
    }

    #[test]
    fn test_seeded_games_repeat() {
        let rules = ShakmatyRules::new();
        let notation = |seed| {
            let mut selector = RandomMoveSelector::seeded(seed);
            play_out(&rules, &mut selector, rules.starting_position(), 40)
                .unwrap()
                .history
                .moves()
                .iter()
                .map(|r| r.notation.clone())
                .collect::<Vec<_>>()
        };
        assert_eq!(notation(17), notation(17));
    }

    #[test]
    fn test_full_game_ends_or_hits_limit() {
        let rules = ShakmatyRules::new();
        let mut selector = RandomMoveSelector::seeded(8);
        let report = play_out(&rules, &mut selector, rules.starting_position(), 500).unwrap();
        assert!(report.outcome.is_some() || report.history.len() == 500);
        let captured = report.captured.captured_by(PieceColor::White).len()
            + report.captured.captured_by(PieceColor::Black).len();
        assert!(captured <= 30);
    }
}
