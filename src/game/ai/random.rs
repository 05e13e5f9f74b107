//! Uniform random move selection

use super::MoveSelector;
use crate::game::error::{GameError, GameResult};
use crate::game::types::ChessMove;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Picks a legal move uniformly at random
#[derive(Debug, Clone)]
pub struct RandomMoveSelector {
    rng: StdRng,
}

impl RandomMoveSelector {
    /// Selector seeded from OS entropy
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic selector, same seed gives the same sequence of picks
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Build from an optional seed
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::new(),
        }
    }
}

impl Default for RandomMoveSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveSelector for RandomMoveSelector {
    fn select(&mut self, legal_moves: &[ChessMove]) -> GameResult<ChessMove> {
        if legal_moves.is_empty() {
            return Err(GameError::NoLegalMoves);
        }
        let index = self.rng.random_range(0..legal_moves.len());
        Ok(legal_moves[index])
    }

    fn name(&self) -> &'static str {
        "random"
    }
}
