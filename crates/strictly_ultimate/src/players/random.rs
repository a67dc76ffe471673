//! Uniform-random player.

use super::Player;
use crate::{Move, PlayerError, UltimateGame};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use tracing::{debug, instrument};

/// Plays a uniformly random legal move.
#[derive(Debug, Clone)]
pub struct RandomPlayer {
    name: String,
    rng: StdRng,
}

impl RandomPlayer {
    /// Creates a random player seeded from the OS.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a reproducible random player.
    pub fn with_seed(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Player for RandomPlayer {
    #[instrument(skip(self, game), fields(player = %self.name))]
    fn get_move(&mut self, game: &mut UltimateGame) -> Result<Move, PlayerError> {
        let moves = game.legal_moves();
        let mv = *moves.choose(&mut self.rng).ok_or(PlayerError::EmptyMoveSet)?;
        debug!(%mv, candidates = moves.len(), "Random move");
        Ok(mv)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
