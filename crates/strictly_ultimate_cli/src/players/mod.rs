//! Player construction from configuration.

mod human;

pub use human::ConsoleHumanPlayer;

use crate::config::{PlayerConfig, PlayerKind};
use strictly_ultimate::players::{AlphaBetaPlayer, MinMaxPlayer, Player, RandomPlayer};
use tracing::{debug, instrument};

/// Builds the player described by `config`.
///
/// `seed` makes random players reproducible; other kinds ignore it.
#[instrument(skip(name), fields(name = %name))]
pub fn build_player(name: &str, config: &PlayerConfig, seed: Option<u64>) -> Box<dyn Player> {
    debug!(kind = %config.kind(), depth = config.depth(), "Building player");
    match config.kind() {
        PlayerKind::Human => Box::new(ConsoleHumanPlayer::stdio(name)),
        PlayerKind::Random => match seed {
            Some(seed) => Box::new(RandomPlayer::with_seed(name, seed)),
            None => Box::new(RandomPlayer::new(name)),
        },
        PlayerKind::MinMax => Box::new(MinMaxPlayer::new(name, *config.depth())),
        PlayerKind::AlphaBeta => Box::new(AlphaBetaPlayer::new(name, *config.depth())),
    }
}
