//! Player trait and built-in strategies.

#[cfg(feature = "random")]
mod random;
mod search;

#[cfg(feature = "random")]
pub use random::RandomPlayer;
pub use search::{AlphaBetaPlayer, MinMaxPlayer};

use crate::{Move, PlayerError, UltimateGame};

/// Trait for anything that can choose a move.
///
/// Implementations may play and unplay moves on `game` while deciding,
/// but must hand it back unchanged and return a move for which
/// `game.can_play(..)` holds.
pub trait Player {
    /// Gets a move from this player.
    ///
    /// # Errors
    ///
    /// Returns `PlayerError::EmptyMoveSet` when called on a finished game.
    fn get_move(&mut self, game: &mut UltimateGame) -> Result<Move, PlayerError>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}

impl<P: Player + ?Sized> Player for Box<P> {
    fn get_move(&mut self, game: &mut UltimateGame) -> Result<Move, PlayerError> {
        (**self).get_move(game)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
