//! Turn balance invariant: marks on the board match the player to move.

use super::super::{Player, Square, UltimateGame};
use super::Invariant;

/// Invariant: X has played as many marks as O when X is to move, and one
/// more when O is to move.
pub struct TurnBalanceInvariant;

impl Invariant<UltimateGame> for TurnBalanceInvariant {
    fn holds(game: &UltimateGame) -> bool {
        let count = |player: Player| {
            game.boards
                .iter()
                .flat_map(|board| board.squares.iter())
                .filter(|s| **s == Square::Occupied(player))
                .count()
        };
        let (x, o) = (count(Player::X), count(Player::O));

        match game.to_move {
            Player::X => x == o,
            Player::O => x == o + 1,
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
