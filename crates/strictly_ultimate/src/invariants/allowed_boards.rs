//! Allowed boards invariant: only open boards can be targeted.

use super::super::UltimateGame;
use super::Invariant;

/// Invariant: every allowed board is still in progress, and an empty
/// allowed set only happens once the game is over.
pub struct AllowedBoardsInvariant;

impl Invariant<UltimateGame> for AllowedBoardsInvariant {
    fn holds(game: &UltimateGame) -> bool {
        let all_open = game
            .allowed
            .iter()
            .all(|board| !game.statuses[board.to_index()].is_terminal());

        all_open && (!game.allowed.is_empty() || game.status.is_terminal())
    }

    fn description() -> &'static str {
        "Allowed boards are all in progress; none allowed only when the game is over"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AllowedBoards, GameStatus, Player, Position};

    #[test]
    fn test_new_game_holds() {
        assert!(AllowedBoardsInvariant::holds(&UltimateGame::new()));
    }

    #[test]
    fn test_decided_board_in_allowed_set_detected() {
        let mut game = UltimateGame::new();
        game.statuses[Position::Center.to_index()] = GameStatus::Won(Player::O);
        game.allowed = AllowedBoards::only(Position::Center);
        assert!(!AllowedBoardsInvariant::holds(&game));
    }

    #[test]
    fn test_empty_set_while_in_progress_detected() {
        let mut game = UltimateGame::new();
        game.allowed = AllowedBoards::none();
        assert!(!AllowedBoardsInvariant::holds(&game));
    }
}
