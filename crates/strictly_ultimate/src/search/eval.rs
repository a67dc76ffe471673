//! Static evaluation of a game position.
//!
//! Terminal positions score ±[`WIN`] or [`DRAW`]. Anything else scores
//! the difference in sub-boards won; drawn sub-boards count for nobody.

use crate::{GameStatus, Player, UltimateGame};

/// Evaluation score, from one player's point of view.
pub type Score = i32;

/// Score of a won game.
pub const WIN: Score = 100;

/// Score of a lost game.
pub const LOSS: Score = -100;

/// Score of a drawn game.
pub const DRAW: Score = 0;

/// Scores `game` for `perspective`.
pub fn evaluate(game: &UltimateGame, perspective: Player) -> Score {
    match game.status() {
        GameStatus::Won(winner) if winner == perspective => WIN,
        GameStatus::Won(_) => LOSS,
        GameStatus::Drawn => DRAW,
        GameStatus::InProgress => {
            game.boards_won_by(perspective) as Score
                - game.boards_won_by(perspective.opponent()) as Score
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_scores_zero() {
        let game = UltimateGame::new();
        assert_eq!(evaluate(&game, Player::X), 0);
        assert_eq!(evaluate(&game, Player::O), 0);
    }

    #[test]
    fn test_terminal_scores() {
        let mut game = UltimateGame::new();
        game.status = GameStatus::Won(Player::O);
        assert_eq!(evaluate(&game, Player::O), WIN);
        assert_eq!(evaluate(&game, Player::X), LOSS);

        game.status = GameStatus::Drawn;
        assert_eq!(evaluate(&game, Player::X), DRAW);
    }

    #[test]
    fn test_heuristic_counts_won_boards_only() {
        let mut game = UltimateGame::new();
        game.statuses[0] = GameStatus::Won(Player::X);
        game.statuses[1] = GameStatus::Won(Player::X);
        game.statuses[5] = GameStatus::Won(Player::O);
        game.statuses[8] = GameStatus::Drawn;
        assert_eq!(evaluate(&game, Player::X), 1);
        assert_eq!(evaluate(&game, Player::O), -1);
    }
}
