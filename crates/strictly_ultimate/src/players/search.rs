//! Search-backed players.

use super::Player;
use crate::search::{SearchKind, SearchResult};
use crate::{Move, PlayerError, UltimateGame};
use tracing::{debug, instrument};

/// Runs `kind` and checks, in debug builds, that the game came back intact.
fn search_move(
    kind: SearchKind,
    game: &mut UltimateGame,
    depth: u32,
) -> Result<SearchResult, PlayerError> {
    #[cfg(debug_assertions)]
    let before = game.clone();

    let result = kind.search(game, depth)?;

    #[cfg(debug_assertions)]
    debug_assert_eq!(*game, before, "search must restore the game");

    Ok(result)
}

/// Player backed by exhaustive minimax.
#[derive(Debug, Clone)]
pub struct MinMaxPlayer {
    name: String,
    depth: u32,
}

impl MinMaxPlayer {
    /// Creates a minimax player searching `depth` plies past its move.
    pub fn new(name: impl Into<String>, depth: u32) -> Self {
        Self {
            name: name.into(),
            depth,
        }
    }

    /// Configured search depth.
    pub fn depth(&self) -> u32 {
        self.depth
    }
}

impl Player for MinMaxPlayer {
    #[instrument(skip(self, game), fields(player = %self.name, depth = self.depth))]
    fn get_move(&mut self, game: &mut UltimateGame) -> Result<Move, PlayerError> {
        let result = search_move(SearchKind::MinMax, game, self.depth)?;
        debug!(best_move = %result.best_move, value = result.value, nodes = result.nodes, "Minimax chose move");
        Ok(result.best_move)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Player backed by alpha-beta search.
#[derive(Debug, Clone)]
pub struct AlphaBetaPlayer {
    name: String,
    depth: u32,
}

impl AlphaBetaPlayer {
    /// Creates an alpha-beta player searching `depth` plies past its move.
    pub fn new(name: impl Into<String>, depth: u32) -> Self {
        Self {
            name: name.into(),
            depth,
        }
    }

    /// Configured search depth.
    pub fn depth(&self) -> u32 {
        self.depth
    }
}

impl Player for AlphaBetaPlayer {
    #[instrument(skip(self, game), fields(player = %self.name, depth = self.depth))]
    fn get_move(&mut self, game: &mut UltimateGame) -> Result<Move, PlayerError> {
        let result = search_move(SearchKind::AlphaBeta, game, self.depth)?;
        debug!(best_move = %result.best_move, value = result.value, nodes = result.nodes, "Alpha-beta chose move");
        Ok(result.best_move)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameStatus, Position};

    #[test]
    fn test_players_return_legal_moves() {
        let mut game = UltimateGame::replay(&[Move::new(Position::TopLeft, Position::Center)])
            .expect("legal replay");
        let mut minmax = MinMaxPlayer::new("minmax", 1);
        let mut alphabeta = AlphaBetaPlayer::new("alphabeta", 1);

        let a = minmax.get_move(&mut game).expect("move");
        let b = alphabeta.get_move(&mut game).expect("move");
        assert!(game.can_play(a));
        assert!(game.can_play(b));
        assert_eq!(minmax.name(), "minmax");
    }

    #[test]
    fn test_finished_game_has_no_moves() {
        let mut game = UltimateGame::new();
        game.status = GameStatus::Won(crate::Player::X);
        let mut player = AlphaBetaPlayer::new("alphabeta", 2);
        assert!(matches!(
            player.get_move(&mut game),
            Err(PlayerError::EmptyMoveSet)
        ));
    }
}
