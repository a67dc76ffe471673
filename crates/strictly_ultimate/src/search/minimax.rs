//! Exhaustive depth-limited minimax.

use super::eval::{LOSS, Score, WIN, evaluate};
use super::SearchResult;
use crate::{MoveError, Player, PlayerError, UltimateGame};
use tracing::{debug, instrument};

/// Searches every line to `depth` and returns the best move for the
/// player to move.
///
/// Candidates are tried in `legal_moves()` order and only a strictly
/// better value replaces the current best, so ties keep the first move.
/// The game is restored before returning.
///
/// # Errors
///
/// - `PlayerError::EmptyMoveSet` if there is no legal move.
/// - `PlayerError::Move` if a move fails to apply or undo.
#[instrument(skip(game), fields(to_move = ?game.to_move()))]
pub fn search(game: &mut UltimateGame, depth: u32) -> Result<SearchResult, PlayerError> {
    let moves = game.legal_moves();
    let Some(&first) = moves.first() else {
        return Err(PlayerError::EmptyMoveSet);
    };

    let mut minimax = Minimax {
        perspective: game.to_move(),
        depth,
        nodes: 0,
    };
    let mut best = SearchResult::new(first, LOSS);

    for mv in moves {
        let value = game.with_move(mv, |g| minimax.min_value(g, 0))??;
        if value > best.value {
            best.value = value;
            best.best_move = mv;
        }
    }

    best.nodes = minimax.nodes;
    debug!(best_move = %best.best_move, value = best.value, nodes = best.nodes, "Minimax done");
    Ok(best)
}

struct Minimax {
    perspective: Player,
    depth: u32,
    nodes: u64,
}

impl Minimax {
    /// Opponent to move: take the lowest child value.
    fn min_value(&mut self, game: &mut UltimateGame, ply: u32) -> Result<Score, MoveError> {
        self.nodes += 1;
        if ply >= self.depth || game.is_over() {
            return Ok(evaluate(game, self.perspective));
        }

        let mut min = WIN;
        for mv in game.legal_moves() {
            let value = game.with_move(mv, |g| self.max_value(g, ply + 1))??;
            min = min.min(value);
        }
        Ok(min)
    }

    /// Perspective player to move: take the highest child value.
    fn max_value(&mut self, game: &mut UltimateGame, ply: u32) -> Result<Score, MoveError> {
        self.nodes += 1;
        if ply >= self.depth || game.is_over() {
            return Ok(evaluate(game, self.perspective));
        }

        let mut max = LOSS;
        for mv in game.legal_moves() {
            let value = game.with_move(mv, |g| self.min_value(g, ply + 1))??;
            max = max.max(value);
        }
        Ok(max)
    }
}
