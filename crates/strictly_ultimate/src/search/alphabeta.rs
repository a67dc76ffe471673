//! Alpha-beta search with one-ply move ordering.
//!
//! Same tree and values as [`super::minimax`], but every node sorts its
//! moves by a static evaluation first and carries an `(alpha, beta)`
//! window to skip siblings that cannot change the result.

use super::eval::{LOSS, Score, WIN, evaluate};
use super::SearchResult;
use crate::{Move, MoveError, Player, PlayerError, UltimateGame};
use std::cmp::Reverse;
use tracing::{debug, instrument};

/// Searches to `depth` with pruning and returns the best move for the
/// player to move.
///
/// The returned value always equals the minimax value at the same depth;
/// on ties the move ordering decides which move is returned. The game is
/// restored before returning.
///
/// # Errors
///
/// - `PlayerError::EmptyMoveSet` if there is no legal move.
/// - `PlayerError::Move` if a move fails to apply or undo.
#[instrument(skip(game), fields(to_move = ?game.to_move()))]
pub fn search(game: &mut UltimateGame, depth: u32) -> Result<SearchResult, PlayerError> {
    let mut alphabeta = AlphaBeta {
        perspective: game.to_move(),
        depth,
        nodes: 0,
    };

    let moves = alphabeta.ordered_moves(game, Order::Descending)?;
    let Some(&first) = moves.first() else {
        return Err(PlayerError::EmptyMoveSet);
    };
    let mut best = SearchResult::new(first, LOSS);
    let mut alpha = LOSS;

    for mv in moves {
        let value = game.with_move(mv, |g| alphabeta.min_value(g, 0, alpha, WIN))??;
        if value > best.value {
            best.value = value;
            best.best_move = mv;
        }
        alpha = alpha.max(best.value);
    }

    best.nodes = alphabeta.nodes;
    debug!(best_move = %best.best_move, value = best.value, nodes = best.nodes, "Alpha-beta done");
    Ok(best)
}

#[derive(Debug, Clone, Copy)]
enum Order {
    /// Best moves for the perspective player first.
    Descending,
    /// Best moves for the opponent first.
    Ascending,
}

struct AlphaBeta {
    perspective: Player,
    depth: u32,
    nodes: u64,
}

impl AlphaBeta {
    /// Legal moves sorted by the evaluation one ply ahead.
    ///
    /// The sort is stable, so equal scores keep `legal_moves()` order.
    fn ordered_moves(
        &self,
        game: &mut UltimateGame,
        order: Order,
    ) -> Result<Vec<Move>, MoveError> {
        let mut scored = Vec::new();
        for mv in game.legal_moves() {
            let score = game.with_move(mv, |g| evaluate(g, self.perspective))?;
            scored.push((mv, score));
        }

        match order {
            Order::Descending => scored.sort_by_key(|&(_, score)| Reverse(score)),
            Order::Ascending => scored.sort_by_key(|&(_, score)| score),
        }
        Ok(scored.into_iter().map(|(mv, _)| mv).collect())
    }

    /// Opponent to move. Cuts once the running minimum reaches `alpha`.
    fn min_value(
        &mut self,
        game: &mut UltimateGame,
        ply: u32,
        alpha: Score,
        mut beta: Score,
    ) -> Result<Score, MoveError> {
        self.nodes += 1;
        if ply >= self.depth || game.is_over() {
            return Ok(evaluate(game, self.perspective));
        }

        let mut min = WIN;
        for mv in self.ordered_moves(game, Order::Ascending)? {
            let value = game.with_move(mv, |g| self.max_value(g, ply + 1, alpha, beta))??;
            min = min.min(value);
            if min <= alpha {
                return Ok(min);
            }
            beta = beta.min(min);
        }
        Ok(min)
    }

    /// Perspective player to move. Cuts once the running maximum reaches `beta`.
    fn max_value(
        &mut self,
        game: &mut UltimateGame,
        ply: u32,
        mut alpha: Score,
        beta: Score,
    ) -> Result<Score, MoveError> {
        self.nodes += 1;
        if ply >= self.depth || game.is_over() {
            return Ok(evaluate(game, self.perspective));
        }

        let mut max = LOSS;
        for mv in self.ordered_moves(game, Order::Descending)? {
            let value = game.with_move(mv, |g| self.min_value(g, ply + 1, alpha, beta))??;
            max = max.max(value);
            if max >= beta {
                return Ok(max);
            }
            alpha = alpha.max(max);
        }
        Ok(max)
    }
}
