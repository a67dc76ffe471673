//! Depth-limited adversarial search on a live game.
//!
//! Both searches take `&mut UltimateGame` and explore it in place with
//! [`UltimateGame::with_move`], so the caller gets the game back exactly
//! as it was. The player to move at the root is the perspective for every
//! evaluation.
//!
//! Depth counts plies after the root move: with `depth = d` the search
//! looks `d + 1` plies ahead.

pub mod alphabeta;
pub mod eval;
pub mod minimax;

pub use eval::{DRAW, LOSS, Score, WIN, evaluate};

use crate::{Move, PlayerError, UltimateGame};
use serde::{Deserialize, Serialize};

/// Best move found by a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Move to play.
    pub best_move: Move,
    /// Minimax value of `best_move` for the player to move.
    pub value: Score,
    /// Number of tree nodes visited.
    pub nodes: u64,
}

impl SearchResult {
    pub(crate) fn new(best_move: Move, value: Score) -> Self {
        Self {
            best_move,
            value,
            nodes: 0,
        }
    }
}

/// Search algorithm selector.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SearchKind {
    /// Plain minimax, no pruning.
    MinMax,
    /// Alpha-beta with move ordering.
    AlphaBeta,
}

impl SearchKind {
    /// Runs the selected search.
    ///
    /// # Errors
    ///
    /// See [`minimax::search`] and [`alphabeta::search`].
    pub fn search(self, game: &mut UltimateGame, depth: u32) -> Result<SearchResult, PlayerError> {
        match self {
            SearchKind::MinMax => minimax::search(game, depth),
            SearchKind::AlphaBeta => alphabeta::search(game, depth),
        }
    }
}
