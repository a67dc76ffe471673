//! One-shot position analysis.

use crate::notation::{format_move, parse_moves};
use anyhow::Context;
use serde::Serialize;
use std::time::{Duration, Instant};
use strictly_ultimate::search::{SearchKind, Score};
use strictly_ultimate::{Move, UltimateGame};
use tracing::{info, instrument};

/// Best move found for a replayed position.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    /// Strategy that produced the result.
    pub strategy: SearchKind,
    /// Depth the search ran at.
    pub depth: u32,
    /// Recommended move.
    pub best_move: Move,
    /// Its value for the player to move.
    pub value: Score,
    /// Tree nodes visited.
    pub nodes: u64,
    /// Search time.
    pub elapsed: Duration,
}

impl std::fmt::Display for Analysis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "strategy:  {} (depth {})", self.strategy, self.depth)?;
        writeln!(f, "best move: {} [{}]", format_move(self.best_move), self.best_move)?;
        writeln!(f, "value:     {}", self.value)?;
        writeln!(f, "nodes:     {}", self.nodes)?;
        write!(f, "elapsed:   {:.3?}", self.elapsed)
    }
}

/// Replays `moves` (keypad notation) and searches the resulting position.
///
/// # Errors
///
/// Fails on unreadable or illegal moves, or when the position has no
/// legal move left.
#[instrument]
pub fn analyze(moves: &str, strategy: SearchKind, depth: u32) -> anyhow::Result<(UltimateGame, Analysis)> {
    let moves = parse_moves(moves)?;
    let mut game = UltimateGame::replay(&moves).context("Failed to replay moves")?;

    let start = Instant::now();
    let result = strategy
        .search(&mut game, depth)
        .context("Search found no move")?;
    let elapsed = start.elapsed();

    info!(best_move = %result.best_move, value = result.value, nodes = result.nodes, "Analysis done");
    let analysis = Analysis {
        strategy,
        depth,
        best_move: result.best_move,
        value: result.value,
        nodes: result.nodes,
        elapsed,
    };
    Ok((game, analysis))
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_ultimate::Position;

    #[test]
    fn test_analysis_of_opening_reply() {
        let (game, analysis) = analyze("5 5", SearchKind::AlphaBeta, 1).unwrap();
        assert_eq!(analysis.best_move.board, Position::Center);
        assert!(game.can_play(analysis.best_move));
        assert!(analysis.nodes > 0);
        assert!(analysis.to_string().contains("best move: 5 "));
    }

    #[test]
    fn test_illegal_history_rejected() {
        assert!(analyze("5 5, 7 7", SearchKind::MinMax, 0).is_err());
    }
}
