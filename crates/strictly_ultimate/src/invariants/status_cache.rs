//! Status cache invariant: cached statuses equal fresh scans.

use super::super::rules::scan_lines;
use super::super::UltimateGame;
use super::Invariant;

/// Invariant: every cached status is what a fresh scan would produce.
///
/// Covers each sub-board's own cache, the status matrix that mirrors
/// them, and the cached overall status.
pub struct StatusCacheInvariant;

impl Invariant<UltimateGame> for StatusCacheInvariant {
    fn holds(game: &UltimateGame) -> bool {
        let boards_fresh = game
            .boards
            .iter()
            .zip(game.statuses.iter())
            .all(|(board, recorded)| {
                let fresh = scan_lines(&board.squares);
                board.status == fresh && *recorded == fresh
            });

        boards_fresh && game.status == scan_lines(&game.statuses)
    }

    fn description() -> &'static str {
        "Cached sub-board, matrix and overall statuses match fresh scans"
    }
}
