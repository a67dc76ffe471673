//! Game orchestration between two players.

use crate::notation::format_move;
use serde::Serialize;
use std::io::Write;
use std::time::{Duration, Instant};
use strictly_ultimate::players::Player;
use strictly_ultimate::{GameStatus, Move, Player as Mark, UltimateGame};
use tracing::{debug, info, instrument};

/// Result of one finished game.
#[derive(Debug, Clone, Serialize)]
pub struct GameRecord {
    /// Final status (never `InProgress`).
    pub outcome: GameStatus,
    /// Every move in order.
    pub moves: Vec<Move>,
    /// Wall-clock time for the game.
    pub elapsed: Duration,
}

/// Tally of a series of games.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MatchSummary {
    /// Games won by X.
    pub x_wins: u32,
    /// Games won by O.
    pub o_wins: u32,
    /// Drawn games.
    pub draws: u32,
    /// Games played.
    pub games: u32,
}

impl MatchSummary {
    /// Counts one finished game.
    pub fn record(&mut self, outcome: GameStatus) {
        self.games += 1;
        match outcome {
            GameStatus::Won(Mark::X) => self.x_wins += 1,
            GameStatus::Won(Mark::O) => self.o_wins += 1,
            GameStatus::Drawn => self.draws += 1,
            GameStatus::InProgress => {}
        }
    }
}

impl std::fmt::Display for MatchSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{:<8}{:>6}", "Result", "Games")?;
        writeln!(f, "{:<8}{:>6}", "X wins", self.x_wins)?;
        writeln!(f, "{:<8}{:>6}", "O wins", self.o_wins)?;
        writeln!(f, "{:<8}{:>6}", "Draws", self.draws)?;
        write!(f, "{:<8}{:>6}", "Total", self.games)
    }
}

/// Orchestrates gameplay between two players.
pub struct Orchestrator<W> {
    game: UltimateGame,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
    show_board: bool,
    out: W,
}

impl<W: Write> Orchestrator<W> {
    /// Creates a new orchestrator writing board output to `out`.
    pub fn new(player_x: Box<dyn Player>, player_o: Box<dyn Player>, out: W) -> Self {
        Self {
            game: UltimateGame::new(),
            player_x,
            player_o,
            show_board: false,
            out,
        }
    }

    /// Prints the board after every move.
    pub fn with_show_board(mut self, show_board: bool) -> Self {
        self.show_board = show_board;
        self
    }

    /// Current game.
    pub fn game(&self) -> &UltimateGame {
        &self.game
    }

    /// Consumes the orchestrator and returns its output stream.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Plays one game from a fresh board until it ends.
    ///
    /// # Errors
    ///
    /// Fails if a player errors, returns an unplayable move, or the
    /// output cannot be written.
    #[instrument(skip(self), fields(x = %self.player_x.name(), o = %self.player_o.name()))]
    pub fn run(&mut self) -> anyhow::Result<GameRecord> {
        info!("Starting game");
        self.game = UltimateGame::new();
        let start = Instant::now();
        let mut moves = Vec::new();

        if self.show_board {
            writeln!(self.out, "{}", self.game)?;
        }

        while !self.game.is_over() {
            let mark = self.game.to_move();
            let player = match mark {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };

            debug!(player = %player.name(), ?mark, "Waiting for move");
            let mv = player.get_move(&mut self.game)?;
            let status = self.game.play(mv)?;
            moves.push(mv);
            debug!(%mv, %status, ply = moves.len(), "Move made");

            #[cfg(debug_assertions)]
            if let Err(violations) = self.game.check_invariants() {
                tracing::error!(?violations, "Invariant violated");
                anyhow::bail!("Invariants violated after {}: {:?}", mv, violations);
            }

            if self.show_board {
                writeln!(self.out, "Played {}", format_move(mv))?;
                writeln!(self.out, "{}", self.game)?;
            }
        }

        let record = GameRecord {
            outcome: self.game.status(),
            moves,
            elapsed: start.elapsed(),
        };
        info!(
            outcome = %record.outcome,
            moves = record.moves.len(),
            elapsed_ms = record.elapsed.as_millis() as u64,
            "Game finished"
        );
        Ok(record)
    }

    /// Plays `games` games and tallies the outcomes.
    ///
    /// # Errors
    ///
    /// Stops at the first game that fails.
    #[instrument(skip(self))]
    pub fn run_match(&mut self, games: u32) -> anyhow::Result<MatchSummary> {
        let mut summary = MatchSummary::default();
        for game in 1..=games {
            let record = self.run()?;
            debug!(game, outcome = %record.outcome, "Recorded game");
            summary.record(record.outcome);
        }
        info!(?summary, "Match finished");
        Ok(summary)
    }
}
