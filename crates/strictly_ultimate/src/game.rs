//! Ultimate tic-tac-toe state machine with reversible moves.
//!
//! A single `UltimateGame` lives for a whole game. Search explores the
//! tree by playing and unplaying moves on that same instance, so `unplay`
//! must restore every field `play` touched:
//!
//! - the sub-board square and its cached status
//! - the status matrix entry
//! - the allowed boards (from a caller-supplied snapshot)
//! - the cached overall status
//! - the player to move
//!
//! [`UltimateGame::with_move`] packages that handshake for callers.

use super::invariants::{InvariantSet, InvariantViolation, UltimateInvariants};
use super::rules::scan_lines;
use super::{AllowedBoards, GameStatus, Move, MoveError, Player, Position, Square, SubBoard};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// The 3x3 grid of sub-boards plus derived meta-board state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UltimateGame {
    /// Sub-boards in row-major order.
    pub(crate) boards: [SubBoard; 9],
    /// Status of each sub-board, mirrored on every play and unplay.
    pub(crate) statuses: [GameStatus; 9],
    /// Player to move.
    pub(crate) to_move: Player,
    /// Sub-boards that may receive the next move.
    pub(crate) allowed: AllowedBoards,
    /// Cached scan of `statuses`.
    pub(crate) status: GameStatus,
}

impl UltimateGame {
    /// Creates a new game: empty boards, X to move, every board allowed.
    #[instrument]
    pub fn new() -> Self {
        Self {
            boards: Default::default(),
            statuses: [GameStatus::InProgress; 9],
            to_move: Player::X,
            allowed: AllowedBoards::all(),
            status: GameStatus::InProgress,
        }
    }

    /// Builds a game by playing `moves` in order from the start.
    ///
    /// # Errors
    ///
    /// Returns the first `MoveError` raised by `play`.
    #[instrument(skip(moves), fields(moves = moves.len()))]
    pub fn replay(moves: &[Move]) -> Result<Self, MoveError> {
        let mut game = Self::new();
        for mv in moves {
            game.play(*mv)?;
        }
        Ok(game)
    }

    /// Returns the sub-board at `pos`.
    pub fn board(&self, pos: Position) -> &SubBoard {
        &self.boards[pos.to_index()]
    }

    /// Returns all sub-boards in row-major order.
    pub fn boards(&self) -> &[SubBoard; 9] {
        &self.boards
    }

    /// Returns the status matrix (one entry per sub-board).
    pub fn status_matrix(&self) -> &[GameStatus; 9] {
        &self.statuses
    }

    /// Status of the sub-board at `pos`, as recorded in the matrix.
    pub fn board_status(&self, pos: Position) -> GameStatus {
        self.statuses[pos.to_index()]
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the currently allowed boards.
    ///
    /// Take this snapshot before `play` to be able to `unplay`.
    pub fn allowed_boards(&self) -> AllowedBoards {
        self.allowed
    }

    /// Returns the cached overall status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Scans the status matrix without touching the cache.
    pub fn rescan_status(&self) -> GameStatus {
        scan_lines(&self.statuses)
    }

    /// True once the game has an outcome.
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// True if `mv` may be played now.
    pub fn can_play(&self, mv: Move) -> bool {
        !self.is_over()
            && self.allowed.contains(mv.board)
            && self.boards[mv.board.to_index()].can_play(mv.cell)
    }

    /// Plays `mv` for the player to move and returns the overall status.
    ///
    /// The opponent is sent to the sub-board named by `mv.cell`; if that
    /// board is decided, to every board still in progress.
    ///
    /// # Errors
    ///
    /// - `MoveError::GameOver` if the game already has an outcome.
    /// - `MoveError::IllegalMove` if `can_play(mv)` is false.
    pub fn play(&mut self, mv: Move) -> Result<GameStatus, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if !self.can_play(mv) {
            return Err(MoveError::IllegalMove {
                board: mv.board,
                cell: mv.cell,
            });
        }

        let idx = mv.board.to_index();
        let board_status = self.boards[idx]
            .play(mv.cell, self.to_move)
            .map_err(|e| e.on_board(mv.board))?;
        trace!(%mv, player = ?self.to_move, ?board_status, "Played");

        self.to_move = self.to_move.opponent();
        self.statuses[idx] = board_status;
        self.allowed = self.next_allowed(mv.cell);
        self.status = scan_lines(&self.statuses);
        Ok(self.status)
    }

    /// Undoes `mv`, restoring the state from before the matching `play`.
    ///
    /// `previous` must be the value of `allowed_boards()` captured right
    /// before that `play`. Moves must be undone in reverse order.
    ///
    /// # Errors
    ///
    /// Returns `MoveError::NothingToUndo` unless the cell holds the mark
    /// of the player who moved last.
    pub fn unplay(&mut self, mv: Move, previous: AllowedBoards) -> Result<(), MoveError> {
        let last_mover = self.to_move.opponent();
        let idx = mv.board.to_index();
        if self.boards[idx].square(mv.cell) != Square::Occupied(last_mover) {
            return Err(MoveError::NothingToUndo {
                board: mv.board,
                cell: mv.cell,
            });
        }

        self.boards[idx]
            .unplay(mv.cell)
            .map_err(|e| e.on_board(mv.board))?;
        self.statuses[idx] = GameStatus::InProgress;
        self.allowed = previous;
        self.status = GameStatus::InProgress;
        self.to_move = last_mover;
        Ok(())
    }

    /// Plays `mv`, runs `f` on the resulting position, then unplays `mv`.
    ///
    /// The allowed-boards snapshot is taken here, so the game is restored
    /// on every return path of `f`.
    ///
    /// # Errors
    ///
    /// Returns the `MoveError` of `play` (nothing was changed) or of
    /// `unplay`.
    pub fn with_move<R>(
        &mut self,
        mv: Move,
        f: impl FnOnce(&mut Self) -> R,
    ) -> Result<R, MoveError> {
        let snapshot = self.allowed;
        self.play(mv)?;
        let out = f(self);
        self.unplay(mv, snapshot)?;
        Ok(out)
    }

    /// Every legal move: allowed boards in row-major order, then each
    /// board's empty cells in row-major order.
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.is_over() {
            return Vec::new();
        }
        self.allowed
            .iter()
            .flat_map(|board| {
                self.boards[board.to_index()]
                    .legal_cells()
                    .into_iter()
                    .map(move |cell| Move::new(board, cell))
            })
            .collect()
    }

    /// Number of sub-boards won by `player`.
    pub fn boards_won_by(&self, player: Player) -> usize {
        self.statuses
            .iter()
            .filter(|s| **s == GameStatus::Won(player))
            .count()
    }

    /// Checks every game invariant.
    ///
    /// # Errors
    ///
    /// Returns the list of violated invariants.
    pub fn check_invariants(&self) -> Result<(), Vec<InvariantViolation>> {
        UltimateInvariants::check_all(self)
    }

    fn next_allowed(&self, target: Position) -> AllowedBoards {
        if self.statuses[target.to_index()].is_terminal() {
            Position::ALL
                .into_iter()
                .filter(|pos| !self.statuses[pos.to_index()].is_terminal())
                .collect()
        } else {
            AllowedBoards::only(target)
        }
    }
}

impl Default for UltimateGame {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for UltimateGame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for meta_row in 0..3 {
            if meta_row > 0 {
                writeln!(f)?;
            }
            for line in 0..3 {
                let row = (0..3)
                    .map(|meta_col| self.boards[meta_row * 3 + meta_col].line(line))
                    .collect::<Vec<_>>()
                    .join("\t");
                writeln!(f, "{}", row)?;
            }
        }
        Ok(())
    }
}
