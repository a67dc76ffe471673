//! First-class move and error types.
//!
//! Moves are plain values: they can be enumerated, ordered, logged and
//! replayed independently of the game they are applied to.

use super::Position;
use serde::{Deserialize, Serialize};

/// A move: the sub-board to play in and the cell inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Sub-board receiving the mark.
    pub board: Position,
    /// Cell inside that sub-board.
    pub cell: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(board: Position, cell: Position) -> Self {
        Self { board, cell }
    }

    /// Returns the sub-board of this move.
    pub fn board(&self) -> Position {
        self.board
    }

    /// Returns the cell of this move.
    pub fn cell(&self) -> Position {
        self.cell
    }

    /// Creates a move from row/column pairs.
    pub fn from_coords(board: (usize, usize), cell: (usize, usize)) -> Option<Self> {
        Some(Self {
            board: Position::from_row_col(board.0, board.1)?,
            cell: Position::from_row_col(cell.0, cell.1)?,
        })
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} @ {}", self.cell, self.board)
    }
}

/// Error raised when a move cannot be applied or undone.
///
/// Every variant signals a caller contract violation: callers that only
/// play moves drawn from `legal_moves()` never see one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The target sub-board is not allowed or the cell is not playable.
    #[display("Illegal move {cell} in board {board}")]
    IllegalMove {
        /// Sub-board of the rejected move.
        board: Position,
        /// Cell of the rejected move.
        cell: Position,
    },

    /// The game already has an outcome.
    #[display("Cannot play a move in an ended game")]
    GameOver,

    /// `unplay` was asked to undo a move that is not on the board.
    #[display("Move {cell} @ {board} wasn't played")]
    NothingToUndo {
        /// Sub-board of the missing move.
        board: Position,
        /// Cell of the missing move.
        cell: Position,
    },
}

impl std::error::Error for MoveError {}

/// Error raised by a single sub-board, before it is tied to a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SquareError {
    /// The cell is taken or the sub-board is already decided.
    #[display("Cell {_0} is not playable")]
    Unplayable(Position),

    /// There is no mark to remove from the cell.
    #[display("Cell {_0} is empty")]
    Empty(Position),
}

impl SquareError {
    /// Names the sub-board the error happened on.
    pub fn on_board(self, board: Position) -> MoveError {
        match self {
            SquareError::Unplayable(cell) => MoveError::IllegalMove { board, cell },
            SquareError::Empty(cell) => MoveError::NothingToUndo { board, cell },
        }
    }
}

impl std::error::Error for SquareError {}

/// Error raised by a move-choosing strategy.
#[derive(Debug, derive_more::Display)]
pub enum PlayerError {
    /// The player was asked for a move but no legal move exists.
    #[display("Player has no allowed moves")]
    EmptyMoveSet,

    /// Exploring or applying a move failed.
    #[display("{_0}")]
    Move(MoveError),

    /// The move source (console, script) failed.
    #[display("Input error: {message}")]
    Input {
        /// What went wrong.
        message: String,
    },
}

impl PlayerError {
    /// Creates an input error.
    pub fn input(message: impl Into<String>) -> Self {
        Self::Input {
            message: message.into(),
        }
    }
}

impl std::error::Error for PlayerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlayerError::Move(err) => Some(err),
            _ => None,
        }
    }
}

impl From<MoveError> for PlayerError {
    fn from(err: MoveError) -> Self {
        Self::Move(err)
    }
}

impl From<std::io::Error> for PlayerError {
    fn from(err: std::io::Error) -> Self {
        Self::input(err.to_string())
    }
}
