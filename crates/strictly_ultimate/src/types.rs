//! Core domain types for ultimate tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Player-facing name used when announcing results.
    pub fn label(self) -> &'static str {
        match self {
            Player::X => "CROSS",
            Player::O => "CIRCLE",
        }
    }
}

/// A cell of a sub-board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Single-character symbol used by the text rendering.
    pub fn symbol(self) -> char {
        match self {
            Square::Empty => '_',
            Square::Occupied(Player::X) => 'X',
            Square::Occupied(Player::O) => 'O',
        }
    }
}

/// Terminal status of a sub-board or of the whole game.
///
/// `InProgress` doubles as "not known to be terminal": a freshly
/// reset cache always reads `InProgress` until the next scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum GameStatus {
    /// Board still accepts moves.
    #[default]
    InProgress,
    /// Board won by a player.
    Won(Player),
    /// Board completed without a winner.
    Drawn,
}

impl GameStatus {
    /// True once the board can no longer accept moves.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }

    /// Player-facing label: `NONE`, `CROSS`, `CIRCLE` or `BOTH`.
    pub fn label(self) -> &'static str {
        match self {
            GameStatus::InProgress => "NONE",
            GameStatus::Won(player) => player.label(),
            GameStatus::Drawn => "BOTH",
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(player) => write!(f, "Player {} wins", player),
            GameStatus::Drawn => write!(f, "Draw"),
        }
    }
}

/// A value that can complete a three-in-a-row line.
///
/// Implemented by [`Square`] for sub-boards and by [`GameStatus`] for the
/// meta-board, so both levels share one line scan.
pub trait LineMark: Copy + Eq {
    /// Status this value stands for when three of it line up.
    fn as_status(self) -> GameStatus;

    /// True if the slot can still change.
    fn is_open(self) -> bool {
        self.as_status() == GameStatus::InProgress
    }
}

impl LineMark for Square {
    fn as_status(self) -> GameStatus {
        match self {
            Square::Empty => GameStatus::InProgress,
            Square::Occupied(player) => GameStatus::Won(player),
        }
    }
}

impl LineMark for GameStatus {
    fn as_status(self) -> GameStatus {
        self
    }
}
