//! Position enum shared by sub-board and cell coordinates.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A position on a 3x3 grid.
///
/// Names both a sub-board on the meta-board and a cell inside a
/// sub-board. Row and column are zero-based, row-major.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (row 0, col 0)
    TopLeft,
    /// Top-center (row 0, col 1)
    TopCenter,
    /// Top-right (row 0, col 2)
    TopRight,
    /// Middle-left (row 1, col 0)
    MiddleLeft,
    /// Center (row 1, col 1)
    Center,
    /// Middle-right (row 1, col 2)
    MiddleRight,
    /// Bottom-left (row 2, col 0)
    BottomLeft,
    /// Bottom-center (row 2, col 1)
    BottomCenter,
    /// Bottom-right (row 2, col 2)
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to grid index (0-8, row-major).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from grid index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Zero-based row.
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Zero-based column.
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// Creates position from zero-based row and column.
    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row >= 3 || col >= 3 {
            return None;
        }
        Self::from_index(row * 3 + col)
    }

    /// Creates position from a numeric keypad digit.
    ///
    /// The keypad layout puts 7 8 9 on the top row and 1 2 3 on the
    /// bottom row, matching how the grid is drawn.
    pub fn from_numpad(digit: u32) -> Option<Self> {
        match digit {
            1..=9 => {
                let d = digit as usize - 1;
                Self::from_row_col(2 - d / 3, d % 3)
            }
            _ => None,
        }
    }

    /// Numeric keypad digit for this position.
    pub fn to_numpad(self) -> u32 {
        ((2 - self.row()) * 3 + self.col() + 1) as u32
    }

    /// Parse from label or keypad digit (1-9).
    #[instrument]
    pub fn from_label_or_number(s: &str) -> Option<Position> {
        let s = s.trim();
        if let Ok(num) = s.parse::<u32>() {
            return Self::from_numpad(num);
        }

        let s_lower = s.to_lowercase();
        <Position as strum::IntoEnumIterator>::iter()
            .find(|pos| pos.label().to_lowercase() == s_lower)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row(), self.col())
    }
}
