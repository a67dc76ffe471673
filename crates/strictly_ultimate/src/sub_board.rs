//! A single 3x3 sub-board.

use super::rules::scan_lines;
use super::{GameStatus, Player, Position, Square, SquareError};
use serde::{Deserialize, Serialize};

/// 3x3 grid of squares with its cached status.
///
/// The cached status is a memo of [`scan_lines`] over the squares: it is
/// recomputed on every `play` and reset on every `unplay`, so it never
/// disagrees with a fresh scan.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SubBoard {
    /// Squares in row-major order (0-8).
    pub(crate) squares: [Square; 9],
    /// Cached result of scanning `squares`.
    pub(crate) status: GameStatus,
}

impl SubBoard {
    /// Creates a new empty sub-board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the square at the given cell.
    pub fn square(&self, cell: Position) -> Square {
        self.squares[cell.to_index()]
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, cell: Position) -> bool {
        self.square(cell) == Square::Empty
    }

    /// True if the board is still open and the cell is empty.
    pub fn can_play(&self, cell: Position) -> bool {
        !self.status.is_terminal() && self.is_empty(cell)
    }

    /// Marks `cell` for `player` and returns the new status.
    ///
    /// # Errors
    ///
    /// Returns `SquareError::Unplayable` if the cell is taken or the board
    /// is already decided.
    pub fn play(&mut self, cell: Position, player: Player) -> Result<GameStatus, SquareError> {
        if !self.can_play(cell) {
            return Err(SquareError::Unplayable(cell));
        }
        self.squares[cell.to_index()] = Square::Occupied(player);
        self.status = scan_lines(&self.squares);
        Ok(self.status)
    }

    /// Clears `cell` and forgets the cached status.
    ///
    /// # Errors
    ///
    /// Returns `SquareError::Empty` if the cell is empty. This covers
    /// every case where `can_play(cell)` holds, and also refuses to reopen
    /// a decided board through one of its untouched cells.
    pub fn unplay(&mut self, cell: Position) -> Result<(), SquareError> {
        if self.is_empty(cell) {
            return Err(SquareError::Empty(cell));
        }
        self.squares[cell.to_index()] = Square::Empty;
        self.status = GameStatus::InProgress;
        Ok(())
    }

    /// Returns the cached status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Empty cells in row-major order, or none once the board is decided.
    pub fn legal_cells(&self) -> Vec<Position> {
        if self.status.is_terminal() {
            return Vec::new();
        }
        Position::ALL
            .iter()
            .copied()
            .filter(|cell| self.is_empty(*cell))
            .collect()
    }

    /// One rendered row, e.g. `X _ O`. `row` must be below 3.
    pub(crate) fn line(&self, row: usize) -> String {
        self.squares[row * 3..row * 3 + 3]
            .iter()
            .map(|s| s.symbol().to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl std::fmt::Display for SubBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            if row > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", self.line(row))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play_all(board: &mut SubBoard, moves: &[(Position, Player)]) -> GameStatus {
        let mut status = GameStatus::InProgress;
        for (cell, player) in moves {
            status = board.play(*cell, *player).unwrap();
        }
        status
    }

    #[test]
    fn test_top_row_wins() {
        let mut board = SubBoard::new();
        let status = play_all(
            &mut board,
            &[
                (Position::TopLeft, Player::X),
                (Position::TopCenter, Player::X),
                (Position::TopRight, Player::X),
            ],
        );
        assert_eq!(status, GameStatus::Won(Player::X));
        assert_eq!(board.status(), GameStatus::Won(Player::X));
        assert!(board.legal_cells().is_empty());
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let mut board = SubBoard::new();
        board.play(Position::Center, Player::X).unwrap();
        assert_eq!(
            board.play(Position::Center, Player::O),
            Err(SquareError::Unplayable(Position::Center))
        );
    }

    #[test]
    fn test_decided_board_rejects_empty_cell() {
        let mut board = SubBoard::new();
        play_all(
            &mut board,
            &[
                (Position::TopLeft, Player::O),
                (Position::Center, Player::O),
                (Position::BottomRight, Player::O),
            ],
        );
        assert!(!board.can_play(Position::TopRight));
        assert!(board.play(Position::TopRight, Player::X).is_err());
    }

    #[test]
    fn test_unplay_empty_cell_rejected() {
        let mut board = SubBoard::new();
        assert_eq!(
            board.unplay(Position::Center),
            Err(SquareError::Empty(Position::Center))
        );
    }

    #[test]
    fn test_unplay_untouched_cell_of_decided_board_rejected() {
        let mut board = SubBoard::new();
        play_all(
            &mut board,
            &[
                (Position::TopLeft, Player::X),
                (Position::TopCenter, Player::X),
                (Position::TopRight, Player::X),
            ],
        );
        assert!(board.unplay(Position::Center).is_err());
        assert_eq!(board.status(), GameStatus::Won(Player::X));
    }

    #[test]
    fn test_unplay_clears_cached_win() {
        let mut board = SubBoard::new();
        play_all(
            &mut board,
            &[
                (Position::TopLeft, Player::X),
                (Position::TopCenter, Player::X),
                (Position::TopRight, Player::X),
            ],
        );
        board.unplay(Position::TopRight).unwrap();
        assert_eq!(board.status(), GameStatus::InProgress);
        assert_eq!(board.status(), scan_lines(board.squares()));
        assert!(board.can_play(Position::TopRight));
    }

    #[test]
    fn test_full_board_without_line_is_drawn() {
        let mut board = SubBoard::new();
        let status = play_all(
            &mut board,
            &[
                (Position::TopLeft, Player::X),
                (Position::TopCenter, Player::O),
                (Position::TopRight, Player::X),
                (Position::MiddleLeft, Player::X),
                (Position::Center, Player::O),
                (Position::MiddleRight, Player::O),
                (Position::BottomLeft, Player::O),
                (Position::BottomCenter, Player::X),
                (Position::BottomRight, Player::X),
            ],
        );
        assert_eq!(status, GameStatus::Drawn);
        assert!(board.legal_cells().is_empty());
    }

    #[test]
    fn test_legal_cells_row_major() {
        let mut board = SubBoard::new();
        board.play(Position::TopLeft, Player::X).unwrap();
        board.play(Position::Center, Player::O).unwrap();
        let cells = board.legal_cells();
        assert_eq!(cells.len(), 7);
        assert_eq!(cells[0], Position::TopCenter);
        assert_eq!(cells[6], Position::BottomRight);
    }

    #[test]
    fn test_display() {
        let mut board = SubBoard::new();
        board.play(Position::TopLeft, Player::X).unwrap();
        board.play(Position::BottomRight, Player::O).unwrap();
        assert_eq!(board.to_string(), "X _ _\n_ _ _\n_ _ O");
    }
}
