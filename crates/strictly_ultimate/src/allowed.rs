//! Set of sub-boards eligible for the next move.

use super::Position;
use serde::{Deserialize, Serialize};

/// Set of sub-board positions, stored as a 9-bit mask.
///
/// Search copies it before every `play` and hands the copy back to
/// `unplay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct AllowedBoards {
    mask: u16,
}

impl AllowedBoards {
    const FULL: u16 = 0x1ff;

    /// Every sub-board.
    pub fn all() -> Self {
        Self { mask: Self::FULL }
    }

    /// No sub-board.
    pub fn none() -> Self {
        Self { mask: 0 }
    }

    /// Exactly one sub-board.
    pub fn only(board: Position) -> Self {
        Self {
            mask: 1 << board.to_index(),
        }
    }

    /// Adds a sub-board to the set.
    pub fn insert(&mut self, board: Position) {
        self.mask |= 1 << board.to_index();
    }

    /// Membership test.
    pub fn contains(&self, board: Position) -> bool {
        self.mask & (1 << board.to_index()) != 0
    }

    /// Number of allowed sub-boards.
    pub fn len(&self) -> usize {
        self.mask.count_ones() as usize
    }

    /// True if no sub-board is allowed.
    pub fn is_empty(&self) -> bool {
        self.mask == 0
    }

    /// Allowed sub-boards in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL.into_iter().filter(|pos| self.contains(*pos))
    }
}

impl FromIterator<Position> for AllowedBoards {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        let mut set = Self::none();
        for pos in iter {
            set.insert(pos);
        }
        set
    }
}

impl std::fmt::Display for AllowedBoards {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let boards = self.iter().map(|p| p.to_string()).collect::<Vec<_>>();
        write!(f, "[{}]", boards.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_contains_every_board() {
        let all = AllowedBoards::all();
        assert_eq!(all.len(), 9);
        assert!(Position::ALL.iter().all(|p| all.contains(*p)));
    }

    #[test]
    fn test_only_single_board() {
        let only = AllowedBoards::only(Position::Center);
        assert_eq!(only.iter().collect::<Vec<_>>(), vec![Position::Center]);
        assert!(!only.contains(Position::TopLeft));
    }

    #[test]
    fn test_iter_is_row_major() {
        let set: AllowedBoards = [Position::BottomRight, Position::TopCenter, Position::Center]
            .into_iter()
            .collect();
        assert_eq!(
            set.iter().collect::<Vec<_>>(),
            vec![Position::TopCenter, Position::Center, Position::BottomRight]
        );
        assert!(AllowedBoards::none().is_empty());
    }
}
