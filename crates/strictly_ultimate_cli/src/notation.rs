//! Numeric-keypad move notation.
//!
//! A move is two keypad digits, board then cell: `5 1` is the
//! bottom-left cell of the center board. Lists separate moves with commas.

use derive_more::{Display, Error};
use strictly_ultimate::{Move, Position};

/// A move string that could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Cannot read move {input:?}: {reason}")]
pub struct NotationError {
    /// Offending text.
    pub input: String,
    /// What was wrong with it.
    pub reason: &'static str,
}

impl NotationError {
    fn new(input: &str, reason: &'static str) -> Self {
        Self {
            input: input.to_string(),
            reason,
        }
    }
}

/// Parses `"<board> <cell>"` keypad digits.
pub fn parse_move(input: &str) -> Result<Move, NotationError> {
    let digits: Vec<&str> = input.split_whitespace().collect();
    let [board, cell] = digits.as_slice() else {
        return Err(NotationError::new(input, "expected two digits"));
    };
    let board = parse_digit(board).ok_or_else(|| NotationError::new(input, "board must be 1-9"))?;
    let cell = parse_digit(cell).ok_or_else(|| NotationError::new(input, "cell must be 1-9"))?;
    Ok(Move::new(board, cell))
}

/// Parses a comma-separated move list. Blank input is an empty list.
pub fn parse_moves(input: &str) -> Result<Vec<Move>, NotationError> {
    input
        .split(',')
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .map(parse_move)
        .collect()
}

/// Formats a move as keypad digits.
pub fn format_move(mv: Move) -> String {
    format!("{} {}", mv.board.to_numpad(), mv.cell.to_numpad())
}

fn parse_digit(s: &str) -> Option<Position> {
    s.parse::<u32>().ok().and_then(Position::from_numpad)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keypad_layout() {
        let mv = parse_move("5 1").unwrap();
        assert_eq!(mv, Move::new(Position::Center, Position::BottomLeft));
        assert_eq!(format_move(mv), "5 1");
        assert_eq!(
            parse_move(" 7   9 ").unwrap(),
            Move::new(Position::TopLeft, Position::TopRight)
        );
    }

    #[test]
    fn test_bad_moves() {
        assert_eq!(parse_move("5").unwrap_err().reason, "expected two digits");
        assert_eq!(parse_move("0 5").unwrap_err().reason, "board must be 1-9");
        assert_eq!(parse_move("5 x").unwrap_err().reason, "cell must be 1-9");
    }

    #[test]
    fn test_move_list() {
        let moves = parse_moves("5 5, 5 1,").unwrap();
        assert_eq!(
            moves,
            vec![
                Move::new(Position::Center, Position::Center),
                Move::new(Position::Center, Position::BottomLeft),
            ]
        );
        assert!(parse_moves("  ").unwrap().is_empty());
    }
}
