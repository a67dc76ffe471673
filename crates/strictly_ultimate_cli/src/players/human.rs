//! Human player reading moves from a text console.

use crate::notation::{format_move, parse_move};
use std::io::{BufRead, Write};
use strictly_ultimate::players::Player;
use strictly_ultimate::{Move, PlayerError, UltimateGame};
use tracing::{debug, instrument, warn};

/// Human player typing `board cell` keypad digits.
///
/// Unreadable or illegal input is reported and asked for again; only a
/// closed input stream ends the game with an error.
pub struct ConsoleHumanPlayer<R, W> {
    name: String,
    input: R,
    output: W,
}

impl ConsoleHumanPlayer<std::io::StdinLock<'static>, std::io::Stdout> {
    /// Creates a human player on the process console.
    pub fn stdio(name: impl Into<String>) -> Self {
        Self::new(name, std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleHumanPlayer<R, W> {
    /// Creates a human player over arbitrary streams.
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }

    /// Consumes the player and returns its output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self) -> Result<String, PlayerError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PlayerError::input("input closed"));
        }
        Ok(line)
    }
}

impl<R: BufRead, W: Write> Player for ConsoleHumanPlayer<R, W> {
    #[instrument(skip(self, game), fields(player = %self.name))]
    fn get_move(&mut self, game: &mut UltimateGame) -> Result<Move, PlayerError> {
        if game.legal_moves().is_empty() {
            return Err(PlayerError::EmptyMoveSet);
        }

        let boards = game
            .allowed_boards()
            .iter()
            .map(|b| b.to_numpad().to_string())
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(self.output, "{} ({}) to move, boards: {}", self.name, game.to_move(), boards)?;

        loop {
            write!(self.output, "Move: ")?;
            self.output.flush()?;
            let line = self.read_line()?;

            match parse_move(&line) {
                Ok(mv) if game.can_play(mv) => {
                    debug!(%mv, "Human move");
                    return Ok(mv);
                }
                Ok(mv) => {
                    warn!(%mv, "Illegal move entered");
                    writeln!(self.output, "{} is not playable", format_move(mv))?;
                }
                Err(e) => {
                    warn!(error = %e, "Unreadable move entered");
                    writeln!(self.output, "{}", e)?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use strictly_ultimate::Position;

    #[test]
    fn test_reprompts_until_legal() {
        let mut game = UltimateGame::replay(&[Move::new(Position::Center, Position::Center)])
            .expect("legal replay");
        // Wrong board, garbage, occupied cell, then a legal move.
        let input = Cursor::new("7 7\nhello\n5 5\n5 9\n");
        let mut human = ConsoleHumanPlayer::new("alice", input, Vec::new());

        let mv = human.get_move(&mut game).unwrap();
        assert_eq!(mv, Move::new(Position::Center, Position::TopRight));

        let output = String::from_utf8(human.into_output()).unwrap();
        assert_eq!(output.matches("Move: ").count(), 4);
        assert!(output.contains("7 7 is not playable"));
        assert!(output.contains("5 5 is not playable"));
        assert!(output.contains("boards: 5"));
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let mut game = UltimateGame::new();
        let mut human = ConsoleHumanPlayer::new("bob", Cursor::new(""), Vec::new());
        assert!(matches!(
            human.get_move(&mut game),
            Err(PlayerError::Input { .. })
        ));
    }
}
