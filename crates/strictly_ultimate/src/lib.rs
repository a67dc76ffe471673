//! Strictly Ultimate - ultimate tic-tac-toe game logic and search
//!
//! A 3x3 grid of 3x3 sub-boards where the cell played in a sub-board
//! decides which sub-board the opponent must play in next.
//!
//! # Architecture
//!
//! - **Rules**: one line scan shared by sub-boards and the meta-board
//! - **SubBoard / UltimateGame**: state machine with reversible `play` / `unplay`
//! - **Search**: depth-limited minimax and alpha-beta over the live game
//! - **Players**: a single `get_move` capability with search and random variants
//!
//! # Example
//!
//! ```
//! use strictly_ultimate::players::{AlphaBetaPlayer, Player};
//! use strictly_ultimate::UltimateGame;
//!
//! let mut game = UltimateGame::new();
//! let mut engine = AlphaBetaPlayer::new("engine", 1);
//! let mv = engine.get_move(&mut game).unwrap();
//! assert!(game.can_play(mv));
//! game.play(mv).unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod allowed;
mod game;
mod position;
mod sub_board;
mod types;

pub mod invariants;
pub mod players;
pub mod rules;
pub mod search;

pub use action::{Move, MoveError, PlayerError, SquareError};
pub use allowed::AllowedBoards;
pub use game::UltimateGame;
pub use position::Position;
pub use sub_board::SubBoard;
pub use types::{GameStatus, LineMark, Player, Square};
