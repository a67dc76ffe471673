//! Strictly Ultimate CLI - drives matches and analyses from the terminal.
//!
//! - **Config**: TOML match files with command-line overrides
//! - **Players**: console human player and construction from config
//! - **Orchestrator**: game loop, timing, match tallies

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod analyze;
pub mod cli;
pub mod config;
pub mod notation;
pub mod orchestrator;
pub mod players;

pub use analyze::{Analysis, analyze};
pub use config::{ConfigError, MatchConfig, MatchOverrides, PlayerConfig, PlayerKind};
pub use orchestrator::{GameRecord, MatchSummary, Orchestrator};
pub use players::{ConsoleHumanPlayer, build_player};
