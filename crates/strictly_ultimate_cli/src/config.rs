//! Match configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Which strategy drives one side of the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PlayerKind {
    /// Moves typed at the console.
    Human,
    /// Uniformly random legal moves.
    Random,
    /// Exhaustive minimax.
    #[value(name = "minmax")]
    MinMax,
    /// Alpha-beta with move ordering.
    #[value(name = "alphabeta")]
    AlphaBeta,
}

/// One side of a match.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Strategy for this side.
    kind: PlayerKind,

    /// Search depth (ignored by human and random players).
    #[serde(default = "default_depth")]
    depth: u32,
}

impl PlayerConfig {
    /// Creates a player configuration.
    pub fn new(kind: PlayerKind, depth: u32) -> Self {
        Self { kind, depth }
    }

    /// Returns a copy with any provided override applied.
    pub fn with_overrides(&self, kind: Option<PlayerKind>, depth: Option<u32>) -> Self {
        Self {
            kind: kind.unwrap_or(self.kind),
            depth: depth.unwrap_or(self.depth),
        }
    }
}

/// Settings for a series of games.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Player for X (moves first).
    #[serde(default = "default_x")]
    x: PlayerConfig,

    /// Player for O.
    #[serde(default = "default_o")]
    o: PlayerConfig,

    /// Number of games to play.
    #[serde(default = "default_games")]
    games: u32,

    /// Seed for random players (O uses the next seed up).
    #[serde(default)]
    seed: Option<u64>,

    /// Print the board after every move.
    #[serde(default)]
    show_board: bool,
}

fn default_depth() -> u32 {
    3
}

fn default_games() -> u32 {
    1
}

fn default_x() -> PlayerConfig {
    PlayerConfig::new(PlayerKind::Random, default_depth())
}

fn default_o() -> PlayerConfig {
    PlayerConfig::new(PlayerKind::AlphaBeta, default_depth())
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            x: default_x(),
            o: default_o(),
            games: default_games(),
            seed: None,
            show_board: false,
        }
    }
}

/// Command-line values that take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct MatchOverrides {
    /// X strategy.
    pub x: Option<PlayerKind>,
    /// O strategy.
    pub o: Option<PlayerKind>,
    /// X search depth.
    pub x_depth: Option<u32>,
    /// O search depth.
    pub o_depth: Option<u32>,
    /// Number of games.
    pub games: Option<u32>,
    /// Random seed.
    pub seed: Option<u64>,
    /// Force board printing on.
    pub show_board: bool,
}

impl MatchConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read, does not parse,
    /// or asks for zero games.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading match config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;

        info!(x = %config.x.kind, o = %config.o.kind, games = config.games, "Config loaded");
        Ok(config)
    }

    /// Applies command-line overrides on top of this configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the result asks for zero games.
    #[instrument(skip(self))]
    pub fn apply(self, overrides: MatchOverrides) -> Result<Self, ConfigError> {
        let config = Self {
            x: self.x.with_overrides(overrides.x, overrides.x_depth),
            o: self.o.with_overrides(overrides.o, overrides.o_depth),
            games: overrides.games.unwrap_or(self.games),
            seed: overrides.seed.or(self.seed),
            show_board: self.show_board || overrides.show_board,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.games == 0 {
            return Err(ConfigError::new("games must be at least 1".to_string()));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
