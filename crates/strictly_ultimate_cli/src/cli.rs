//! Command-line interface for strictly_ultimate.

use crate::config::PlayerKind;
use clap::{Parser, Subcommand};
use strictly_ultimate::search::SearchKind;

/// Strictly Ultimate - ultimate tic-tac-toe with minimax and alpha-beta players
#[derive(Parser, Debug)]
#[command(name = "strictly_ultimate")]
#[command(about = "Ultimate tic-tac-toe between humans and search engines", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play one or more games between two players
    Play {
        /// Match configuration file (TOML); flags below override it
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Player for X
        #[arg(long, value_enum)]
        x: Option<PlayerKind>,

        /// Player for O
        #[arg(long, value_enum)]
        o: Option<PlayerKind>,

        /// Search depth for X
        #[arg(long)]
        x_depth: Option<u32>,

        /// Search depth for O
        #[arg(long)]
        o_depth: Option<u32>,

        /// Number of games to play
        #[arg(short, long)]
        games: Option<u32>,

        /// Seed for random players
        #[arg(long)]
        seed: Option<u64>,

        /// Print the board after every move
        #[arg(long)]
        show_board: bool,

        /// Print the match summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search the position reached by a list of moves
    Analyze {
        /// Moves as keypad digit pairs, e.g. "5 5, 5 1"
        #[arg(short, long, default_value = "")]
        moves: String,

        /// Search algorithm (minmax or alphabeta)
        #[arg(short, long, default_value = "alphabeta")]
        strategy: SearchKind,

        /// Search depth
        #[arg(short, long, default_value = "3")]
        depth: u32,

        /// Print the analysis as JSON
        #[arg(long)]
        json: bool,
    },
}
