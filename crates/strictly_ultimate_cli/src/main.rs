//! Strictly Ultimate - command-line entry point.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use strictly_ultimate::search::SearchKind;
use strictly_ultimate_cli::cli::{Cli, Command};
use strictly_ultimate_cli::{MatchConfig, MatchOverrides, Orchestrator, analyze, build_player};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            x,
            o,
            x_depth,
            o_depth,
            games,
            seed,
            show_board,
            json,
        } => {
            let overrides = MatchOverrides {
                x,
                o,
                x_depth,
                o_depth,
                games,
                seed,
                show_board,
            };
            run_play(config, overrides, json)
        }
        Command::Analyze {
            moves,
            strategy,
            depth,
            json,
        } => run_analyze(&moves, strategy, depth, json),
    }
}

/// Run a match
#[instrument(skip(overrides))]
fn run_play(config: Option<std::path::PathBuf>, overrides: MatchOverrides, json: bool) -> Result<()> {
    let config = match &config {
        Some(path) => MatchConfig::from_file(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => MatchConfig::default(),
    }
    .apply(overrides)?;

    info!(x = %config.x().kind(), o = %config.o().kind(), games = config.games(), "Starting match");

    let player_x = build_player("X", config.x(), *config.seed());
    let player_o = build_player("O", config.o(), config.seed().map(|s| s.wrapping_add(1)));
    let mut orchestrator =
        Orchestrator::new(player_x, player_o, std::io::stdout()).with_show_board(*config.show_board());

    let summary = orchestrator.run_match(*config.games())?;
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", summary);
    }
    Ok(())
}

/// Analyze a position
#[instrument]
fn run_analyze(moves: &str, strategy: SearchKind, depth: u32, json: bool) -> Result<()> {
    let (game, analysis) = analyze(moves, strategy, depth)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        println!("{}\n", game);
        println!("{}", analysis);
    }
    Ok(())
}
