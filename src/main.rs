//! Strictly Boxes - unified CLI.

use anyhow::{Context, Result};
use clap::Parser;
use strictly_boxes::{BoxesConfig, Cli, Command, parse_moves, run_replay, run_tui};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = BoxesConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    match cli.resolved_command() {
        Command::Play => {
            init_file_logging(&config)?;
            run_tui(config)
        }
        Command::Replay { moves, json } => {
            init_stderr_logging(&config);
            replay(&moves.join(","), json, &config)
        }
        Command::Config => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
    }
}

/// Logs to the configured file so output does not interfere with the TUI.
fn init_file_logging(config: &BoxesConfig) -> Result<()> {
    let path = config.logging().file();
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(config))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

fn init_stderr_logging(config: &BoxesConfig) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(config))
        .with_writer(std::io::stderr)
        .try_init();
}

fn filter(config: &BoxesConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging().filter()))
}

/// Replays a move list and prints the result.
#[instrument(skip(config))]
fn replay(moves: &str, json: bool, config: &BoxesConfig) -> Result<()> {
    let moves = parse_moves(moves)?;
    let report = run_replay(&moves, config);
    info!(claimed = report.claimed.len(), "Replay complete");

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.render_text());
    }
    Ok(())
}
