//! Strictly Time Travel - CLI entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::Path;

use strictly_timetravel::{Controller, Settings, TimeTravelGame, tui};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut settings = Settings::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;
    if let Some(file) = cli.log_file {
        settings.set_log_file(file);
    }

    match cli.command {
        Command::Play => run_play(settings, &cli.config),
        Command::Replay {
            moves,
            jump,
            descending,
            json,
        } => {
            if descending {
                settings.set_sort_ascending(false);
            }
            run_replay(settings, &cli.config, &moves, jump, json)
        }
    }
}

fn env_filter(settings: &Settings) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.logging().filter()))
}

/// Records where settings came from; loading runs before logging is up.
fn log_config_source(config: &Path) {
    if config.exists() {
        info!(path = %config.display(), "Using config file");
    } else {
        debug!(path = %config.display(), "Config file not found, using defaults");
    }
}

fn controller_for(settings: &Settings) -> Controller {
    let game = TimeTravelGame::with_sort(*settings.display().sort_ascending());
    Controller::new(game).with_draw_message(settings.display().draw_message().clone())
}

/// Run the terminal UI, logging to a file so the screen stays clean.
fn run_play(settings: Settings, config: &Path) -> Result<()> {
    let path = settings.logging().file();
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(&settings))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    log_config_source(config);
    info!("Starting Strictly Time Travel");
    tui::run_tui(controller_for(&settings))
}

/// Apply a move sequence headlessly and print the resulting view.
#[instrument(skip(settings, config))]
fn run_replay(
    settings: Settings,
    config: &Path,
    moves: &[usize],
    jump: Option<usize>,
    json: bool,
) -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(&settings))
        .with_writer(std::io::stderr)
        .try_init();
    log_config_source(config);

    let view = controller_for(&settings).replay(moves, jump)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", view.to_text());
    }
    Ok(())
}
