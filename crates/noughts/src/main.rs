//! Noughts - terminal tic-tac-toe against the computer.

use anyhow::{Context, Result};
use clap::Parser;
use noughts::{AppConfig, Cli, Command, Names, run_console, simulate};
use noughts_core::{EventLog, GameSession, HeuristicSelector};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    init_tracing(&config);

    match cli.command {
        Command::Play { seed } => run_play(config.with_seed_override(seed)),
        Command::Simulate { games, seed, json } => {
            run_simulate(config.with_seed_override(seed), games, json)
        }
    }
}

/// Logs go to stderr so the board on stdout stays readable.
fn init_tracing(config: &AppConfig) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Run an interactive game on stdin/stdout
#[instrument(skip(config))]
fn run_play(config: AppConfig) -> Result<()> {
    let selector = match config.seed() {
        Some(seed) => HeuristicSelector::seeded(*seed),
        None => HeuristicSelector::from_entropy(),
    };
    let mut session = GameSession::new(selector, EventLog::new());
    let names = Names::from_config(&config);

    let stdin = std::io::stdin();
    let scores = run_console(&mut session, &names, stdin.lock(), std::io::stdout())?;
    info!(%scores, "Session ended");
    Ok(())
}

/// Run headless games and print the tally
#[instrument(skip(config))]
fn run_simulate(config: AppConfig, games: u32, json: bool) -> Result<()> {
    let seed = (*config.seed()).unwrap_or_else(rand::random::<u64>);
    info!(games, seed, "Starting simulation");

    let report = simulate(games, seed).context("Simulation failed")?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report);
    }
    Ok(())
}
