//! Noughts - tic-tac-toe against a heuristic computer opponent.
//!
//! This crate is the application layer around [`noughts_core`]:
//!
//! - **Config**: TOML settings with defaults
//! - **CLI**: `play` and `simulate` subcommands
//! - **Console**: line-based terminal front-end
//! - **Simulate**: headless random-versus-heuristic matches

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod console;
mod simulate;

pub use cli::{Cli, Command};
pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_PATH};
pub use console::{ConsoleCommand, Names, run as run_console};
pub use simulate::{SimulationReport, simulate};
