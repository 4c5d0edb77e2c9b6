//! Line-based terminal front-end.
//!
//! Reads one command per line, feeds cell choices to the session, and
//! prints whatever the session reported through its [`EventLog`].

use anyhow::{Context, Result};
use derive_new::new;
use noughts_core::{
    EventLog, GameEvent, GameSession, MoveSelector, Outcome, Player, Position, ScoreTracker,
};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

use crate::config::AppConfig;

/// A parsed line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Claim a cell.
    Select(Position),
    /// Start a new game, keeping scores.
    Restart,
    /// Show the scoreboard.
    Score,
    /// Show the command list.
    Help,
    /// Leave.
    Quit,
}

impl ConsoleCommand {
    /// Parses a line; `None` for anything unrecognised.
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().to_lowercase().as_str() {
            "q" | "quit" | "exit" | "esc" => Some(Self::Quit),
            "r" | "restart" | "new" => Some(Self::Restart),
            "s" | "score" => Some(Self::Score),
            "h" | "help" | "?" => Some(Self::Help),
            other => Position::from_label_or_number(other).map(Self::Select),
        }
    }
}

const HELP: &str = "Commands: 1-9 to claim a square, r to restart, s for the score, q to quit.";

/// Player names shown on screen.
#[derive(Debug, Clone, new)]
pub struct Names {
    human: String,
    computer: String,
}

impl Names {
    /// Names taken from the configuration.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.human_name().clone(), config.computer_name().clone())
    }

    fn of(&self, player: Player) -> &str {
        match player {
            Player::X => &self.human,
            Player::O => &self.computer,
        }
    }
}

/// Runs the interactive loop until `quit` or end of input.
///
/// Returns the final scoreboard.
#[instrument(skip_all)]
pub fn run<S, R, W>(
    session: &mut GameSession<S, EventLog>,
    names: &Names,
    input: R,
    mut output: W,
) -> Result<ScoreTracker>
where
    S: MoveSelector,
    R: BufRead,
    W: Write,
{
    info!("Starting console session");
    writeln!(output, "{} (X) vs {} (O)", names.of(Player::X), names.of(Player::O))?;
    writeln!(output, "{}", HELP)?;
    show_board(session, &mut output)?;

    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        if line.trim().is_empty() {
            continue;
        }

        let Some(command) = ConsoleCommand::parse(&line) else {
            writeln!(output, "Unrecognised input {:?}. {}", line.trim(), HELP)?;
            continue;
        };
        debug!(?command, "Console command");

        match command {
            ConsoleCommand::Quit => break,
            ConsoleCommand::Help => writeln!(output, "{}", HELP)?,
            ConsoleCommand::Score => show_score(session.scores(), names, &mut output)?,
            ConsoleCommand::Restart => {
                session.restart_game();
                render_events(session, names, &mut output)?;
                show_board(session, &mut output)?;
            }
            ConsoleCommand::Select(position) => {
                match session.cell_selected(position.to_index()) {
                    Ok(_) => {
                        render_events(session, names, &mut output)?;
                        show_board(session, &mut output)?;
                    }
                    Err(e) => {
                        warn!(error = %e, "Move not accepted");
                        writeln!(output, "{}", e)?;
                    }
                }
            }
        }
    }

    show_score(session.scores(), names, &mut output)?;
    writeln!(output, "Goodbye.")?;
    Ok(*session.scores())
}

fn show_board<S, W: Write>(session: &GameSession<S, EventLog>, output: &mut W) -> Result<()>
where
    S: MoveSelector,
{
    writeln!(output, "\n{}\n", session.state().board().display())?;
    Ok(())
}

fn show_score<W: Write>(scores: &ScoreTracker, names: &Names, output: &mut W) -> Result<()> {
    writeln!(
        output,
        "Score: {} {} - {} {}",
        names.of(Player::X),
        scores.x_points(),
        scores.o_points(),
        names.of(Player::O)
    )?;
    Ok(())
}

fn render_events<S, W>(
    session: &mut GameSession<S, EventLog>,
    names: &Names,
    output: &mut W,
) -> Result<()>
where
    S: MoveSelector,
    W: Write,
{
    for event in session.listener_mut().drain() {
        match event {
            GameEvent::CellMarked { position, player } => {
                writeln!(output, "{} takes {}.", names.of(player), position)?;
            }
            GameEvent::GameOver(Outcome::Winner(player)) => {
                writeln!(output, "{} wins!", names.of(player))?;
            }
            GameEvent::GameOver(Outcome::Draw) => writeln!(output, "It's a draw.")?,
            GameEvent::ScoreChanged { x, o } => {
                writeln!(
                    output,
                    "Score: {} {} - {} {}",
                    names.of(Player::X),
                    x,
                    o,
                    names.of(Player::O)
                )?;
            }
            GameEvent::ButtonsDisabled => {
                writeln!(output, "Board locked. Press r to play again or q to quit.")?;
            }
            GameEvent::Restarted => writeln!(output, "New game.")?,
        }
    }
    Ok(())
}
