//! Headless matches: a uniformly random human against the heuristic.

use derive_getters::Getters;
use noughts_core::{GameError, GameSession, HeuristicSelector, NoopListener, Outcome, Player};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Tally of a simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Getters)]
pub struct SimulationReport {
    /// Games played.
    games: u32,
    /// Games won by the random player (X).
    x_wins: u32,
    /// Games won by the computer (O).
    o_wins: u32,
    /// Drawn games.
    draws: u32,
}

impl SimulationReport {
    fn record(&mut self, outcome: Outcome) {
        self.games += 1;
        match outcome {
            Outcome::Winner(Player::X) => self.x_wins += 1,
            Outcome::Winner(Player::O) => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
    }
}

impl std::fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} games: X won {}, O won {}, {} drawn",
            self.games, self.x_wins, self.o_wins, self.draws
        )
    }
}

/// Plays `games` games in one session, restarting between them.
///
/// The random player and the computer draw from separate generators
/// derived from `seed`, so a given seed always gives the same report.
#[instrument]
pub fn simulate(games: u32, seed: u64) -> Result<SimulationReport, GameError> {
    let mut human_rng = StdRng::seed_from_u64(seed);
    let mut session = GameSession::new(
        HeuristicSelector::seeded(seed.wrapping_add(1)),
        NoopListener,
    );
    let mut report = SimulationReport::default();

    for game in 0..games {
        if game > 0 {
            session.restart_game();
        }
        let outcome = loop {
            let free = session.state().available();
            let cell = free[human_rng.random_range(0..free.len())];
            let turn = session.cell_selected(cell.to_index())?;
            if turn.is_game_over() {
                break session.state().outcome().ok_or(GameError::NoFreeCells)?;
            }
        };
        debug!(game, %outcome, "Simulated game finished");
        report.record(outcome);
    }

    info!(%report, "Simulation complete");
    debug_assert_eq!(*session.scores().x_points(), report.x_wins);
    debug_assert_eq!(*session.scores().o_points(), report.o_wins);
    Ok(report)
}
