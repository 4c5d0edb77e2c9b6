//! Win counters that survive restarts within a session.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::types::Player;

/// Points per player. Only ever increases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Getters)]
pub struct ScoreTracker {
    /// Wins for X.
    x_points: u32,
    /// Wins for O.
    o_points: u32,
}

impl ScoreTracker {
    /// Creates a tracker at 0 - 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a win for `player`.
    #[instrument(skip(self))]
    pub fn record_win(&mut self, player: Player) {
        match player {
            Player::X => self.x_points += 1,
            Player::O => self.o_points += 1,
        }
        info!(x = self.x_points, o = self.o_points, "Score updated");
    }

    /// Current points for `player`.
    pub fn score(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x_points,
            Player::O => self.o_points,
        }
    }
}

impl std::fmt::Display for ScoreTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.x_points, self.o_points)
    }
}
