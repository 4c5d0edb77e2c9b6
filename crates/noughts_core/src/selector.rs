//! Computer move selection.
//!
//! The heuristic walks a fixed ladder and takes the first rung that
//! applies:
//!
//! 1. First move of the game and the center is free: center.
//! 2. First move of the game and the center is taken: a random free corner.
//! 3. A cell that wins immediately.
//! 4. A cell that stops the opponent winning immediately.
//! 5. A random free cell.
//!
//! It never looks further than one move, so it cannot see forks.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

use crate::error::GameError;
use crate::position::Position;
use crate::state::GameState;
use crate::types::Player;

/// Something that can pick the next cell for a player.
pub trait MoveSelector {
    /// Chooses a free cell for `player` on the current state.
    fn choose_square(&mut self, state: &GameState, player: Player) -> Result<Position, GameError>;

    /// Name used in logs.
    fn name(&self) -> &str;
}

/// Which rung of the ladder produced a choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum Reason {
    /// Opening reply in the center.
    Center,
    /// Opening reply in a corner.
    Corner,
    /// Completes a line.
    Win,
    /// Stops the opponent completing a line.
    Block,
    /// Nothing better available.
    Random,
}

/// The fixed one-ply heuristic opponent.
///
/// Generic over the random source so tests can pin it.
#[derive(Debug, Clone)]
pub struct HeuristicSelector<R = StdRng> {
    rng: R,
}

impl HeuristicSelector<StdRng> {
    /// Creates a selector with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Creates a selector seeded from the thread RNG.
    pub fn from_entropy() -> Self {
        Self::seeded(rand::random::<u64>())
    }
}

impl<R: Rng> HeuristicSelector<R> {
    /// Creates a selector drawing randomness from `rng`.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Picks a cell and reports which rung chose it.
    #[instrument(skip(self, state), fields(move_count = *state.move_count()))]
    pub fn decide(&mut self, state: &GameState, player: Player) -> Result<(Position, Reason), GameError> {
        let free = state.available();
        if free.is_empty() {
            return Err(GameError::NoFreeCells);
        }

        if *state.move_count() == 1 {
            if state.board().is_empty(Position::CENTER) {
                return Ok((Position::CENTER, Reason::Center));
            }
            let corners: Vec<Position> = Position::CORNERS
                .into_iter()
                .filter(|pos| state.board().is_empty(*pos))
                .collect();
            if let Some(corner) = self.pick(&corners) {
                return Ok((corner, Reason::Corner));
            }
        }

        if let Some(pos) = state.find_winning_move(player) {
            return Ok((pos, Reason::Win));
        }

        if let Some(pos) = state.find_winning_move(player.opponent()) {
            return Ok((pos, Reason::Block));
        }

        let pos = self.pick(&free).ok_or(GameError::NoFreeCells)?;
        Ok((pos, Reason::Random))
    }

    fn pick(&mut self, candidates: &[Position]) -> Option<Position> {
        if candidates.is_empty() {
            return None;
        }
        Some(candidates[self.rng.random_range(0..candidates.len())])
    }
}

impl Default for HeuristicSelector<StdRng> {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl<R: Rng> MoveSelector for HeuristicSelector<R> {
    fn choose_square(&mut self, state: &GameState, player: Player) -> Result<Position, GameError> {
        let (pos, reason) = self.decide(state, player)?;
        debug!(%player, position = %pos, %reason, "Computer chose square");
        Ok(pos)
    }

    fn name(&self) -> &str {
        "heuristic"
    }
}

/// Selector that plays a predetermined list of cells, one per call.
///
/// Useful for driving a session deterministically.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSelector {
    moves: std::collections::VecDeque<Position>,
}

impl ScriptedSelector {
    /// Creates a selector that will answer with `moves` in order.
    pub fn new(moves: impl IntoIterator<Item = Position>) -> Self {
        Self {
            moves: moves.into_iter().collect(),
        }
    }

    /// Moves not yet played.
    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl MoveSelector for ScriptedSelector {
    fn choose_square(&mut self, state: &GameState, _player: Player) -> Result<Position, GameError> {
        if !state.has_free_cells() {
            return Err(GameError::NoFreeCells);
        }
        self.moves.pop_front().ok_or(GameError::NoFreeCells)
    }

    fn name(&self) -> &str {
        "scripted"
    }
}
