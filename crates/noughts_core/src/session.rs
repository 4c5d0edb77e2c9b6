//! A human-versus-computer match: one board, running scores, and the
//! turn loop tying them together.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::error::GameError;
use crate::events::{NoopListener, SessionListener};
use crate::position::Position;
use crate::score::ScoreTracker;
use crate::selector::{HeuristicSelector, MoveSelector};
use crate::state::GameState;
use crate::types::{Outcome, Player};

/// What happened during one call to [`GameSession::cell_selected`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnResult {
    /// Winner, if the turn ended the game with a line.
    pub winner: Option<Player>,
    /// True if the turn filled the board without a line.
    pub is_draw: bool,
    /// The computer's reply, if it got to move.
    pub computer_move: Option<Position>,
}

impl TurnResult {
    fn from_outcome(outcome: Option<Outcome>, computer_move: Option<Position>) -> Self {
        Self {
            winner: outcome.and_then(|o| o.winner()),
            is_draw: outcome.is_some_and(|o| o.is_draw()),
            computer_move,
        }
    }

    /// True if the game ended during this turn.
    pub fn is_game_over(&self) -> bool {
        self.winner.is_some() || self.is_draw
    }
}

/// A series of games between the human (X) and the computer (O).
///
/// Constructed and owned by the application; nothing here is global.
#[derive(Debug)]
pub struct GameSession<S = HeuristicSelector, L = NoopListener> {
    state: GameState,
    scores: ScoreTracker,
    selector: S,
    listener: L,
}

impl GameSession<HeuristicSelector, NoopListener> {
    /// Creates a session against the heuristic opponent with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(HeuristicSelector::seeded(seed), NoopListener)
    }
}

impl<S: MoveSelector, L: SessionListener> GameSession<S, L> {
    /// The human's mark.
    pub const HUMAN: Player = Player::X;
    /// The computer's mark.
    pub const COMPUTER: Player = Player::O;

    /// Creates a session with an empty board and 0 - 0 score.
    #[instrument(skip_all, fields(selector = selector.name()))]
    pub fn new(selector: S, listener: L) -> Self {
        info!("Creating game session");
        Self {
            state: GameState::new(),
            scores: ScoreTracker::new(),
            selector,
            listener,
        }
    }

    /// Current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Running scores.
    pub fn scores(&self) -> &ScoreTracker {
        &self.scores
    }

    /// The presentation listener.
    pub fn listener(&self) -> &L {
        &self.listener
    }

    /// Mutable access to the presentation listener.
    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    /// The computer's move selector.
    pub fn selector(&self) -> &S {
        &self.selector
    }

    /// True once the current game has ended.
    pub fn is_game_over(&self) -> bool {
        self.state.outcome().is_some()
    }

    /// Runs a full turn for the human choosing `cell`.
    ///
    /// The human's move is applied and checked; if the game continues the
    /// computer replies and the board is checked again. A rejected human
    /// move changes nothing. If the selector fails after the human move
    /// was applied, that move stands and the error is returned.
    #[instrument(skip(self))]
    pub fn cell_selected(&mut self, cell: usize) -> Result<TurnResult, GameError> {
        self.state.apply_move(cell, Self::HUMAN).inspect_err(|e| {
            warn!(cell, error = %e, "Human move rejected");
        })?;
        self.mark(cell, Self::HUMAN);

        if let Some(outcome) = self.state.outcome() {
            self.conclude(outcome);
            return Ok(TurnResult::from_outcome(Some(outcome), None));
        }

        let choice = self.selector.choose_square(&self.state, Self::COMPUTER)?;
        self.state.apply_move(choice.to_index(), Self::COMPUTER)?;
        self.mark(choice.to_index(), Self::COMPUTER);

        let outcome = self.state.outcome();
        if let Some(outcome) = outcome {
            self.conclude(outcome);
        }
        Ok(TurnResult::from_outcome(outcome, Some(choice)))
    }

    fn mark(&mut self, cell: usize, player: Player) {
        if let Some(position) = Position::from_index(cell) {
            debug!(%position, %player, "Cell marked");
            self.listener.on_cell_marked(position, player);
        }
    }

    fn conclude(&mut self, outcome: Outcome) {
        info!(%outcome, "Game finished");
        self.listener.on_buttons_disabled();
        if let Some(winner) = outcome.winner() {
            self.scores.record_win(winner);
            self.listener
                .on_score_changed(*self.scores.x_points(), *self.scores.o_points());
        }
        self.listener.on_game_over(outcome);
    }

    /// Clears the board for a new game. Scores are kept.
    #[instrument(skip(self))]
    pub fn restart_game(&mut self) {
        self.state.reset();
        self.listener.on_restart();
        info!(scores = %self.scores, "Game restarted");
    }
}
