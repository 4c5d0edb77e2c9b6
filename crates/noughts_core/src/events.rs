//! Notifications from a session to its presentation layer.
//!
//! A front-end implements [`SessionListener`] and overrides the callbacks
//! it cares about. The session calls them in this order for a move that
//! ends the game:
//!
//! 1. `on_cell_marked`
//! 2. `on_buttons_disabled`
//! 3. `on_score_changed` (wins only)
//! 4. `on_game_over`

use serde::{Deserialize, Serialize};

use crate::position::Position;
use crate::types::{Outcome, Player};

/// Observer for session events. Every method defaults to doing nothing.
pub trait SessionListener {
    /// A cell was claimed and should show the player's mark.
    fn on_cell_marked(&mut self, _position: Position, _player: Player) {}

    /// The game ended.
    fn on_game_over(&mut self, _outcome: Outcome) {}

    /// A win changed the scoreboard.
    fn on_score_changed(&mut self, _x_score: u32, _o_score: u32) {}

    /// No further cells may be selected until restart.
    fn on_buttons_disabled(&mut self) {}

    /// The board was cleared for a new game.
    fn on_restart(&mut self) {}
}

/// A single notification, as recorded by [`EventLog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// See [`SessionListener::on_cell_marked`].
    CellMarked {
        /// Claimed cell.
        position: Position,
        /// Claimant.
        player: Player,
    },
    /// See [`SessionListener::on_game_over`].
    GameOver(Outcome),
    /// See [`SessionListener::on_score_changed`].
    ScoreChanged {
        /// X's points.
        x: u32,
        /// O's points.
        o: u32,
    },
    /// See [`SessionListener::on_buttons_disabled`].
    ButtonsDisabled,
    /// See [`SessionListener::on_restart`].
    Restarted,
}

/// Listener that keeps every event it receives.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Events in arrival order.
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Removes and returns everything recorded so far.
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

impl SessionListener for EventLog {
    fn on_cell_marked(&mut self, position: Position, player: Player) {
        self.events.push(GameEvent::CellMarked { position, player });
    }

    fn on_game_over(&mut self, outcome: Outcome) {
        self.events.push(GameEvent::GameOver(outcome));
    }

    fn on_score_changed(&mut self, x_score: u32, o_score: u32) {
        self.events.push(GameEvent::ScoreChanged {
            x: x_score,
            o: o_score,
        });
    }

    fn on_buttons_disabled(&mut self) {
        self.events.push(GameEvent::ButtonsDisabled);
    }

    fn on_restart(&mut self) {
        self.events.push(GameEvent::Restarted);
    }
}

/// Listener that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopListener;

impl SessionListener for NoopListener {}
