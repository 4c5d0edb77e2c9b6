//! Tic-tac-toe against a one-ply heuristic computer opponent.
//!
//! # Architecture
//!
//! - **State**: board, per-player marks, move counter, win/draw detection
//! - **Selector**: the computer's fixed decision ladder
//! - **Score**: win counters kept across restarts
//! - **Session**: runs a human turn plus the computer's reply and notifies
//!   a [`SessionListener`]
//!
//! # Example
//!
//! ```
//! use noughts_core::{GameSession, Position};
//!
//! let mut session = GameSession::seeded(7);
//! let turn = session.cell_selected(4).unwrap();
//! assert!(matches!(
//!     turn.computer_move,
//!     Some(Position::TopLeft | Position::TopRight | Position::BottomLeft | Position::BottomRight)
//! ));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod events;
mod marks;
mod position;
mod score;
mod selector;
mod session;
mod state;
mod types;

pub mod rules;

pub use error::{GameError, MoveRejection};
pub use events::{EventLog, GameEvent, NoopListener, SessionListener};
pub use marks::{Mark, PlayerMarks};
pub use position::Position;
pub use score::ScoreTracker;
pub use selector::{HeuristicSelector, MoveSelector, Reason, ScriptedSelector};
pub use session::{GameSession, TurnResult};
pub use state::{GameState, Move};
pub use types::{Board, GameStatus, Outcome, Player, Square};
