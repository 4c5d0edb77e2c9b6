//! Errors raised by game operations.
//!
//! Every error is recoverable: the rejected operation leaves the game
//! untouched and the caller may retry with a valid action.

use derive_more::{Display, Error};

use crate::position::Position;
use crate::types::Outcome;

/// Why a move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum MoveRejection {
    /// The index does not address a cell.
    #[display("cell {} is out of range (0-8)", _0)]
    OutOfRange(usize),

    /// The cell already belongs to a player.
    #[display("square {} is already occupied", _0)]
    Occupied(Position),
}

/// Error that can occur when driving a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// The target cell cannot be played.
    #[display("Invalid move: {}", _0)]
    InvalidMove(#[error(not(source))] MoveRejection),

    /// A move was attempted after the game ended.
    #[display("Game is already over ({})", _0)]
    IllegalStateTransition(#[error(not(source))] Outcome),

    /// The computer was asked to move on a full board.
    #[display("No free cells remain")]
    NoFreeCells,
}

impl GameError {
    /// Returns true for rejected cell choices.
    pub fn is_invalid_move(&self) -> bool {
        matches!(self, GameError::InvalidMove(_))
    }
}
