//! Board state machine: marks, move counter, and outcome detection.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::error::{GameError, MoveRejection};
use crate::marks::{Mark, PlayerMarks};
use crate::position::Position;
use crate::rules;
use crate::types::{Board, GameStatus, Outcome, Player, Square};

/// A recorded move: who took which cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The claimed cell.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Complete state of one game.
///
/// Moves go through [`GameState::apply_move`], which validates the cell
/// and keeps the board, both mark arrays, the move counter and the
/// status consistent with each other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Marks as seen by X.
    x_marks: PlayerMarks,
    /// Marks as seen by O.
    o_marks: PlayerMarks,
    /// Moves made so far (both players).
    move_count: u32,
    /// Whether moves are still accepted.
    status: GameStatus,
    /// Moves in play order.
    history: Vec<Move>,
}

impl GameState {
    /// Creates a new game with an empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            x_marks: PlayerMarks::new(),
            o_marks: PlayerMarks::new(),
            move_count: 0,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Marks for the given player.
    pub fn marks(&self, player: Player) -> &PlayerMarks {
        match player {
            Player::X => &self.x_marks,
            Player::O => &self.o_marks,
        }
    }

    /// Cells nobody has claimed, in index order.
    pub fn available(&self) -> Vec<Position> {
        Position::valid_moves(&self.board)
    }

    /// Returns true while any cell is free.
    pub fn has_free_cells(&self) -> bool {
        !rules::is_full(&self.board)
    }

    /// Claims `cell` for `player`.
    ///
    /// On success the claimant's mark becomes `Owned`, the opponent's
    /// `Blocked`, and the move counter advances. The status is then
    /// re-evaluated: a completed line or a full board ends the game.
    /// On failure nothing changes.
    #[instrument(skip(self), fields(move_count = self.move_count))]
    pub fn apply_move(&mut self, cell: usize, player: Player) -> Result<(), GameError> {
        if let GameStatus::GameOver(outcome) = self.status {
            warn!(cell, %player, %outcome, "Move attempted after game over");
            return Err(GameError::IllegalStateTransition(outcome));
        }

        let position = Position::from_index(cell).ok_or_else(|| {
            warn!(cell, "Move out of range");
            GameError::InvalidMove(MoveRejection::OutOfRange(cell))
        })?;

        if !self.board.is_empty(position) {
            warn!(%position, "Square already occupied");
            return Err(GameError::InvalidMove(MoveRejection::Occupied(position)));
        }

        let (own, opposing) = match player {
            Player::X => (&mut self.x_marks, &mut self.o_marks),
            Player::O => (&mut self.o_marks, &mut self.x_marks),
        };
        own.set(position, Mark::Owned);
        opposing.set(position, Mark::Blocked);
        self.board.set(position, Square::Occupied(player));
        self.history.push(Move::new(player, position));
        self.move_count += 1;
        debug!(%position, %player, move_count = self.move_count, "Move applied");

        if let Some(outcome) = self.evaluate() {
            info!(%outcome, "Game over");
            self.status = GameStatus::GameOver(outcome);
        }

        Ok(())
    }

    /// Returns the player with three in a row, X checked first.
    pub fn check_winner(&self) -> Option<Player> {
        rules::check_winner(&self.x_marks, &self.o_marks)
    }

    /// True when no cell is free and nobody has won.
    pub fn is_draw(&self) -> bool {
        rules::is_draw(&self.board, &self.x_marks, &self.o_marks)
    }

    /// The cell that would immediately complete a line for `player`.
    pub fn find_winning_move(&self, player: Player) -> Option<Position> {
        self.marks(player).find_winning_move()
    }

    /// Outcome if the game has ended.
    pub fn outcome(&self) -> Option<Outcome> {
        self.status.outcome()
    }

    fn evaluate(&self) -> Option<Outcome> {
        if let Some(winner) = self.check_winner() {
            Some(Outcome::Winner(winner))
        } else if self.is_draw() {
            Some(Outcome::Draw)
        } else {
            None
        }
    }

    /// Clears the board and counter, returning to `InProgress`.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.x_marks.clear();
        self.o_marks.clear();
        self.move_count = 0;
        self.status = GameStatus::InProgress;
        self.history.clear();
        debug!("Board cleared");
    }

    /// Replays moves onto a fresh state.
    #[instrument(skip(moves), fields(count = moves.len()))]
    pub fn replay(moves: &[Move]) -> Result<Self, GameError> {
        let mut state = Self::new();
        for mv in moves {
            state.apply_move(mv.position.to_index(), mv.player)?;
        }
        Ok(state)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
