//! Draw detection logic for tic-tac-toe.

use tracing::instrument;

use super::win::check_winner;
use crate::marks::PlayerMarks;
use crate::types::{Board, Square};

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A full board with no winner is a draw.
#[instrument(skip_all)]
pub fn is_draw(board: &Board, x: &PlayerMarks, o: &PlayerMarks) -> bool {
    is_full(board) && check_winner(x, o).is_none()
}
