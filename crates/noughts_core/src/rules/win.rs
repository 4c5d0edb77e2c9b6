//! Win detection logic for tic-tac-toe.

use tracing::instrument;

use crate::marks::PlayerMarks;
use crate::position::Position;
use crate::types::Player;

/// The 8 winning lines, in evaluation order.
///
/// Order matters only for which line short-circuits first on malformed
/// boards; it is kept stable so results are reproducible.
pub const LINES: [[Position; 3]; 8] = [
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first line fully owned by the given marks.
pub fn winning_line(marks: &PlayerMarks) -> Option<[Position; 3]> {
    LINES
        .iter()
        .copied()
        .find(|line| line.iter().all(|pos| marks.owns(*pos)))
}

/// Checks whether the marks own any complete line.
pub fn has_line(marks: &PlayerMarks) -> bool {
    winning_line(marks).is_some()
}

/// Checks if there is a winner.
///
/// X is evaluated before O.
#[instrument(skip_all)]
pub fn check_winner(x: &PlayerMarks, o: &PlayerMarks) -> Option<Player> {
    if has_line(x) {
        Some(Player::X)
    } else if has_line(o) {
        Some(Player::O)
    } else {
        None
    }
}
