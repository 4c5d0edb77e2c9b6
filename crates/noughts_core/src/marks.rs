//! Per-player occupancy arrays.
//!
//! Each player keeps its own 9-entry view of the board. Claiming a cell
//! marks it `Owned` for the claimant and `Blocked` for the opponent, so
//! either array alone tells which cells are still open.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::position::Position;
use crate::rules::win::has_line;

/// Occupancy of one cell from one player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mark {
    /// Nobody has claimed the cell.
    #[default]
    Unmarked,
    /// This player holds the cell.
    Owned,
    /// The opponent holds the cell.
    Blocked,
}

impl Mark {
    /// Numeric code (0 unmarked, 1 owned, 2 blocked).
    pub fn code(self) -> u8 {
        match self {
            Mark::Unmarked => 0,
            Mark::Owned => 1,
            Mark::Blocked => 2,
        }
    }
}

/// One player's marks over the 9 cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlayerMarks {
    cells: [Mark; 9],
}

impl PlayerMarks {
    /// Creates an all-unmarked array.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds marks owning the given positions, everything else unmarked.
    pub fn owning(positions: &[Position]) -> Self {
        let mut marks = Self::new();
        for pos in positions {
            marks.set(*pos, Mark::Owned);
        }
        marks
    }

    /// Mark at the given position.
    pub fn get(&self, pos: Position) -> Mark {
        self.cells[pos.to_index()]
    }

    pub(crate) fn set(&mut self, pos: Position, mark: Mark) {
        self.cells[pos.to_index()] = mark;
    }

    /// Returns true if this player owns the cell.
    pub fn owns(&self, pos: Position) -> bool {
        self.get(pos) == Mark::Owned
    }

    /// All marks in index order.
    pub fn cells(&self) -> &[Mark; 9] {
        &self.cells
    }

    /// Number of owned cells.
    pub fn owned_count(&self) -> usize {
        self.cells.iter().filter(|m| **m == Mark::Owned).count()
    }

    /// Returns true if the owned cells complete any line.
    pub fn has_winning_line(&self) -> bool {
        has_line(self)
    }

    /// Finds the first unmarked cell (scanning 0 to 8) that would complete
    /// a line if this player took it.
    ///
    /// Only looks one move ahead: a cell that sets up two threats at once
    /// is not reported.
    #[instrument(skip(self))]
    pub fn find_winning_move(&self) -> Option<Position> {
        let mut trial = *self;
        for pos in Position::ALL {
            if trial.get(pos) != Mark::Unmarked {
                continue;
            }
            trial.set(pos, Mark::Owned);
            if trial.has_winning_line() {
                return Some(pos);
            }
            trial.set(pos, Mark::Unmarked);
        }
        None
    }

    pub(crate) fn clear(&mut self) {
        self.cells = [Mark::Unmarked; 9];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_marks_have_no_winning_move() {
        assert_eq!(PlayerMarks::new().find_winning_move(), None);
    }

    #[test]
    fn test_single_mark_has_no_winning_move() {
        for pos in Position::ALL {
            assert_eq!(PlayerMarks::owning(&[pos]).find_winning_move(), None);
        }
    }

    #[test]
    fn test_finds_completion_of_row() {
        let marks = PlayerMarks::owning(&[Position::TopLeft, Position::TopCenter]);
        assert_eq!(marks.find_winning_move(), Some(Position::TopRight));
    }

    #[test]
    fn test_blocked_cell_is_not_a_candidate() {
        let mut marks = PlayerMarks::owning(&[Position::TopLeft, Position::TopCenter]);
        marks.set(Position::TopRight, Mark::Blocked);
        assert_eq!(marks.find_winning_move(), None);
    }

    #[test]
    fn test_lowest_index_wins_when_several_complete() {
        // 1, 4 and 5 all complete a line; 1 comes first.
        let marks = PlayerMarks::owning(&[Position::TopLeft, Position::TopRight, Position::BottomRight]);
        assert_eq!(marks.find_winning_move(), Some(Position::TopCenter));
    }

    #[test]
    fn test_search_does_not_mutate() {
        let marks = PlayerMarks::owning(&[Position::Center, Position::BottomLeft]);
        let before = marks;
        let _ = marks.find_winning_move();
        assert_eq!(marks, before);
    }

    #[test]
    fn test_mark_codes() {
        assert_eq!(Mark::Unmarked.code(), 0);
        assert_eq!(Mark::Owned.code(), 1);
        assert_eq!(Mark::Blocked.code(), 2);
    }
}
