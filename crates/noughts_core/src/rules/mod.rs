//! Game rules for tic-tac-toe.
//!
//! Pure functions over the board and per-player marks, kept apart from
//! state storage so the selector can evaluate hypothetical positions.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner, has_line, winning_line};
