//! Game rules for tic-tac-toe.
//!
//! Pure functions over the board and context. The machine's guards are
//! thin wrappers around these, so they can be tested without a machine.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, Line, has_winning_line, winning_line};
