//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Square};
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning lines: rows, columns, diagonals.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// A completed line and the player holding it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Line {
    /// Cell indices of the line.
    pub cells: [usize; 3],
    /// Player occupying all three cells.
    pub player: Player,
}

/// Returns the first line fully held by one player, if any.
#[instrument]
pub fn winning_line(board: &Board) -> Option<Line> {
    LINES.iter().find_map(|&cells| {
        let [a, b, c] = cells;
        match board.get(a)? {
            Square::Occupied(player)
                if board.get(b) == Some(Square::Occupied(player))
                    && board.get(c) == Some(Square::Occupied(player)) =>
            {
                Some(Line::new(cells, player))
            }
            _ => None,
        }
    })
}

/// True if any of the eight lines is held by a single player.
pub fn has_winning_line(board: &Board) -> bool {
    winning_line(board).is_some()
}
