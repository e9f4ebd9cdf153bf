//! Win detection logic for tic-tac-toe.

use serde::Serialize;
use tracing::instrument;

use super::super::{Board, Cell, Player, Position};

/// The eight winning lines, checked in this order.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Three cells in a row holding the same mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WinningLine {
    positions: [Position; 3],
    cells: [Cell; 3],
    player: Player,
}

impl WinningLine {
    /// Positions of the line, in the order they appear in [`LINES`].
    pub fn positions(&self) -> [Position; 3] {
        self.positions
    }

    /// The three cells as they stand on the evaluated board.
    pub fn cells(&self) -> [Cell; 3] {
        self.cells
    }

    /// The player owning the line.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Whether `pos` is part of the line.
    pub fn contains(&self, pos: Position) -> bool {
        self.positions.contains(&pos)
    }
}

/// Checks if there is a winner on the board.
///
/// Returns the first complete line in [`LINES`] order, or `None`.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<WinningLine> {
    LINES.into_iter().find_map(|positions| {
        let cells = positions.map(|pos| board.get(pos));
        match cells.map(|c| c.sign()) {
            [Some(a), Some(b), Some(c)] if a == b && b == c => Some(WinningLine {
                positions,
                cells,
                player: a,
            }),
            _ => None,
        }
    })
}
