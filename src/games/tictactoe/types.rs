//! Core domain types for tic-tac-toe.

use derive_new::new;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use super::position::Position;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

/// Column and row numbers reported alongside a move.
///
/// These are whatever the presentation layer attached to the click; the
/// terminal UI uses 1-based `(col + 1, row + 1)`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new, derive_more::Display,
)]
#[display("{x} {y}")]
pub struct Coords {
    /// Column number.
    pub x: u8,
    /// Row number.
    pub y: u8,
}

/// A single square on the board, as stored in a history snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Cell {
    sign: Option<Player>,
    coords: Option<Coords>,
    clicked: bool,
}

impl Cell {
    /// An unoccupied cell.
    pub const EMPTY: Cell = Cell {
        sign: None,
        coords: None,
        clicked: false,
    };

    /// Creates a cell freshly marked by `player` in the latest move.
    pub fn marked(player: Player, coords: Coords) -> Self {
        Self {
            sign: Some(player),
            coords: Some(coords),
            clicked: true,
        }
    }

    /// The mark in this cell, if any.
    pub fn sign(&self) -> Option<Player> {
        self.sign
    }

    /// Coordinates recorded when the cell was marked.
    pub fn coords(&self) -> Option<Coords> {
        self.coords
    }

    /// Whether this cell was set by the move that produced its snapshot.
    pub fn clicked(&self) -> bool {
        self.clicked
    }

    /// Checks if the cell is unoccupied.
    pub fn is_empty(&self) -> bool {
        self.sign.is_none()
    }

    /// Returns a copy with the `clicked` flag cleared.
    pub(crate) fn settled(self) -> Self {
        Self {
            clicked: false,
            ..self
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::EMPTY; 9],
        }
    }

    /// Builds a board from raw cells.
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Sets the cell at the given position.
    pub fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.to_index()] = cell;
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// The cell placed by the move that produced this board, with its position.
    pub fn clicked(&self) -> Option<(Position, Cell)> {
        Position::iter()
            .map(|pos| (pos, self.get(pos)))
            .find(|(_, cell)| cell.clicked())
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.cells[pos].sign() {
                    None => (pos + 1).to_string(),
                    Some(player) => player.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
