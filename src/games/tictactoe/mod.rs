//! Tic-tac-toe with move history and time travel.

mod action;
mod game;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use action::{GameError, MoveOutcome, Rejection};
pub use game::{DEFAULT_DRAW_MESSAGE, MAX_MOVES, MoveEntry, Snapshot, Status, TimeTravelGame};
pub use position::Position;
pub use rules::{check_winner, WinningLine};
pub use types::{Board, Cell, Coords, Player};
