//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). Rules are kept apart
//! from history storage so any snapshot can be evaluated on its own.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{check_winner, WinningLine, LINES};
