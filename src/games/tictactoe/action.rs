//! Move outcomes and boundary errors for tic-tac-toe.
//!
//! An illegal move is a normal outcome, not an error: the game answers
//! with [`MoveOutcome::Rejected`] and leaves its state untouched.
//! [`GameError`] is reserved for requests that name something that does
//! not exist, such as a tenth cell or a step beyond the history.

use super::{Player, Position};
use serde::Serialize;

/// Why a move request was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display)]
pub enum Rejection {
    /// The displayed board already has a winning line.
    #[display("Game is already over")]
    GameOver,

    /// The target cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    Occupied(Position),
}

/// Result of a move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MoveOutcome {
    /// The move was recorded as a new snapshot.
    Applied {
        /// Who moved.
        player: Player,
        /// Where the mark went.
        position: Position,
        /// Index of the new snapshot.
        step: usize,
    },
    /// The move was ignored.
    Rejected(Rejection),
}

impl MoveOutcome {
    /// Whether the move changed the game.
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveOutcome::Applied { .. })
    }
}

/// Error for requests outside the board or the recorded history.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// Cell index is not in 0-8.
    #[display("Cell index {} is out of range (must be 0-8)", _0)]
    IndexOutOfRange(#[error(not(source))] usize),

    /// Step is not in the recorded history.
    #[display("Step {step} is out of range (history has {len} snapshots)")]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// Number of snapshots in history.
        len: usize,
    },
}
