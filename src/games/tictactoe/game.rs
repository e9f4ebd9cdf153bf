//! Time-travel game engine for tic-tac-toe.
//!
//! [`TimeTravelGame`] keeps every board the game has passed through.
//! The step pointer picks which snapshot is displayed. Jumping moves the
//! pointer without touching history. Playing from a rewound step discards
//! the snapshots after it before recording the new one.

use serde::Serialize;
use tracing::{debug, info, instrument};

use super::action::{GameError, MoveOutcome, Rejection};
use super::rules::{check_winner, is_full, WinningLine};
use super::types::{Board, Cell, Coords, Player};
use super::Position;

/// Number of moves that fill the board.
pub const MAX_MOVES: usize = 9;

/// Default text shown when the board fills with no winner.
pub const DEFAULT_DRAW_MESSAGE: &str = "Draw";

/// The full board after a given move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub(crate) board: Board,
}

impl Snapshot {
    /// The board at this step.
    pub fn board(&self) -> &Board {
        &self.board
    }
}

/// Status of the displayed step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    /// A line is complete.
    Winner(Player),
    /// All nine moves played without a line.
    Draw,
    /// Play continues with this player.
    Next(Player),
}

/// One row of the move listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveEntry {
    /// Snapshot index this entry jumps to.
    pub step: usize,
    /// `"game start"` or `"move #n"`.
    pub label: String,
    /// Coordinates of the cell set by this move.
    pub coords: Option<Coords>,
    /// Whether this is the displayed step.
    pub current: bool,
}

/// Tic-tac-toe with full move history.
#[derive(Debug, Clone)]
pub struct TimeTravelGame {
    pub(crate) history: Vec<Snapshot>,
    pub(crate) step: usize,
    pub(crate) sort_ascending: bool,
}

impl TimeTravelGame {
    /// Creates a game holding a single empty snapshot.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Snapshot {
                board: Board::new(),
            }],
            step: 0,
            sort_ascending: true,
        }
    }

    /// Creates a game with the given initial move-list order.
    #[instrument]
    pub fn with_sort(sort_ascending: bool) -> Self {
        Self {
            sort_ascending,
            ..Self::new()
        }
    }

    /// All recorded snapshots, oldest first.
    pub fn history(&self) -> &[Snapshot] {
        &self.history
    }

    /// Number of recorded snapshots.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Always false: history starts with the empty board.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Index of the displayed snapshot.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Whether the move list is shown oldest first.
    pub fn sort_ascending(&self) -> bool {
        self.sort_ascending
    }

    /// The player to move at the displayed step; X on even steps.
    pub fn to_move(&self) -> Player {
        if self.step % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// The displayed board.
    pub fn current_board(&self) -> &Board {
        &self.history[self.step].board
    }

    /// Winning line on the displayed board, if any.
    pub fn winning_line(&self) -> Option<WinningLine> {
        check_winner(self.current_board())
    }

    /// Whether the displayed step is finished (won or drawn).
    pub fn is_over(&self) -> bool {
        !matches!(self.status(), Status::Next(_))
    }

    /// Places the next player's mark at `position`.
    ///
    /// Ignored when the displayed board is already won or the cell is
    /// taken. Otherwise any snapshots after the displayed step are
    /// dropped and the new board becomes the latest step.
    #[instrument(skip(self), fields(step = self.step, player = %self.to_move()))]
    pub fn apply_move(&mut self, position: Position, coords: Coords) -> MoveOutcome {
        let current = self.current_board();

        if check_winner(current).is_some() {
            debug!("Move rejected: game over");
            return MoveOutcome::Rejected(Rejection::GameOver);
        }
        if !current.is_empty(position) {
            debug!("Move rejected: cell occupied");
            return MoveOutcome::Rejected(Rejection::Occupied(position));
        }

        let player = self.to_move();
        let cells = *current.cells();
        let mut board = Board::from_cells(cells.map(Cell::settled));
        board.set(position, Cell::marked(player, coords));

        let discarded = self.history.len() - (self.step + 1);
        self.history.truncate(self.step + 1);
        self.history.push(Snapshot { board });
        self.step = self.history.len() - 1;

        info!(step = self.step, discarded, "Move applied");
        self.debug_check();

        MoveOutcome::Applied {
            player,
            position,
            step: self.step,
        }
    }

    /// Displays the snapshot at `step`. History is left as it is.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), GameError> {
        if step >= self.history.len() {
            return Err(GameError::StepOutOfRange {
                step,
                len: self.history.len(),
            });
        }
        self.step = step;
        debug!(to_move = %self.to_move(), "Jumped");
        self.debug_check();
        Ok(())
    }

    /// Flips the move-list order.
    #[instrument(skip(self))]
    pub fn toggle_sort(&mut self) {
        self.sort_ascending = !self.sort_ascending;
        debug!(ascending = self.sort_ascending, "Sort toggled");
    }

    /// Status of the displayed step.
    pub fn status(&self) -> Status {
        if let Some(line) = self.winning_line() {
            Status::Winner(line.player())
        } else if self.step == MAX_MOVES {
            debug_assert!(is_full(self.current_board()));
            Status::Draw
        } else {
            Status::Next(self.to_move())
        }
    }

    /// Status line for the displayed step.
    pub fn status_text(&self, draw_message: &str) -> String {
        match self.status() {
            Status::Winner(player) => format!("Winner: {}", player),
            Status::Draw => draw_message.to_string(),
            Status::Next(player) => format!("Next player: {}", player),
        }
    }

    /// One entry per snapshot, in the current sort order.
    pub fn move_list(&self) -> Vec<MoveEntry> {
        let entries = self.history.iter().enumerate().map(|(step, snapshot)| MoveEntry {
            step,
            label: if step == 0 {
                "game start".to_string()
            } else {
                format!("move #{}", step)
            },
            coords: snapshot.board.clicked().and_then(|(_, cell)| cell.coords()),
            current: step == self.step,
        });

        if self.sort_ascending {
            entries.collect()
        } else {
            entries.rev().collect()
        }
    }

    fn debug_check(&self) {
        #[cfg(debug_assertions)]
        {
            use super::invariants::{InvariantSet, TimeTravelInvariants};
            if let Err(violations) = TimeTravelInvariants::check_all(self) {
                tracing::error!(?violations, "Invariant violated");
                debug_assert!(violations.is_empty(), "invariants violated: {violations:?}");
            }
        }
    }
}

impl Default for TimeTravelGame {
    fn default() -> Self {
        Self::new()
    }
}
