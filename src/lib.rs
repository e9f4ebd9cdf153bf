//! Strictly Time Travel - tic-tac-toe with move history
//!
//! Every board the game passes through is kept as a snapshot. Players can
//! jump back to any earlier step; playing from there discards the later
//! snapshots and continues from the rewound board.
//!
//! # Architecture
//!
//! - **Games**: the [`TimeTravelGame`] engine, win rules, and invariants
//! - **Controller**: routes [`UiEvent`]s to the game and notifies observers
//! - **View**: [`GameView`], the read-only projection used for rendering
//! - **TUI**: a ratatui front end driven by the controller
//! - **Config**: TOML [`Settings`]
//!
//! # Example
//!
//! ```
//! use strictly_timetravel::{Controller, TimeTravelGame, UiEvent};
//!
//! let mut controller = Controller::new(TimeTravelGame::new());
//! controller.dispatch(UiEvent::CellActivated { index: 4, x: 2, y: 2 }).unwrap();
//! controller.dispatch(UiEvent::StepSelected(0)).unwrap();
//! assert_eq!(controller.view().status_text(), "Next player: X");
//! assert_eq!(controller.game().len(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod controller;
mod games;
mod view;

pub mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, DisplaySettings, LoggingSettings, Settings};

// Crate-level exports - Controller
pub use controller::{Controller, StateObserver, UiEvent};

// Crate-level exports - View
pub use view::GameView;

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, Cell, Coords, DEFAULT_DRAW_MESSAGE, GameError, MAX_MOVES, MoveEntry, MoveOutcome,
    Player, Position, Rejection, Snapshot, Status, TimeTravelGame, WinningLine, check_winner,
    invariants, rules,
};
