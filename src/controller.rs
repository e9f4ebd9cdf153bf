//! Event routing between the presentation layer and the game.
//!
//! The controller owns the only [`TimeTravelGame`]. Presentation code
//! sends it [`UiEvent`]s and listens for the "state changed"
//! notification, then redraws from the [`GameView`] it carries.

use std::sync::mpsc::Sender;

use tracing::{debug, instrument, warn};

use crate::games::tictactoe::{Coords, GameError, Position, TimeTravelGame, DEFAULT_DRAW_MESSAGE};
use crate::view::GameView;

/// Interactions the presentation layer reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    /// A board cell was activated.
    CellActivated {
        /// Board index (0-8).
        index: usize,
        /// Column number reported with the click.
        x: u8,
        /// Row number reported with the click.
        y: u8,
    },
    /// A history entry was selected.
    StepSelected(usize),
    /// The sort button was pressed.
    SortToggled,
}

/// Receives a notification after every state change.
pub trait StateObserver {
    /// Called with the new projection once the change is complete.
    fn state_changed(&mut self, view: &GameView);
}

impl StateObserver for Sender<GameView> {
    fn state_changed(&mut self, view: &GameView) {
        if self.send(view.clone()).is_err() {
            warn!("State observer channel closed");
        }
    }
}

/// Owns the game and routes events to it.
pub struct Controller {
    game: TimeTravelGame,
    draw_message: String,
    observers: Vec<Box<dyn StateObserver>>,
}

impl std::fmt::Debug for Controller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Controller")
            .field("game", &self.game)
            .field("draw_message", &self.draw_message)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Controller {
    /// Creates a controller around `game`.
    #[instrument(skip(game))]
    pub fn new(game: TimeTravelGame) -> Self {
        Self {
            game,
            draw_message: DEFAULT_DRAW_MESSAGE.to_string(),
            observers: Vec::new(),
        }
    }

    /// Sets the status text shown for a drawn game.
    pub fn with_draw_message(mut self, message: impl Into<String>) -> Self {
        self.draw_message = message.into();
        self
    }

    /// Registers an observer for state-changed notifications.
    pub fn subscribe(&mut self, observer: impl StateObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// The game being controlled.
    pub fn game(&self) -> &TimeTravelGame {
        &self.game
    }

    /// Current projection.
    pub fn view(&self) -> GameView {
        GameView::project(&self.game, &self.draw_message)
    }

    /// Routes one event to the game.
    ///
    /// Returns whether the state changed. Observers are notified only
    /// when it did; rejected moves and errors leave them silent.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, event: UiEvent) -> Result<bool, GameError> {
        let changed = match event {
            UiEvent::CellActivated { index, x, y } => {
                let position =
                    Position::from_index(index).ok_or(GameError::IndexOutOfRange(index))?;
                self.game.apply_move(position, Coords::new(x, y)).is_applied()
            }
            UiEvent::StepSelected(step) => {
                let previous = self.game.step();
                self.game.jump_to(step)?;
                self.game.step() != previous
            }
            UiEvent::SortToggled => {
                self.game.toggle_sort();
                true
            }
        };

        if changed {
            self.notify();
        }
        Ok(changed)
    }

    /// Plays `moves` as cell clicks, then optionally jumps to `jump`.
    ///
    /// Each index is reported with its 1-based board coordinates.
    /// Rejected moves are logged and skipped; an out-of-range index or
    /// jump target stops the replay with an error.
    #[instrument(skip(self, moves), fields(moves = moves.len()))]
    pub fn replay(&mut self, moves: &[usize], jump: Option<usize>) -> Result<GameView, GameError> {
        for &index in moves {
            let coords = Position::from_index(index)
                .map(Position::coords)
                .ok_or(GameError::IndexOutOfRange(index))?;
            let changed = self.dispatch(UiEvent::CellActivated {
                index,
                x: coords.x,
                y: coords.y,
            })?;
            if !changed {
                warn!(index, "Move skipped");
            }
        }

        if let Some(step) = jump {
            self.dispatch(UiEvent::StepSelected(step))?;
        }

        Ok(self.view())
    }

    fn notify(&mut self) {
        let view = self.view();
        debug!(observers = self.observers.len(), step = view.step(), "State changed");
        for observer in &mut self.observers {
            observer.state_changed(&view);
        }
    }
}
