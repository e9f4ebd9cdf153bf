//! Application state and logic.

use std::sync::mpsc::{self, Receiver};

use crossterm::event::KeyCode;
use derive_getters::Getters;
use tracing::{debug, instrument, warn};

use super::input::{Command, Focus, command_for, move_cursor};
use crate::controller::{Controller, UiEvent};
use crate::games::tictactoe::Position;
use crate::view::GameView;

/// Main application state.
///
/// The app subscribes to the controller and redraws from the latest
/// [`GameView`] it was sent.
#[derive(Debug, Getters)]
pub struct App {
    #[getter(skip)]
    controller: Controller,
    #[getter(skip)]
    updates: Receiver<GameView>,
    view: GameView,
    cursor: Position,
    focus: Focus,
    /// Step of the highlighted move-list entry.
    selected_step: usize,
    /// Last boundary error, shown under the status line.
    notice: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates an app driving `controller`.
    #[instrument(skip(controller))]
    pub fn new(mut controller: Controller) -> Self {
        let (tx, updates) = mpsc::channel();
        controller.subscribe(tx);
        let view = controller.view();
        Self {
            selected_step: *view.step(),
            controller,
            updates,
            view,
            cursor: Position::Center,
            focus: Focus::default(),
            notice: None,
            should_quit: false,
        }
    }

    /// Index of the highlighted entry in the displayed move list.
    pub fn selected_index(&self) -> usize {
        self.view
            .moves()
            .iter()
            .position(|entry| entry.step == self.selected_step)
            .unwrap_or(0)
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        let Some(command) = command_for(key, self.focus) else {
            return;
        };
        debug!(?command, "Key mapped");

        match command {
            Command::Quit => self.should_quit = true,
            Command::SwitchFocus => self.focus = self.focus.toggle(),
            Command::Cursor(key) => self.cursor = move_cursor(self.cursor, key),
            Command::Select(delta) => self.select(delta),
            Command::ActivateCursor => self.activate(self.cursor),
            Command::ActivateCell(position) => {
                self.cursor = position;
                self.activate(position);
            }
            Command::JumpToSelected => self.dispatch(UiEvent::StepSelected(self.selected_step)),
            Command::ToggleSort => self.dispatch(UiEvent::SortToggled),
        }
    }

    fn activate(&mut self, position: Position) {
        let coords = position.coords();
        self.dispatch(UiEvent::CellActivated {
            index: position.to_index(),
            x: coords.x,
            y: coords.y,
        });
    }

    fn select(&mut self, delta: isize) {
        let moves = self.view.moves();
        let last = moves.len().saturating_sub(1);
        let index = self.selected_index().saturating_add_signed(delta).min(last);
        if let Some(entry) = moves.get(index) {
            self.selected_step = entry.step;
        }
    }

    fn dispatch(&mut self, event: UiEvent) {
        match self.controller.dispatch(event) {
            Ok(_) => self.notice = None,
            Err(e) => {
                warn!(error = %e, "Event rejected");
                self.notice = Some(e.to_string());
            }
        }
        self.drain_updates();
    }

    fn drain_updates(&mut self) {
        let latest = self.updates.try_iter().last();
        if let Some(view) = latest {
            // A new move shrinks or grows history; keep the selection valid.
            if view.moves().iter().all(|entry| entry.step != self.selected_step) {
                self.selected_step = *view.step();
            }
            if view.step() != self.view.step() {
                self.selected_step = *view.step();
            }
            self.view = view;
        }
    }
}
