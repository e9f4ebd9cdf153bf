//! Terminal UI for the time-travel game.

mod app;
mod input;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{error, info, instrument};

use crate::controller::Controller;

pub use app::App;
pub use input::{Command, Focus, command_for, move_cursor};
pub use ui::draw;

/// Runs the terminal UI until the player quits.
///
/// The terminal is restored even if setup or the event loop fails.
#[instrument(skip(controller))]
pub fn run_tui(controller: Controller) -> Result<()> {
    info!("Starting terminal UI");

    enable_raw_mode()?;
    let mut terminal = restore_on_err(setup_terminal(), || {
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
    })?;

    let res = run_app(&mut terminal, App::new(controller));

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }
    info!("Terminal UI closed");
    res
}

/// Runs `restore` if `result` is an error, then passes it through.
fn restore_on_err<T>(result: Result<T>, restore: impl FnOnce()) -> Result<T> {
    if let Err(err) = &result {
        error!(error = ?err, "Terminal setup failed");
        restore();
    }
    result
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| draw(f, &app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key.code);
            if *app.should_quit() {
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_runs_on_setup_error() {
        let mut restored = false;
        let result: Result<()> = restore_on_err(Err(anyhow::anyhow!("no tty")), || restored = true);
        assert!(result.is_err());
        assert!(restored);
    }

    #[test]
    fn test_restore_skipped_on_success() {
        let mut restored = false;
        let result = restore_on_err(Ok(7), || restored = true);
        assert_eq!(result.unwrap(), 7);
        assert!(!restored);
    }
}
