//! Keyboard handling: cursor movement and key-to-command mapping.

use crate::games::tictactoe::Position;
use crossterm::event::KeyCode;

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Up/Down move the move-list selection.
    Moves,
}

impl Focus {
    /// Switches to the other pane.
    pub fn toggle(self) -> Self {
        match self {
            Focus::Board => Focus::Moves,
            Focus::Moves => Focus::Board,
        }
    }
}

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the board cursor.
    Cursor(KeyCode),
    /// Move the list selection by one row (negative is up).
    Select(isize),
    /// Activate the board cell under the cursor.
    ActivateCursor,
    /// Activate a cell directly.
    ActivateCell(Position),
    /// Jump to the selected move-list entry.
    JumpToSelected,
    /// Switch focus between board and list.
    SwitchFocus,
    /// Flip the move-list order.
    ToggleSort,
    /// Leave the app.
    Quit,
}

/// Maps a key to a command given the current focus.
pub fn command_for(key: KeyCode, focus: Focus) -> Option<Command> {
    match (key, focus) {
        (KeyCode::Char('q') | KeyCode::Esc, _) => Some(Command::Quit),
        (KeyCode::Tab, _) => Some(Command::SwitchFocus),
        (KeyCode::Char('s'), _) => Some(Command::ToggleSort),
        (KeyCode::Char(c @ '1'..='9'), _) => c
            .to_digit(10)
            .and_then(|d| Position::from_index(d as usize - 1))
            .map(Command::ActivateCell),
        (KeyCode::Up, Focus::Moves) => Some(Command::Select(-1)),
        (KeyCode::Down, Focus::Moves) => Some(Command::Select(1)),
        (KeyCode::Enter, Focus::Moves) => Some(Command::JumpToSelected),
        (KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right, Focus::Board) => {
            Some(Command::Cursor(key))
        }
        (KeyCode::Enter | KeyCode::Char(' '), Focus::Board) => Some(Command::ActivateCursor),
        _ => None,
    }
}

/// Moves cursor based on arrow keys, stopping at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_index(row * 3 + col).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_moves_and_clamps() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Right), Position::MiddleRight);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Right), Position::BottomRight);
        assert_eq!(move_cursor(Position::Center, KeyCode::Char('x')), Position::Center);
    }

    #[test]
    fn test_digits_activate_cells() {
        assert_eq!(
            command_for(KeyCode::Char('1'), Focus::Board),
            Some(Command::ActivateCell(Position::TopLeft))
        );
        assert_eq!(
            command_for(KeyCode::Char('9'), Focus::Moves),
            Some(Command::ActivateCell(Position::BottomRight))
        );
        assert_eq!(command_for(KeyCode::Char('0'), Focus::Board), None);
    }

    #[test]
    fn test_arrows_depend_on_focus() {
        assert_eq!(
            command_for(KeyCode::Up, Focus::Board),
            Some(Command::Cursor(KeyCode::Up))
        );
        assert_eq!(command_for(KeyCode::Up, Focus::Moves), Some(Command::Select(-1)));
        assert_eq!(command_for(KeyCode::Enter, Focus::Moves), Some(Command::JumpToSelected));
        assert_eq!(command_for(KeyCode::Enter, Focus::Board), Some(Command::ActivateCursor));
    }
}
