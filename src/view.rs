//! Read-only projection of the game for presentation layers.

use derive_getters::Getters;
use serde::Serialize;
use tracing::instrument;

use crate::games::tictactoe::{Board, MoveEntry, Player, Status, TimeTravelGame, WinningLine};

/// Everything a presentation layer needs to draw the displayed step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct GameView {
    /// Board at the displayed step.
    board: Board,
    /// Winning line on that board, if any.
    winning_line: Option<WinningLine>,
    /// Structured status.
    status: Status,
    /// Status line as shown to the player.
    status_text: String,
    /// Move listing in display order.
    moves: Vec<MoveEntry>,
    /// Displayed step.
    step: usize,
    /// Player to move at the displayed step.
    to_move: Player,
    /// Whether `moves` is oldest first.
    sort_ascending: bool,
}

impl GameView {
    /// Projects the game. Pure: the game is not modified.
    #[instrument(skip(game), fields(step = game.step()))]
    pub fn project(game: &TimeTravelGame, draw_message: &str) -> Self {
        Self {
            board: game.current_board().clone(),
            winning_line: game.winning_line(),
            status: game.status(),
            status_text: game.status_text(draw_message),
            moves: game.move_list(),
            step: game.step(),
            to_move: game.to_move(),
            sort_ascending: game.sort_ascending(),
        }
    }

    /// Plain-text rendering: board, status, and the move list.
    pub fn to_text(&self) -> String {
        let mut out = self.board.display();
        out.push_str("\n\n");
        out.push_str(&self.status_text);
        out.push('\n');
        for entry in &self.moves {
            let marker = if entry.current { '>' } else { ' ' };
            out.push_str(&format!("{} Go to {}", marker, entry.label));
            if let Some(coords) = entry.coords {
                out.push_str(&format!("  ({})", coords));
            }
            out.push('\n');
        }
        out
    }
}
