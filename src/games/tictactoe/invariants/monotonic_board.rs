//! Monotonic board invariant: each snapshot adds exactly one mark.

use super::super::{Board, Position, TimeTravelGame};
use super::Invariant;

/// Invariant: history starts empty and grows by one cell per step.
///
/// Snapshot 0 is the empty board. Each later snapshot equals its
/// predecessor except for one previously empty cell, which is the
/// snapshot's clicked cell. Marks are never overwritten.
pub struct MonotonicBoardInvariant;

fn single_addition(prev: &Board, next: &Board) -> bool {
    let changed: Vec<Position> = Position::ALL
        .into_iter()
        .filter(|&pos| prev.get(pos).sign() != next.get(pos).sign())
        .collect();

    match changed.as_slice() {
        [pos] => prev.is_empty(*pos) && next.get(*pos).clicked(),
        _ => false,
    }
}

impl Invariant<TimeTravelGame> for MonotonicBoardInvariant {
    fn holds(game: &TimeTravelGame) -> bool {
        let history = game.history();
        let Some(root) = history.first() else {
            return false;
        };
        if *root.board() != Board::new() {
            return false;
        }
        history
            .windows(2)
            .all(|w| single_addition(w[0].board(), w[1].board()))
    }

    fn description() -> &'static str {
        "History starts empty and each snapshot adds exactly one mark"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Cell, Coords, Player};

    #[test]
    fn test_new_game_holds() {
        assert!(MonotonicBoardInvariant::holds(&TimeTravelGame::new()));
    }

    #[test]
    fn test_moves_hold() {
        let mut game = TimeTravelGame::new();
        for pos in [Position::Center, Position::TopLeft, Position::BottomRight] {
            game.apply_move(pos, pos.coords());
        }
        assert!(MonotonicBoardInvariant::holds(&game));
    }

    #[test]
    fn test_overwritten_mark_violates() {
        let mut game = TimeTravelGame::new();
        game.apply_move(Position::Center, Position::Center.coords());
        game.apply_move(Position::TopLeft, Position::TopLeft.coords());
        game.history[2]
            .board
            .set(Position::Center, Cell::marked(Player::O, Coords::new(2, 2)));
        assert!(!MonotonicBoardInvariant::holds(&game));
    }
}
