//! History consistency invariant: snapshot contents match their index.

use super::super::TimeTravelGame;
use super::Invariant;

/// Invariant: snapshot `k` holds `k` marks and at most one clicked cell.
///
/// The root snapshot has no clicked cell.
pub struct HistoryConsistentInvariant;

impl Invariant<TimeTravelGame> for HistoryConsistentInvariant {
    fn holds(game: &TimeTravelGame) -> bool {
        game.history().iter().enumerate().all(|(step, snapshot)| {
            let board = snapshot.board();
            let clicked = board.cells().iter().filter(|c| c.clicked()).count();
            let expected_clicked = usize::from(step > 0);
            board.occupied() == step && clicked == expected_clicked
        })
    }

    fn description() -> &'static str {
        "Snapshot k holds k marks and exactly one clicked cell after the root"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Cell, Player, Position};

    #[test]
    fn test_empty_game_holds() {
        assert!(HistoryConsistentInvariant::holds(&TimeTravelGame::new()));
    }

    #[test]
    fn test_full_game_holds() {
        let mut game = TimeTravelGame::new();
        for i in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            let pos = Position::from_index(i).unwrap();
            game.apply_move(pos, pos.coords());
        }
        assert_eq!(game.len(), 10);
        assert!(HistoryConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_extra_clicked_cell_violates() {
        let mut game = TimeTravelGame::new();
        game.apply_move(Position::Center, Position::Center.coords());
        game.apply_move(Position::TopLeft, Position::TopLeft.coords());
        // Leave the previous move's clicked flag set.
        game.history[2]
            .board
            .set(Position::Center, Cell::marked(Player::X, Position::Center.coords()));
        assert!(!HistoryConsistentInvariant::holds(&game));
    }
}
