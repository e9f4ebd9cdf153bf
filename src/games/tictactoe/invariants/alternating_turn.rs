//! Alternating turn invariant: X fills odd steps, O fills even steps.

use super::super::{Player, TimeTravelGame};
use super::Invariant;

/// Invariant: the step pointer is in range and marks alternate.
///
/// The mark added at step `k` is X when `k` is odd and O when even, so
/// the player to move at any step follows from its parity alone.
pub struct AlternatingTurnInvariant;

impl Invariant<TimeTravelGame> for AlternatingTurnInvariant {
    fn holds(game: &TimeTravelGame) -> bool {
        if game.step() >= game.len() {
            return false;
        }
        game.history().iter().enumerate().skip(1).all(|(step, snapshot)| {
            let expected = if step % 2 == 1 { Player::X } else { Player::O };
            snapshot
                .board()
                .clicked()
                .is_some_and(|(_, cell)| cell.sign() == Some(expected))
        })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...) and the step is in range"
    }
}
