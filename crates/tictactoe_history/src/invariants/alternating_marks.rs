//! Alternating marks invariant: X and O take turns, X first.

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: snapshot `k` holds `ceil(k/2)` X marks and `floor(k/2)` O marks.
///
/// Together with the cursor parity this is what makes the derived turn
/// agree with the board on display.
pub struct AlternatingMarksInvariant;

impl Invariant<GameState> for AlternatingMarksInvariant {
    fn holds(game: &GameState) -> bool {
        game.history().iter().all(|(step, board)| {
            board.count(Player::X) == step.div_ceil(2) && board.count(Player::O) == step / 2
        })
    }

    fn description() -> &'static str {
        "Players alternate marks (X, O, X, O, ...)"
    }
}
