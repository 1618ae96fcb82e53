//! Monotonic history invariant: each snapshot adds exactly one mark.

use super::super::{GameState, Player, Position, Square};
use super::Invariant;

/// Invariant: snapshot `k + 1` is snapshot `k` plus one mark by the player
/// to move at `k`.
///
/// No snapshot ever clears or overwrites a square of its predecessor.
pub struct MonotonicHistoryInvariant;

impl Invariant<GameState> for MonotonicHistoryInvariant {
    fn holds(game: &GameState) -> bool {
        game.history()
            .snapshots()
            .windows(2)
            .enumerate()
            .all(|(step, pair)| {
                let (before, after) = (&pair[0], &pair[1]);
                let changed: Vec<Position> = Position::ALL
                    .into_iter()
                    .filter(|pos| before.get(*pos) != after.get(*pos))
                    .collect();
                match changed.as_slice() {
                    [pos] => {
                        before.is_empty(*pos)
                            && after.get(*pos) == Square::Occupied(Player::for_step(step))
                    }
                    _ => false,
                }
            })
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark to its predecessor"
    }
}
