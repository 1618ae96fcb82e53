//! Cursor invariant: the cursor always names an existing snapshot.

use super::super::{Board, GameState};
use super::Invariant;

/// Invariant: history starts at the empty board and `0 <= step < len`.
pub struct CursorInBoundsInvariant;

impl Invariant<GameState> for CursorInBoundsInvariant {
    fn holds(game: &GameState) -> bool {
        game.history().get(0) == Some(&Board::new()) && game.step() < game.history().len()
    }

    fn description() -> &'static str {
        "Cursor points into a history that starts at the empty board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    #[test]
    fn test_new_game_holds() {
        assert!(CursorInBoundsInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_cursor_past_end_violates() {
        let mut game = GameState::new();
        game.step = 1;
        assert!(!CursorInBoundsInvariant::holds(&game));
    }

    #[test]
    fn test_non_empty_start_violates() {
        let mut game = GameState::new();
        game.history.snapshots_mut()[0] = Board::new().with_mark(Position::Center, Player::X);
        assert!(!CursorInBoundsInvariant::holds(&game));
    }
}
