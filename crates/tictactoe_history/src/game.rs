//! Game state with time travel.
//!
//! [`GameState`] owns the snapshot history and the cursor selecting the
//! displayed snapshot. It changes only through [`GameState::apply_move`] and
//! [`GameState::jump_to`]. Whose turn it is follows from the cursor: X moves
//! on even steps.

use super::error::HistoryError;
use super::history::History;
use super::invariants::{GameInvariants, InvariantSet};
use super::position::Position;
use super::rules;
use super::types::{Board, Player};
use derive_more::Display;
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Status shown for the current snapshot.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameStatus {
    /// The current snapshot has a completed line.
    #[display("Winner: {}", _0)]
    Won(Player),
    /// No completed line; the given player moves next.
    #[display("Next Player: {}", _0)]
    NextPlayer(Player),
}

impl GameStatus {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(*player),
            GameStatus::NextPlayer(_) => None,
        }
    }
}

/// Why a move was ignored.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum IgnoredReason {
    /// The displayed snapshot already has a winner.
    #[display("game already won")]
    GameOver,
    /// The target square is already filled.
    #[display("square already occupied")]
    SquareOccupied,
}

/// Result of [`GameState::apply_move`].
///
/// Ignored moves are not errors: the state is simply left as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The mark was placed and recorded at `step`.
    Placed {
        /// Player whose mark was placed.
        player: Player,
        /// Square that was filled.
        position: Position,
        /// History step of the new snapshot.
        step: usize,
    },
    /// Nothing changed.
    Ignored(IgnoredReason),
}

impl MoveOutcome {
    /// True if the move changed the game.
    pub fn is_placed(&self) -> bool {
        matches!(self, MoveOutcome::Placed { .. })
    }
}

/// Authoritative game state: history, cursor, and derived turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub(crate) history: History,
    pub(crate) step: usize,
}

impl GameState {
    /// Creates a new game at the empty board with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: History::new(),
            step: 0,
        }
    }

    /// Returns the snapshot history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Returns the cursor into history.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Returns the snapshot at the cursor.
    pub fn current_snapshot(&self) -> &Board {
        // `step` is kept within history bounds by every mutation.
        &self.history.snapshots()[self.step]
    }

    /// Returns the player to move at the cursor.
    pub fn to_move(&self) -> Player {
        Player::for_step(self.step)
    }

    /// True when X moves next.
    pub fn x_is_next(&self) -> bool {
        self.to_move() == Player::X
    }

    /// Returns the winner of the current snapshot, if any.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(self.current_snapshot())
    }

    /// True iff the current snapshot has a winner.
    pub fn is_game_over(&self) -> bool {
        self.winner().is_some()
    }

    /// Returns the status for the current snapshot.
    pub fn status(&self) -> GameStatus {
        match self.winner() {
            Some(player) => GameStatus::Won(player),
            None => GameStatus::NextPlayer(self.to_move()),
        }
    }

    /// Places the current player's mark at `position`.
    ///
    /// Ignored when the displayed snapshot already has a winner or the
    /// square is filled. Otherwise every snapshot after the cursor is
    /// discarded, the new snapshot is appended, and the cursor moves to it.
    #[instrument(skip(self), fields(step = self.step, player = %self.to_move()))]
    pub fn apply_move(&mut self, position: Position) -> MoveOutcome {
        let current = *self.current_snapshot();

        if rules::check_winner(&current).is_some() {
            return MoveOutcome::Ignored(IgnoredReason::GameOver);
        }
        if !current.is_empty(position) {
            return MoveOutcome::Ignored(IgnoredReason::SquareOccupied);
        }

        let player = self.to_move();
        let discarded = self.history.last_step() - self.step;
        self.history.branch_at(self.step);
        self.step = self.history.push(current.with_mark(position, player));

        if discarded > 0 {
            debug!(discarded, "Discarded abandoned future");
        }
        info!(%player, %position, step = self.step, "Move placed");
        self.debug_check_invariants();

        MoveOutcome::Placed {
            player,
            position,
            step: self.step,
        }
    }

    /// Moves the cursor to `step` without touching history.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError`] if `step` is past the last snapshot; the
    /// state is left unchanged.
    #[instrument(skip(self), fields(from = self.step))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), HistoryError> {
        self.history.check_step(step)?;
        self.step = step;
        debug!(step, to_move = %self.to_move(), "Jumped");
        self.debug_check_invariants();
        Ok(())
    }

    fn debug_check_invariants(&self) {
        debug_assert!(
            GameInvariants::check_all(self).is_ok(),
            "game invariants violated: {:?}",
            GameInvariants::check_all(self)
        );
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
