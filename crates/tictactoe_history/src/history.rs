//! Board snapshot history.

use super::error::HistoryError;
use super::types::Board;
use serde::Serialize;
use tracing::instrument;

/// Ordered board snapshots, one per move plus the initial empty board.
///
/// History is never empty: index 0 always holds the empty board. New
/// snapshots are only ever appended after the entries past a branch point
/// have been discarded with [`History::branch_at`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct History {
    snapshots: Vec<Board>,
}

impl History {
    /// Creates a history holding only the empty board.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
        }
    }

    /// Number of snapshots, including the initial board.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false; kept alongside `len` for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Index of the most recent snapshot.
    pub fn last_step(&self) -> usize {
        self.snapshots.len() - 1
    }

    /// Returns the snapshot at `step`.
    pub fn get(&self, step: usize) -> Option<&Board> {
        self.snapshots.get(step)
    }

    /// Checks that `step` names an existing snapshot.
    #[track_caller]
    pub fn check_step(&self, step: usize) -> Result<(), HistoryError> {
        if step < self.snapshots.len() {
            Ok(())
        } else {
            Err(HistoryError::step_out_of_range(step, self.snapshots.len()))
        }
    }

    /// Discards every snapshot after `step`.
    ///
    /// Steps past the end leave history unchanged.
    #[instrument(skip(self), fields(len = self.snapshots.len()))]
    pub fn branch_at(&mut self, step: usize) {
        self.snapshots.truncate(step.saturating_add(1));
    }

    /// Appends a snapshot and returns its step.
    #[instrument(skip(self, board), fields(len = self.snapshots.len()))]
    pub fn push(&mut self, board: Board) -> usize {
        self.snapshots.push(board);
        self.last_step()
    }

    /// Iterates snapshots with their steps.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Board)> {
        self.snapshots.iter().enumerate()
    }

    /// Returns all snapshots.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    #[cfg(test)]
    pub(crate) fn snapshots_mut(&mut self) -> &mut Vec<Board> {
        &mut self.snapshots
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
