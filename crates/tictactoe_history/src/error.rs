//! History navigation error types.

use derive_more::{Display, Error};

/// Specific history error conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum HistoryErrorKind {
    /// Requested step lies past the end of history.
    #[display("step {} is out of range (history has {} entries)", step, len)]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// Number of history entries at the time of the request.
        len: usize,
    },
}

/// History error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("History error: {} at {}:{}", kind, file, line)]
pub struct HistoryError {
    /// What went wrong.
    pub kind: HistoryErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl HistoryError {
    /// Creates a new history error with caller location tracking.
    #[track_caller]
    pub fn new(kind: HistoryErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Shorthand for [`HistoryErrorKind::StepOutOfRange`].
    #[track_caller]
    pub fn step_out_of_range(step: usize, len: usize) -> Self {
        Self::new(HistoryErrorKind::StepOutOfRange { step, len })
    }
}
