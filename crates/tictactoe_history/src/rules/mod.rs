//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a single board snapshot. Rules are kept apart
//! from history storage so that game-over is always derived from whichever
//! snapshot is on display.

pub mod win;

pub use win::{LINES, check_winner, winning_line};
