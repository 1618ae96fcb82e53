//! Tic-tac-toe with full move history and time travel.
//!
//! # Architecture
//!
//! - **Types**: [`Board`], [`Square`], [`Player`], [`Position`]
//! - **Rules**: pure win detection over a single snapshot ([`check_winner`])
//! - **Game**: [`GameState`] owns the snapshot [`History`] and the cursor
//! - **Adapter**: [`GameController`] turns [`UiEvent`]s into state changes
//!   and hands back a [`GameView`] to draw
//!
//! # Example
//!
//! ```
//! use tictactoe_history::{GameState, GameStatus, Player, Position};
//!
//! let mut game = GameState::new();
//! game.apply_move(Position::Center);
//! game.apply_move(Position::TopLeft);
//! game.jump_to(1).unwrap();
//! game.apply_move(Position::BottomRight);
//!
//! assert_eq!(game.history().len(), 3);
//! assert_eq!(game.status(), GameStatus::NextPlayer(Player::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod adapter;
mod error;
mod game;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use adapter::{GameController, GameView, JumpTarget, UiEvent};
pub use error::{HistoryError, HistoryErrorKind};
pub use game::{GameState, GameStatus, IgnoredReason, MoveOutcome};
pub use history::History;
pub use position::Position;
pub use rules::{check_winner, winning_line};
pub use types::{Board, Player, Square};
