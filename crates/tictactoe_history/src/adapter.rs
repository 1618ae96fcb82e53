//! Presentation adapter: UI events in, render-ready views out.
//!
//! A front end forwards user interaction as [`UiEvent`]s to a
//! [`GameController`] and redraws from the [`GameView`] it returns. The view
//! is fully determined by the current snapshot and cursor, so a front end
//! needs no state of its own beyond focus and selection.

use super::error::HistoryError;
use super::game::{GameState, GameStatus, MoveOutcome};
use super::position::Position;
use super::rules;
use super::types::{Board, Player};
use derive_getters::Getters;
use serde::Serialize;
use tracing::{debug, instrument};

/// User interaction delivered to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    /// A board cell (0-8, row-major) was clicked.
    CellClicked(usize),
    /// A jump target was clicked.
    HistoryStepClicked(usize),
}

/// One entry of the jump-target list.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct JumpTarget {
    /// History step this entry jumps to.
    step: usize,
    /// Button label.
    label: String,
    /// True for the step currently on display.
    current: bool,
}

impl JumpTarget {
    /// Label for a jump to `step`.
    pub fn label_for(step: usize) -> String {
        if step == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{}", step)
        }
    }
}

/// Everything a front end needs to draw the game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct GameView {
    /// Snapshot at the cursor.
    board: Board,
    /// Winner or next player for that snapshot.
    status: GameStatus,
    /// Completed line to highlight, if any.
    winning_line: Option<[Position; 3]>,
    /// Cursor into history.
    step: usize,
    /// One entry per history snapshot.
    jump_targets: Vec<JumpTarget>,
}

impl GameView {
    /// Builds the view of `game`.
    #[instrument(skip(game), fields(step = game.step()))]
    pub fn of(game: &GameState) -> Self {
        let board = *game.current_snapshot();
        let jump_targets = (0..game.history().len())
            .map(|step| JumpTarget {
                step,
                label: JumpTarget::label_for(step),
                current: step == game.step(),
            })
            .collect();

        Self {
            board,
            status: game.status(),
            winning_line: rules::winning_line(&board).map(|(_, line)| line),
            step: game.step(),
            jump_targets,
        }
    }

    /// Status line text.
    pub fn status_text(&self) -> String {
        self.status.to_string()
    }

    /// Next player, or `None` once the snapshot is won.
    pub fn next_player(&self) -> Option<Player> {
        match self.status {
            GameStatus::NextPlayer(player) => Some(player),
            GameStatus::Won(_) => None,
        }
    }
}

/// Owns the game and applies UI events to it.
#[derive(Debug, Clone, Default)]
pub struct GameController {
    game: GameState,
}

impl GameController {
    /// Creates a controller for a new game.
    #[instrument]
    pub fn new() -> Self {
        Self {
            game: GameState::new(),
        }
    }

    /// Returns the underlying game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Returns the current view.
    pub fn view(&self) -> GameView {
        GameView::of(&self.game)
    }

    /// Applies one event and returns the view to draw next.
    ///
    /// Clicks on filled cells, clicks after a win, and cell indices outside
    /// the board are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError`] for a jump past the end of history.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, event: UiEvent) -> Result<GameView, HistoryError> {
        match event {
            UiEvent::CellClicked(index) => {
                if let Some(position) = Position::from_index(index) {
                    if let MoveOutcome::Placed { step, .. } = self.game.apply_move(position) {
                        debug!(step, "Cell click placed a mark");
                    }
                }
            }
            UiEvent::HistoryStepClicked(step) => self.game.jump_to(step)?,
        }
        Ok(self.view())
    }
}
