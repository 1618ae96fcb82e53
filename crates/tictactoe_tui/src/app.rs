//! Application state and key handling.

use crossterm::event::KeyCode;
use tictactoe_history::{GameController, GameView, HistoryError, Position, UiEvent};
use tracing::{debug, info, instrument};

use super::input::{digit_cell, move_cursor};

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys select a jump target.
    Moves,
}

impl Focus {
    /// Switches to the other panel.
    pub fn toggle(self) -> Self {
        match self {
            Focus::Board => Focus::Moves,
            Focus::Moves => Focus::Board,
        }
    }
}

/// Main application state.
///
/// Game state lives in the controller; the app only tracks what the user is
/// pointing at and the last view to draw.
pub struct App {
    controller: GameController,
    view: GameView,
    cursor: Position,
    focus: Focus,
    selected: usize,
    show_help: bool,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(show_help: bool) -> Self {
        let controller = GameController::new();
        let view = controller.view();
        Self {
            controller,
            view,
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
            show_help,
            should_quit: false,
        }
    }

    /// View of the game to draw.
    pub fn view(&self) -> &GameView {
        &self.view
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused panel.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Selected jump target.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Whether the key-help footer is shown.
    pub fn show_help(&self) -> bool {
        self.show_help
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one key press.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError`] if a jump target is out of range, which the
    /// moves panel never offers.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyCode) -> Result<(), HistoryError> {
        if let Some(cell) = digit_cell(key) {
            if let Some(pos) = Position::from_index(cell) {
                self.cursor = pos;
            }
            return self.send(UiEvent::CellClicked(cell));
        }

        match (key, self.focus) {
            (KeyCode::Char('q') | KeyCode::Esc, _) => {
                info!("User quit");
                self.should_quit = true;
            }
            (KeyCode::Char('?'), _) => self.show_help = !self.show_help,
            (KeyCode::Tab | KeyCode::BackTab, _) => self.focus = self.focus.toggle(),
            (KeyCode::Home, _) => return self.send(UiEvent::HistoryStepClicked(0)),
            (KeyCode::End, _) => return self.send(UiEvent::HistoryStepClicked(self.last_step())),
            (KeyCode::Enter | KeyCode::Char(' '), Focus::Board) => {
                return self.send(UiEvent::CellClicked(self.cursor.to_index()));
            }
            (KeyCode::Enter | KeyCode::Char(' '), Focus::Moves) => {
                return self.send(UiEvent::HistoryStepClicked(self.selected));
            }
            (KeyCode::Up, Focus::Moves) => self.selected = self.selected.saturating_sub(1),
            (KeyCode::Down, Focus::Moves) => {
                self.selected = (self.selected + 1).min(self.last_step());
            }
            (code, Focus::Board) => self.cursor = move_cursor(self.cursor, code),
            _ => {}
        }
        Ok(())
    }

    fn last_step(&self) -> usize {
        self.view.jump_targets().len() - 1
    }

    fn send(&mut self, event: UiEvent) -> Result<(), HistoryError> {
        self.view = self.controller.dispatch(event)?;
        self.selected = *self.view.step();
        debug!(step = self.selected, status = %self.view.status(), "View updated");
        Ok(())
    }
}
