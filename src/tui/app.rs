//! Application state and input handling.

use super::input::{digit_cell, move_cursor};
use super::layout::ScreenLayout;
use crate::config::BoxesConfig;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use strictly_boxes_core::{GameController, PointerEvent, Position, Screen, Target, ViewState};
use tracing::{debug, info, instrument};

/// Whether the event loop keeps going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep running.
    Continue,
    /// Leave the UI.
    Quit,
}

/// Main application state.
///
/// Keys and mouse input are both turned into pointer events for the
/// controller. The keyboard cursor acts as a second pointer, so moving it
/// previews the active player's mark the same way hovering does.
#[derive(Debug)]
pub struct App {
    game: GameController<ViewState>,
    cursor: Position,
    pointer: Option<Target>,
    config: BoxesConfig,
}

impl App {
    /// Creates the application on the start screen.
    pub fn new(config: BoxesConfig) -> Self {
        let game = GameController::with_messages(ViewState::new(), config.game_messages());
        Self {
            game,
            cursor: Position::Center,
            pointer: None,
            config,
        }
    }

    /// The game controller.
    pub fn game(&self) -> &GameController<ViewState> {
        &self.game
    }

    /// What the controller asked to be shown.
    pub fn view(&self) -> &ViewState {
        self.game.surface()
    }

    /// Keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Target under pointer focus.
    pub fn pointer(&self) -> Option<Target> {
        self.pointer
    }

    /// Loaded configuration.
    pub fn config(&self) -> &BoxesConfig {
        &self.config
    }

    /// Screen currently up.
    pub fn screen(&self) -> Screen {
        self.view().visible_screen().unwrap_or(Screen::Start)
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(screen = %self.screen()))]
    pub fn handle_key(&mut self, key: KeyEvent) -> Flow {
        let ctrl_c =
            key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl_c || matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
            info!("User quit");
            return Flow::Quit;
        }

        match self.screen() {
            Screen::Start | Screen::Finish => {
                if matches!(
                    key.code,
                    KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('n')
                ) {
                    self.new_game_from_keyboard();
                }
            }
            Screen::Board => match key.code {
                KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                    self.cursor = move_cursor(self.cursor, key.code);
                    self.focus(Target::Cell(self.cursor));
                }
                KeyCode::Enter | KeyCode::Char(' ') => {
                    self.activate(Target::Cell(self.cursor));
                }
                code => {
                    if let Some(pos) = digit_cell(code) {
                        self.cursor = pos;
                        self.focus(Target::Cell(pos));
                        self.activate(Target::Cell(pos));
                    } else {
                        debug!(?code, "Unbound key");
                    }
                }
            },
        }
        Flow::Continue
    }

    /// Handles a mouse event inside a terminal of size `area`.
    #[instrument(skip(self, area))]
    pub fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect) {
        let layout = ScreenLayout::compute(area);
        let target = layout.hit(self.screen(), mouse.column, mouse.row);
        if let Target::Cell(pos) = target {
            self.cursor = pos;
        }

        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(MouseButton::Left) => self.focus(target),
            MouseEventKind::Down(MouseButton::Left) => {
                self.focus(target);
                self.activate(target);
            }
            _ => {}
        }
    }

    /// Moves pointer focus, emitting left/entered events on change.
    fn focus(&mut self, target: Target) {
        if self.pointer == Some(target) {
            return;
        }
        if let Some(previous) = self.pointer.take() {
            self.game.handle(PointerEvent::Left(previous));
        }
        self.pointer = Some(target);
        self.game.handle(PointerEvent::Entered(target));
    }

    fn activate(&mut self, target: Target) {
        self.game.handle(PointerEvent::Activated(target));
    }

    /// Starts a game from the keyboard and puts the hover preview on the cursor.
    fn new_game_from_keyboard(&mut self) {
        self.activate(Target::NewGame);
        self.pointer = None;
        self.focus(Target::Cell(self.cursor));
    }
}
