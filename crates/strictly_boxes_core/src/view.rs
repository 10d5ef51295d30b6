//! Recorded presentation state.
//!
//! [`ViewState`] keeps every flag the controller pushes through the
//! [`Surface`] trait. Front ends render from it; tests assert against it.

use crate::phases::Outcome;
use crate::position::Position;
use crate::surface::{Screen, Surface};
use crate::types::Player;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Snapshot of everything a front end needs to draw.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ViewState {
    /// Visibility per screen, indexed start, board, finish.
    screens: [bool; 3],
    /// Claimed marker per cell.
    cells: [Option<Player>; 9],
    /// Hover marker per cell.
    hover: [Option<Player>; 9],
    /// Active indicator per player badge.
    badges: [bool; 2],
    /// Status message shown on the finish screen.
    message: String,
    /// Outcome tag of the finish screen.
    finish: Option<Outcome>,
}

impl ViewState {
    /// Initial view: start screen up, badge one active.
    pub fn new() -> Self {
        Self {
            screens: [true, false, false],
            cells: [None; 9],
            hover: [None; 9],
            badges: [true, false],
            message: String::new(),
            finish: None,
        }
    }

    /// Whether `screen` is visible.
    pub fn is_visible(&self, screen: Screen) -> bool {
        self.screens[screen.slot()]
    }

    /// The first visible screen, start before board before finish.
    pub fn visible_screen(&self) -> Option<Screen> {
        <Screen as strum::IntoEnumIterator>::iter().find(|s| self.is_visible(*s))
    }

    /// Claimed marker shown on a cell.
    pub fn cell(&self, position: Position) -> Option<Player> {
        self.cells[position.to_index()]
    }

    /// Hover marker shown on a cell.
    pub fn hover_at(&self, position: Position) -> Option<Player> {
        self.hover[position.to_index()]
    }

    /// Whether a player's badge is marked active.
    pub fn is_active(&self, player: Player) -> bool {
        self.badges[player.slot()]
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for ViewState {
    fn set_screen_visible(&mut self, screen: Screen, visible: bool) {
        trace!(%screen, visible, "screen visibility");
        self.screens[screen.slot()] = visible;
    }

    fn set_cell_claimed(&mut self, position: Position, owner: Option<Player>) {
        self.cells[position.to_index()] = owner;
    }

    fn set_player_active(&mut self, player: Player, active: bool) {
        self.badges[player.slot()] = active;
    }

    fn set_message(&mut self, message: &str) {
        self.message = message.to_string();
    }

    fn set_hover_marker(&mut self, position: Position, marker: Option<Player>) {
        self.hover[position.to_index()] = marker;
    }

    fn set_finish_outcome(&mut self, outcome: Option<Outcome>) {
        self.finish = outcome;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_view_shows_start() {
        let view = ViewState::new();
        assert_eq!(view.visible_screen(), Some(Screen::Start));
        assert!(view.is_active(Player::One));
        assert!(!view.is_active(Player::Two));
        assert!(view.message().is_empty());
    }

    #[test]
    fn test_records_flags() {
        let mut view = ViewState::new();
        view.set_screen_visible(Screen::Start, false);
        view.set_screen_visible(Screen::Board, true);
        view.set_cell_claimed(Position::Center, Some(Player::Two));
        view.set_hover_marker(Position::TopLeft, Some(Player::One));

        assert_eq!(view.visible_screen(), Some(Screen::Board));
        assert_eq!(view.cell(Position::Center), Some(Player::Two));
        assert_eq!(view.hover_at(Position::TopLeft), Some(Player::One));
        assert_eq!(view.hover_at(Position::Center), None);
    }

    #[test]
    fn test_serializes_to_json() {
        let json = serde_json::to_value(ViewState::new()).unwrap();
        assert_eq!(json["screens"], serde_json::json!([true, false, false]));
        assert_eq!(json["finish"], serde_json::Value::Null);
    }
}
