//! Output seam between the game controller and whatever draws it.
//!
//! The controller never reads presentation state back; it only pushes flags
//! through a [`Surface`]. Every method has a no-op default, so a front end
//! that lacks one of the targets simply ignores it.

use crate::phases::Outcome;
use crate::position::Position;
use crate::types::Player;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// The three screens a front end shows.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Screen {
    /// Title screen with the new-game button.
    #[display("start")]
    Start,
    /// The 3x3 board and player badges.
    #[display("board")]
    Board,
    /// End screen with the outcome and a new-game button.
    #[display("finish")]
    Finish,
}

impl Screen {
    pub(crate) fn slot(self) -> usize {
        match self {
            Screen::Start => 0,
            Screen::Board => 1,
            Screen::Finish => 2,
        }
    }
}

/// Presentation side effects emitted by the controller.
pub trait Surface {
    /// Shows or hides a screen.
    fn set_screen_visible(&mut self, _screen: Screen, _visible: bool) {}

    /// Marks a cell as claimed by `owner`, or clears the mark with `None`.
    fn set_cell_claimed(&mut self, _position: Position, _owner: Option<Player>) {}

    /// Toggles the "active" indicator on a player badge.
    fn set_player_active(&mut self, _player: Player, _active: bool) {}

    /// Replaces the status message.
    fn set_message(&mut self, _message: &str) {}

    /// Shows a player's hover marker over a cell, or removes it with `None`.
    fn set_hover_marker(&mut self, _position: Position, _marker: Option<Player>) {}

    /// Tags the finish screen with the outcome, or clears the tag with `None`.
    fn set_finish_outcome(&mut self, _outcome: Option<Outcome>) {}
}

/// A surface with no targets at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSurface;

impl Surface for NullSurface {}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn set_screen_visible(&mut self, screen: Screen, visible: bool) {
        (**self).set_screen_visible(screen, visible);
    }

    fn set_cell_claimed(&mut self, position: Position, owner: Option<Player>) {
        (**self).set_cell_claimed(position, owner);
    }

    fn set_player_active(&mut self, player: Player, active: bool) {
        (**self).set_player_active(player, active);
    }

    fn set_message(&mut self, message: &str) {
        (**self).set_message(message);
    }

    fn set_hover_marker(&mut self, position: Position, marker: Option<Player>) {
        (**self).set_hover_marker(position, marker);
    }

    fn set_finish_outcome(&mut self, outcome: Option<Outcome>) {
        (**self).set_finish_outcome(outcome);
    }
}
