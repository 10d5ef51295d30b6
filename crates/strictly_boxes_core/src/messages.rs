//! Status texts shown when a game ends.

use crate::types::Player;
use serde::{Deserialize, Serialize};

/// Placeholder replaced with the winner's mark in [`Messages::win`].
pub const PLAYER_PLACEHOLDER: &str = "{player}";

/// Finish-screen texts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Messages {
    /// Win template; `{player}` becomes the winner's mark.
    pub win: String,
    /// Tie text.
    pub tie: String,
    /// Marks substituted for `{player}`, indexed by player.
    pub marks: [String; 2],
}

impl Messages {
    /// Renders the win message for `winner`.
    pub fn win_for(&self, winner: Player) -> String {
        self.win.replace(PLAYER_PLACEHOLDER, &self.marks[winner.slot()])
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            win: "Winner".to_string(),
            tie: "It's a Tie!".to_string(),
            marks: [Player::One.mark().to_string(), Player::Two.mark().to_string()],
        }
    }
}
