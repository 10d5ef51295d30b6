//! Game phases and outcomes.

use crate::types::Player;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Outcome {
    /// A player owns a full winning triple.
    #[display("{_0} wins")]
    Win(Player),
    /// Every cell is claimed and no triple is owned by one player.
    #[display("Tie")]
    Tie,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win(player) => Some(*player),
            Outcome::Tie => None,
        }
    }

    /// Returns true if the game was a tie.
    pub fn is_tie(&self) -> bool {
        matches!(self, Outcome::Tie)
    }
}

/// Where the game is in its lifecycle.
///
/// Transitions only go `Start -> Playing -> Finished -> (reset) -> Playing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Start screen is up, no game has been played yet.
    #[default]
    Start,
    /// Board is up and claims are accepted.
    Playing,
    /// The game ended with the given outcome.
    Finished(Outcome),
}

impl GamePhase {
    /// Returns the outcome once the game is finished.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            GamePhase::Finished(outcome) => Some(*outcome),
            _ => None,
        }
    }

    /// Returns true while claims are accepted.
    pub fn is_playing(&self) -> bool {
        matches!(self, GamePhase::Playing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_display() {
        assert_eq!(Outcome::Win(Player::One).to_string(), "Player 1 wins");
        assert_eq!(Outcome::Win(Player::Two).to_string(), "Player 2 wins");
        assert_eq!(Outcome::Tie.to_string(), "Tie");
    }

    #[test]
    fn test_finished_phase_exposes_outcome() {
        let phase = GamePhase::Finished(Outcome::Tie);
        assert_eq!(phase.outcome(), Some(Outcome::Tie));
        assert!(!phase.is_playing());
        assert_eq!(GamePhase::default().outcome(), None);
    }
}
