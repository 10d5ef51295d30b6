//! Results of claim attempts.
//!
//! Invalid claims are not errors as far as the player is concerned: the
//! controller ignores them. The reason is still carried so callers can log it.

use crate::phases::Outcome;
use crate::position::Position;
use crate::types::Player;
use derive_more::Display;

/// What a call to [`GameController::claim`](crate::GameController::claim) did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "a claim may have been ignored"]
pub enum Claim {
    /// Nothing changed.
    Ignored(Ignored),
    /// The cell was claimed and the game goes on with `next` to move.
    Continued {
        /// Player who claimed the cell.
        by: Player,
        /// Player now active.
        next: Player,
    },
    /// The cell was claimed and ended the game.
    Finished {
        /// Player who claimed the cell.
        by: Player,
        /// How the game ended.
        outcome: Outcome,
    },
}

impl Claim {
    /// Returns true if the board changed.
    pub fn is_accepted(&self) -> bool {
        !matches!(self, Claim::Ignored(_))
    }
}

/// Why a claim was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Ignored {
    /// No game is being played.
    #[display("No game in progress")]
    NotPlaying,
    /// The cell already has an owner.
    #[display("{_0} is already claimed")]
    CellClaimed(Position),
}
