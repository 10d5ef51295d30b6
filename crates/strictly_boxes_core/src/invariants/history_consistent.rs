//! History consistency: the claim log explains the board.

use super::Invariant;
use crate::controller::GameController;
use crate::surface::Surface;
use crate::types::{Cell, Player};

/// Invariant: every claimed cell appears once in the history, owned by the
/// player whose turn it was at that point.
pub struct HistoryConsistentInvariant;

impl<S: Surface> Invariant<GameController<S>> for HistoryConsistentInvariant {
    fn holds(game: &GameController<S>) -> bool {
        let history = game.history();
        if history.len() != game.board().claimed_count() {
            return false;
        }

        history.iter().enumerate().all(|(turn, pos)| {
            let expected = if turn % 2 == 0 { Player::One } else { Player::Two };
            game.board().get(*pos) == Cell::Claimed(expected)
        })
    }

    fn description() -> &'static str {
        "Claim history matches the board"
    }
}
