//! Alternating turn invariant: One, Two, One, Two, ...

use super::Invariant;
use crate::controller::GameController;
use crate::surface::Surface;
use crate::types::Player;

/// Invariant: players alternate, player one first.
///
/// Player one holds as many cells as player two or exactly one more, and the
/// active player is one iff an even number of cells is claimed.
pub struct AlternatingTurnInvariant;

impl<S: Surface> Invariant<GameController<S>> for AlternatingTurnInvariant {
    fn holds(game: &GameController<S>) -> bool {
        let board = game.board();
        let ones = board.count_for(Player::One);
        let twos = board.count_for(Player::Two);
        if ones != twos && ones != twos + 1 {
            return false;
        }

        let expected = if board.claimed_count() % 2 == 0 {
            Player::One
        } else {
            Player::Two
        };
        game.active_player() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns, player one first"
    }
}
