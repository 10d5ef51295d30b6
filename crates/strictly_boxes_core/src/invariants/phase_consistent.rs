//! Phase consistency: the phase agrees with what the board says.

use super::Invariant;
use crate::controller::GameController;
use crate::phases::GamePhase;
use crate::rules;
use crate::surface::Surface;

/// Invariant: `Start` has an empty board, `Playing` has no terminal result
/// on the board, and `Finished` carries exactly the board's result.
pub struct PhaseConsistentInvariant;

impl<S: Surface> Invariant<GameController<S>> for PhaseConsistentInvariant {
    fn holds(game: &GameController<S>) -> bool {
        let result = rules::evaluate(game.board());
        match game.phase() {
            GamePhase::Start => game.board().claimed_count() == 0,
            GamePhase::Playing => result.is_none(),
            GamePhase::Finished(outcome) => result == Some(outcome),
        }
    }

    fn description() -> &'static str {
        "Phase matches the board result"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Outcome, Player, Position};

    #[test]
    fn test_won_game_holds() {
        let game = GameController::replay(
            crate::NullSurface,
            &[
                Position::TopLeft,
                Position::MiddleLeft,
                Position::TopCenter,
                Position::Center,
                Position::TopRight,
            ],
        );
        assert_eq!(game.phase(), GamePhase::Finished(Outcome::Win(Player::One)));
        assert!(PhaseConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_wrong_outcome_violates() {
        let mut game = GameController::default();
        game.start_game();
        game.phase = GamePhase::Finished(Outcome::Tie);
        assert!(!PhaseConsistentInvariant::holds(&game));
    }
}
