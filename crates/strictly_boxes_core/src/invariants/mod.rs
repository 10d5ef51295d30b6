//! First-class invariants for a game session.
//!
//! Invariants are logical properties that hold after every accepted claim.
//! The controller checks them in debug builds; tests check them directly.

mod alternating_turn;
mod history_consistent;
mod phase_consistent;

pub use alternating_turn::AlternatingTurnInvariant;
pub use history_consistent::HistoryConsistentInvariant;
pub use phase_consistent::PhaseConsistentInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together.
pub trait InvariantSet<S> {
    /// Checks every invariant in the set, collecting all violations.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn into_result(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        into_result(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        check::<S, I3>(state, &mut violations);
        into_result(violations)
    }
}

/// Every game invariant as one set.
pub type GameInvariants = (
    AlternatingTurnInvariant,
    HistoryConsistentInvariant,
    PhaseConsistentInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, GameController, Player, Position};

    #[test]
    fn test_set_holds_for_new_controller() {
        let game = GameController::default();
        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_set_holds_after_moves() {
        let game = GameController::default();
        let game = GameController::replay(
            game.into_surface(),
            &[Position::TopLeft, Position::Center, Position::TopRight],
        );
        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_set_reports_every_violation() {
        let mut game = GameController::default();
        game.start_game();
        let _ = game.claim(Position::Center);

        // A second claim by the same player, written straight to the board.
        game.board.claim(Position::TopLeft, Player::One).unwrap();

        let violations = GameInvariants::check_all(&game).unwrap_err();
        assert_eq!(violations.len(), 2);
        assert_eq!(game.board.get(Position::TopLeft), Cell::Claimed(Player::One));
    }

    #[test]
    fn test_pair_as_set() {
        type Pair = (AlternatingTurnInvariant, PhaseConsistentInvariant);
        let game = GameController::default();
        assert!(Pair::check_all(&game).is_ok());
    }
}
