//! Game rules.
//!
//! Pure functions over a [`Board`](crate::Board). They read the board model
//! only, never presentation state.

pub mod tie;
pub mod win;

pub use tie::{is_full, is_tie};
pub use win::{WINNING_TRIPLES, check_winner, winning_triple};

use crate::phases::Outcome;
use crate::types::Board;
use tracing::instrument;

/// Evaluates terminal conditions: a win first, then a full board.
///
/// Returns `None` while the game should keep going.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Option<Outcome> {
    if let Some(winner) = check_winner(board) {
        return Some(Outcome::Win(winner));
    }
    if is_full(board) {
        return Some(Outcome::Tie);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    #[test]
    fn test_empty_board_keeps_going() {
        assert_eq!(evaluate(&Board::new()), None);
    }

    #[test]
    fn test_win_on_full_board_beats_tie() {
        // O O O / X X O / X O X: full, and One owns the top row.
        let mut board = Board::new();
        let owners = [
            Player::One,
            Player::One,
            Player::One,
            Player::Two,
            Player::Two,
            Player::One,
            Player::Two,
            Player::One,
            Player::Two,
        ];
        for (pos, owner) in Position::ALL.into_iter().zip(owners) {
            board.claim(pos, owner).unwrap();
        }
        assert_eq!(evaluate(&board), Some(Outcome::Win(Player::One)));
    }
}
