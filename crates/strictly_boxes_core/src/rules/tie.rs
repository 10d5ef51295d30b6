//! Tie detection.

use super::win::check_winner;
use crate::types::Board;
use tracing::instrument;

/// Checks if every cell is claimed.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.claimed_count() == 9
}

/// A full board that nobody won.
#[instrument(skip(board))]
pub fn is_tie(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}
