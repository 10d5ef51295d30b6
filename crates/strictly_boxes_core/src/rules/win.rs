//! Win detection.

use crate::position::Position;
use crate::types::{Board, Cell, Player};
use tracing::instrument;

/// The 8 winning triples, in the order they are checked.
pub const WINNING_TRIPLES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first winning triple and its owner.
///
/// The first cell of each triple is compared against the other two; only the
/// first match in [`WINNING_TRIPLES`] order counts.
#[instrument(skip(board))]
pub fn winning_triple(board: &Board) -> Option<([Position; 3], Player)> {
    WINNING_TRIPLES.into_iter().find_map(|triple| {
        let [a, b, c] = triple;
        match board.get(a) {
            Cell::Claimed(owner) if board.get(b) == board.get(a) && board.get(c) == board.get(a) => {
                Some((triple, owner))
            }
            _ => None,
        }
    })
}

/// Returns `Some(player)` if the player owns a full triple.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_triple(board).map(|(_, player)| player)
}
