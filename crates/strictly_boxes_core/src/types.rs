//! Core domain types for the game board.

use crate::position::Position;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
///
/// Player One is marked `O` and always moves first. Player Two is marked `X`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Player {
    /// First player, marked `O`.
    #[display("Player 1")]
    One,
    /// Second player, marked `X`.
    #[display("Player 2")]
    Two,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Default board mark for this player.
    pub fn mark(self) -> &'static str {
        match self {
            Player::One => "O",
            Player::Two => "X",
        }
    }

    /// Player number as shown on the badges (1 or 2).
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// Slot of this player in per-player arrays.
    pub(crate) fn slot(self) -> usize {
        usize::from(self.number() - 1)
    }
}

/// A single cell of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has claimed this cell.
    #[default]
    Empty,
    /// Claimed by a player for the rest of the game.
    Claimed(Player),
}

impl Cell {
    /// Returns the owner of the cell, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Claimed(player) => Some(player),
        }
    }
}

/// Rejected attempt to claim a cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display("{} is already claimed by {}", position, owner)]
pub struct AlreadyClaimed {
    /// The contested position.
    pub position: Position,
    /// Who holds it.
    pub owner: Player,
}

impl std::error::Error for AlreadyClaimed {}

/// 3x3 board, cells in row-major order (0-8).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Claims an empty cell for `player`.
    ///
    /// A claimed cell never changes owner; only [`Board::clear`] empties it again.
    #[instrument(skip(self))]
    pub fn claim(&mut self, pos: Position, player: Player) -> Result<(), AlreadyClaimed> {
        match self.get(pos) {
            Cell::Empty => {
                self.cells[pos.to_index()] = Cell::Claimed(player);
                Ok(())
            }
            Cell::Claimed(owner) => Err(AlreadyClaimed {
                position: pos,
                owner,
            }),
        }
    }

    /// Empties every cell.
    pub fn clear(&mut self) {
        self.cells = [Cell::Empty; 9];
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Number of claimed cells.
    pub fn claimed_count(&self) -> usize {
        self.cells.iter().filter(|c| **c != Cell::Empty).count()
    }

    /// Number of cells claimed by `player`.
    pub fn count_for(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Cell::Claimed(player))
            .count()
    }

    /// Formats the board as a human-readable grid, player one's mark first in `marks`.
    ///
    /// Empty cells show their 1-based number so the grid doubles as a key map.
    pub fn display(&self, marks: [&str; 2]) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let idx = row * 3 + col;
                let symbol = match self.cells[idx] {
                    Cell::Empty => (idx + 1).to_string(),
                    Cell::Claimed(player) => marks[player.slot()].to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_empty_cell() {
        let mut board = Board::new();
        assert!(board.claim(Position::Center, Player::One).is_ok());
        assert_eq!(board.get(Position::Center), Cell::Claimed(Player::One));
        assert_eq!(board.claimed_count(), 1);
    }

    #[test]
    fn test_claim_is_permanent() {
        let mut board = Board::new();
        board.claim(Position::Center, Player::One).unwrap();

        let err = board.claim(Position::Center, Player::Two).unwrap_err();
        assert_eq!(err.owner, Player::One);
        assert_eq!(board.get(Position::Center), Cell::Claimed(Player::One));
    }

    #[test]
    fn test_clear_empties_everything() {
        let mut board = Board::new();
        board.claim(Position::TopLeft, Player::One).unwrap();
        board.claim(Position::BottomRight, Player::Two).unwrap();
        board.clear();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_display_uses_marks_and_numbers() {
        let mut board = Board::new();
        board.claim(Position::TopLeft, Player::One).unwrap();
        board.claim(Position::Center, Player::Two).unwrap();
        assert_eq!(
            board.display([Player::One.mark(), Player::Two.mark()]),
            "O|2|3\n-+-+-\n4|X|6\n-+-+-\n7|8|9"
        );
        assert_eq!(
            board.display(["A", "B"]),
            "A|2|3\n-+-+-\n4|B|6\n-+-+-\n7|8|9"
        );
    }

    #[test]
    fn test_player_labels() {
        assert_eq!(Player::One.mark(), "O");
        assert_eq!(Player::Two.mark(), "X");
        assert_eq!(Player::One.opponent(), Player::Two);
        assert_eq!(Player::Two.to_string(), "Player 2");
    }
}
