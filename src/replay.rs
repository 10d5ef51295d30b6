//! Headless replay of a move list.

use crate::config::BoxesConfig;
use derive_more::{Display, Error};
use serde::Serialize;
use strictly_boxes_core::{Claim, GameController, GamePhase, Player, Position, ViewState};
use tracing::{debug, info, instrument};

/// A move the controller ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IgnoredMove {
    /// Zero-based index in the move list.
    pub turn: usize,
    /// Requested position.
    pub position: Position,
    /// Why it was ignored.
    pub reason: String,
}

/// Result of replaying a move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayReport {
    /// Positions claimed, in order.
    pub claimed: Vec<Position>,
    /// Moves that changed nothing.
    pub ignored: Vec<IgnoredMove>,
    /// Marks per cell, row-major; `None` for empty cells.
    pub board: Vec<Option<String>>,
    /// `"playing"` or `"finished"`.
    pub phase: String,
    /// Winner's player number, if any.
    pub winner: Option<u8>,
    /// True if the game ended in a tie.
    pub tie: bool,
    /// Player number to move next while playing.
    pub next_player: Option<u8>,
    /// Finish-screen message.
    pub message: String,
    /// Grid rendering of the final board.
    #[serde(skip)]
    pub grid: String,
}

impl ReplayReport {
    /// Human-readable summary.
    pub fn render_text(&self) -> String {
        let mut out = format!("{}\n\n", self.grid);
        match (self.winner, self.tie, self.next_player) {
            (Some(winner), _, _) => {
                out.push_str(&format!("Player {} wins: {}\n", winner, self.message))
            }
            (None, true, _) => out.push_str(&format!("Tie: {}\n", self.message)),
            (None, false, Some(next)) => {
                out.push_str(&format!("In progress, player {} to move\n", next))
            }
            (None, false, None) => {}
        }
        for skipped in &self.ignored {
            out.push_str(&format!(
                "Ignored move {}: {}\n",
                skipped.turn + 1,
                skipped.reason
            ));
        }
        out
    }
}

/// Parses a move list such as `0,3,1` or `center top-left`.
#[instrument]
pub fn parse_moves(input: &str) -> Result<Vec<Position>, ReplayError> {
    let moves = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            Position::from_label_or_number(token)
                .ok_or_else(|| ReplayError::new(format!("Unknown position '{}'", token)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    if moves.is_empty() {
        return Err(ReplayError::new("No moves given".to_string()));
    }
    debug!(count = moves.len(), "Parsed moves");
    Ok(moves)
}

/// Plays `moves` on a fresh game and reports where it ended.
#[instrument(skip(config))]
pub fn run_replay(moves: &[Position], config: &BoxesConfig) -> ReplayReport {
    let mut game = GameController::with_messages(ViewState::new(), config.game_messages());
    game.start_game();

    let mut ignored = Vec::new();
    for (turn, pos) in moves.iter().copied().enumerate() {
        if let Claim::Ignored(reason) = game.claim(pos) {
            ignored.push(IgnoredMove {
                turn,
                position: pos,
                reason: reason.to_string(),
            });
        }
    }

    let board = game
        .board()
        .cells()
        .iter()
        .map(|cell| cell.owner().map(|p| config.mark(p).to_string()))
        .collect::<Vec<_>>();
    let grid = game
        .board()
        .display([config.mark(Player::One), config.mark(Player::Two)]);

    let phase = game.phase();
    let outcome = phase.outcome();
    info!(?phase, ignored = ignored.len(), "Replay finished");

    ReplayReport {
        claimed: game.history().to_vec(),
        ignored,
        board,
        phase: match phase {
            GamePhase::Finished(_) => "finished".to_string(),
            _ => "playing".to_string(),
        },
        winner: outcome.and_then(|o| o.winner()).map(|p| p.number()),
        tie: outcome.is_some_and(|o| o.is_tie()),
        next_player: phase.is_playing().then(|| game.active_player().number()),
        message: game.surface().message().clone(),
        grid,
    }
}

/// Replay input error.
#[derive(Debug, Clone, Display, Error)]
#[display("Replay error: {} at {}:{}", message, file, line)]
pub struct ReplayError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ReplayError {
    /// Creates a new replay error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
