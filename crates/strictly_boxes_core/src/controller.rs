//! The game controller.
//!
//! One [`GameController`] owns a game session: the board, whose turn it is,
//! the phase, and the surface it reports to.

use crate::action::{Claim, Ignored};
use crate::event::{PointerEvent, Target};
use crate::messages::Messages;
use crate::phases::{GamePhase, Outcome};
use crate::position::Position;
use crate::rules;
use crate::surface::{NullSurface, Screen, Surface};
use crate::types::{Board, Player};
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument};

/// Tic-tac-toe state machine driving a [`Surface`].
#[derive(Debug, Clone)]
pub struct GameController<S: Surface = NullSurface> {
    pub(crate) board: Board,
    pub(crate) active: Player,
    pub(crate) phase: GamePhase,
    pub(crate) history: Vec<Position>,
    hovered: Option<Position>,
    messages: Messages,
    surface: S,
}

impl Default for GameController<NullSurface> {
    fn default() -> Self {
        Self::new(NullSurface)
    }
}

impl<S: Surface> GameController<S> {
    /// Creates a controller on the start screen with default messages.
    pub fn new(surface: S) -> Self {
        Self::with_messages(surface, Messages::default())
    }

    /// Creates a controller on the start screen.
    ///
    /// The surface is brought in line with the fresh state right away.
    #[instrument(skip_all)]
    pub fn with_messages(surface: S, messages: Messages) -> Self {
        let mut controller = Self {
            board: Board::new(),
            active: Player::One,
            phase: GamePhase::Start,
            history: Vec::new(),
            hovered: None,
            messages,
            surface,
        };
        controller.surface.set_screen_visible(Screen::Start, true);
        controller.surface.set_screen_visible(Screen::Board, false);
        controller.surface.set_screen_visible(Screen::Finish, false);
        controller.paint_badges();
        controller
    }

    /// Builds a controller, starts a game and claims `moves` in order.
    ///
    /// Moves that would be ignored during play are skipped the same way.
    #[instrument(skip(surface))]
    pub fn replay(surface: S, moves: &[Position]) -> Self {
        let mut controller = Self::new(surface);
        controller.start_game();
        for pos in moves {
            let _ = controller.claim(*pos);
        }
        controller
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    pub fn active_player(&self) -> Player {
        self.active
    }

    /// Returns the current phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Positions claimed so far, in order.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Cell currently showing a hover marker.
    pub fn hovered(&self) -> Option<Position> {
        self.hovered
    }

    /// Returns the finish-screen texts.
    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    /// Returns the surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Consumes the controller, returning its surface.
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Handles the new-game intent: shows the board and hides the other screens.
    ///
    /// A finished game is reset first. While playing, only the screen flags
    /// are re-applied.
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn start_game(&mut self) {
        match self.phase {
            GamePhase::Finished(_) => self.reset_game(),
            GamePhase::Start => info!("Starting first game"),
            GamePhase::Playing => debug!("Game already in progress"),
        }
        self.phase = GamePhase::Playing;

        self.surface.set_screen_visible(Screen::Start, false);
        self.surface.set_screen_visible(Screen::Finish, false);
        self.surface.set_screen_visible(Screen::Board, true);
    }

    /// Empties the board and hands the turn back to player one.
    ///
    /// Clears the outcome tag and message and hides the finish screen. A
    /// finished game goes back to playing; other phases are left alone.
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn reset_game(&mut self) {
        self.board.clear();
        self.history.clear();
        self.active = Player::One;
        self.hovered = None;

        for pos in Position::iter() {
            self.surface.set_cell_claimed(pos, None);
            self.surface.set_hover_marker(pos, None);
        }
        self.paint_badges();
        self.surface.set_finish_outcome(None);
        self.surface.set_message("");
        self.surface.set_screen_visible(Screen::Finish, false);

        if let GamePhase::Finished(outcome) = self.phase {
            info!(%outcome, "Resetting finished game");
            self.phase = GamePhase::Playing;
        }
    }

    /// Shows the active player's marker over an empty cell.
    ///
    /// Ignored on claimed cells and outside play. Only one cell carries a
    /// marker at a time.
    #[instrument(skip(self))]
    pub fn preview_hover(&mut self, pos: Position) {
        if !self.phase.is_playing() || !self.board.is_empty(pos) {
            debug!("No hover preview");
            return;
        }
        if let Some(previous) = self.hovered.filter(|p| *p != pos) {
            self.surface.set_hover_marker(previous, None);
        }
        self.hovered = Some(pos);
        self.surface.set_hover_marker(pos, Some(self.active));
    }

    /// Removes the hover marker from `pos` if it has one.
    #[instrument(skip(self))]
    pub fn clear_hover(&mut self, pos: Position) {
        if self.hovered == Some(pos) {
            self.hovered = None;
            self.surface.set_hover_marker(pos, None);
        }
    }

    /// Claims `pos` for the active player.
    ///
    /// Ignored outside play and on claimed cells. On success the turn passes
    /// to the other player and the board is evaluated. A preview left on
    /// another cell switches to the new active player, or is removed once
    /// the game is over.
    #[instrument(skip(self), fields(player = ?self.active))]
    pub fn claim(&mut self, pos: Position) -> Claim {
        if !self.phase.is_playing() {
            debug!(reason = %Ignored::NotPlaying, "Claim ignored");
            return Claim::Ignored(Ignored::NotPlaying);
        }

        let by = self.active;
        if let Err(taken) = self.board.claim(pos, by) {
            let reason = Ignored::CellClaimed(taken.position);
            debug!(%reason, "Claim ignored");
            return Claim::Ignored(reason);
        }
        self.history.push(pos);
        self.surface.set_cell_claimed(pos, Some(by));
        self.clear_hover(pos);

        self.active = by.opponent();
        self.paint_badges();

        let outcome = self.evaluate();
        self.repaint_hover();

        #[cfg(debug_assertions)]
        self.assert_invariants();

        match outcome {
            Some(outcome) => Claim::Finished { by, outcome },
            None => Claim::Continued {
                by,
                next: self.active,
            },
        }
    }

    fn repaint_hover(&mut self) {
        let Some(pos) = self.hovered else {
            return;
        };
        if self.phase.is_playing() {
            self.surface.set_hover_marker(pos, Some(self.active));
        } else {
            self.clear_hover(pos);
        }
    }

    /// Checks the board for a win, then for a tie.
    ///
    /// A terminal result finishes the game: the board is hidden and the
    /// finish screen shows the message and outcome tag. Returns the outcome
    /// of a finished game without touching the surface again.
    #[instrument(skip(self))]
    pub fn evaluate(&mut self) -> Option<Outcome> {
        match self.phase {
            GamePhase::Finished(outcome) => return Some(outcome),
            GamePhase::Start => return None,
            GamePhase::Playing => {}
        }

        let outcome = rules::evaluate(&self.board)?;
        let message = match outcome {
            Outcome::Win(winner) => self.messages.win_for(winner),
            Outcome::Tie => self.messages.tie.clone(),
        };
        info!(%outcome, moves = self.history.len(), "Game finished");

        self.phase = GamePhase::Finished(outcome);
        self.surface.set_finish_outcome(Some(outcome));
        self.surface.set_message(&message);
        self.surface.set_screen_visible(Screen::Board, false);
        self.surface.set_screen_visible(Screen::Finish, true);
        Some(outcome)
    }

    /// Routes a pointer event by its target.
    #[instrument(skip(self))]
    pub fn handle(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Activated(Target::NewGame) => self.start_game(),
            PointerEvent::Activated(Target::Cell(pos)) => {
                let _ = self.claim(pos);
            }
            PointerEvent::Entered(Target::Cell(pos)) => self.preview_hover(pos),
            PointerEvent::Left(Target::Cell(pos)) => self.clear_hover(pos),
            other => debug!(?other, "Event ignored"),
        }
    }

    #[cfg(debug_assertions)]
    fn assert_invariants(&self) {
        use crate::invariants::{GameInvariants, InvariantSet};
        use tracing::warn;

        if let Err(violations) = GameInvariants::check_all(self) {
            for violation in &violations {
                warn!(invariant = %violation.description, "Invariant violated");
            }
            panic!("Game invariants violated after claim");
        }
    }

    fn paint_badges(&mut self) {
        for player in Player::iter() {
            self.surface.set_player_active(player, player == self.active);
        }
    }
}
