//! Tic-tac-toe game logic with a pluggable presentation surface.
//!
//! # Architecture
//!
//! - **Controller**: [`GameController`] owns the board, the turn and the phase
//! - **Rules**: pure win/tie evaluation over a [`Board`]
//! - **Surface**: the output seam; [`ViewState`] records it for front ends
//! - **Invariants**: properties checked after every claim in debug builds
//!
//! # Example
//!
//! ```
//! use strictly_boxes_core::{GameController, Outcome, Player, Position, ViewState};
//!
//! let mut game = GameController::new(ViewState::new());
//! game.start_game();
//! for pos in [0, 3, 1, 4, 2] {
//!     let _ = game.claim(Position::ALL[pos]);
//! }
//! assert_eq!(game.phase().outcome(), Some(Outcome::Win(Player::One)));
//! assert_eq!(game.surface().message(), "Winner");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod controller;
mod event;
pub mod invariants;
mod messages;
mod phases;
mod position;
pub mod rules;
mod surface;
mod types;
mod view;

pub use action::{Claim, Ignored};
pub use controller::GameController;
pub use event::{PointerEvent, Target};
pub use messages::{Messages, PLAYER_PLACEHOLDER};
pub use phases::{GamePhase, Outcome};
pub use position::Position;
pub use surface::{NullSurface, Screen, Surface};
pub use types::{AlreadyClaimed, Board, Cell, Player};
pub use view::ViewState;
