//! Pointer input consumed by the controller.
//!
//! Front ends translate whatever they receive (mouse, keys) into these
//! events; the controller decides what they mean by matching on the target.

use crate::position::Position;
use serde::{Deserialize, Serialize};

/// What the pointer is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Target {
    /// A button carrying the new-game intent.
    NewGame,
    /// A board cell.
    Cell(Position),
    /// Anything else.
    Elsewhere,
}

/// A pointer event on a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointerEvent {
    /// Click, tap or Enter.
    Activated(Target),
    /// Pointer moved onto the target.
    Entered(Target),
    /// Pointer moved off the target.
    Left(Target),
}
