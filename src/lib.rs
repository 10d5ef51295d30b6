//! Strictly Boxes - two-player tic-tac-toe in the terminal.
//!
//! The game itself lives in [`strictly_boxes_core`]; this crate adds the
//! terminal front end, configuration and a headless replay mode.
//!
//! # Example
//!
//! ```
//! use strictly_boxes::{BoxesConfig, parse_moves, run_replay};
//!
//! let moves = parse_moves("0,3,1,4,2")?;
//! let report = run_replay(&moves, &BoxesConfig::default());
//! assert_eq!(report.winner, Some(1));
//! # Ok::<(), strictly_boxes::ReplayError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod replay;
mod tui;

pub use cli::{Cli, Command};
pub use config::{BoxesConfig, ConfigError, LoggingConfig, MessagesConfig, PlayersConfig};
pub use replay::{IgnoredMove, ReplayError, ReplayReport, parse_moves, run_replay};
pub use tui::{App, Flow, ScreenLayout, run_tui};
