//! Terminal UI for Strictly Boxes.

mod app;
mod input;
mod layout;
mod ui;

pub use app::{App, Flow};
pub use layout::ScreenLayout;

use crate::config::BoxesConfig;
use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend, layout::Rect};
use std::io::{self, Write};
use std::time::Duration;
use tracing::{error, info, instrument};

/// Runs the terminal UI until the user quits.
///
/// The terminal is restored before any error is returned.
#[instrument(skip_all)]
pub fn run_tui(config: BoxesConfig) -> Result<()> {
    info!("Starting Strictly Boxes TUI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    let res = on_alternate_screen(&mut stdout, |out| {
        let mut terminal =
            Terminal::new(CrosstermBackend::new(out)).context("Failed to create terminal")?;
        let mut app = App::new(config);
        run_loop(&mut terminal, &mut app)
    });
    let raw = disable_raw_mode().context("Failed to disable raw mode");

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res.and(raw)
}

/// Runs `body` on the alternate screen with mouse capture, then leaves it
/// again whether or not `body` succeeded.
fn on_alternate_screen<W: Write, T>(
    out: &mut W,
    body: impl FnOnce(&mut W) -> Result<T>,
) -> Result<T> {
    let res = execute!(out, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")
        .and_then(|()| body(out));
    let left = execute!(out, LeaveAlternateScreen, DisableMouseCapture, Show)
        .context("Failed to leave alternate screen");
    let value = res?;
    left?;
    Ok(value)
}

/// Draws, waits for one input event, hands it to the app.
fn run_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: std::error::Error + Send + Sync + 'static,
{
    loop {
        let mut area = Rect::default();
        terminal.draw(|f| {
            area = f.area();
            ui::draw(f, app);
        })?;

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }
        let flow = match event::read()? {
            // crossterm reports both press and release on some platforms.
            Event::Key(key) if key.kind != KeyEventKind::Release => app.handle_key(key),
            Event::Mouse(mouse) => {
                app.handle_mouse(mouse, area);
                Flow::Continue
            }
            _ => Flow::Continue,
        };

        if flow == Flow::Quit {
            return Ok(());
        }
    }
}
