//! Terminal UI for Word Scramble.

mod app;
mod ui;

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use tracing::{error, info, instrument};
use word_scramble_core::Dictionary;

pub use app::App;

/// Runs the terminal UI until the player quits.
///
/// Sets up the terminal, runs the event loop, and restores the terminal on
/// exit even if the loop fails.
#[instrument(skip(app), fields(root_word = %app.session().root_word()))]
pub fn run_tui<D: Dictionary>(mut app: App<D>) -> Result<()> {
    info!("Starting Word Scramble TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(score = app.session().score(), "Word Scramble TUI exited");
    res
}

/// Draws and dispatches key presses until the app asks to quit.
#[instrument(skip_all)]
fn run_app<B, D>(terminal: &mut Terminal<B>, app: &mut App<D>) -> Result<()>
where
    B: Backend,
    <B as Backend>::Error: Send + Sync + 'static,
    D: Dictionary,
{
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if *app.should_quit() {
            return Ok(());
        }

        // Poll with a short timeout to keep the loop responsive.
        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
        {
            // Skip key release events (crossterm fires both press and release).
            if key.kind == KeyEventKind::Release {
                continue;
            }
            app.handle_key(key);
        }
    }
}
