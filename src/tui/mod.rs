//! Terminal UI: the interactive view layer.

mod app;
mod input;
mod ui;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use timewarp_tictactoe::TuiConfig;
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

use app::App;

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Runs the interactive game until the user quits.
pub fn run_tui(config: TuiConfig) -> Result<()> {
    // Log to a file so output does not tear the alternate screen.
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!("Starting terminal UI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut terminal = match setup_terminal() {
        Ok(terminal) => terminal,
        Err(err) => {
            // Never hand the shell back in raw mode.
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
            return Err(err);
        }
    };

    let res = run_app(&mut terminal, App::new(), Duration::from_millis(*config.poll_interval_ms()));

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Terminal UI closed");
    res
}

/// Enters the alternate screen and wraps stdout in a terminal.
fn setup_terminal() -> Result<Tui> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    Terminal::new(CrosstermBackend::new(stdout)).context("Failed to create terminal")
}

/// Draw, wait for a key, dispatch; one event at a time.
#[instrument(skip_all)]
fn run_app(terminal: &mut Tui, mut app: App, poll_interval: Duration) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(poll_interval)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code);
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
