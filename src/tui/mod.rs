//! Terminal front end: logging setup, terminal lifecycle and the event loop.

mod input;
pub mod layout;
mod regions;
mod ui;

pub use input::translate;
pub use regions::{Fragment, Region, RegionId, RegionMap, Tone};
pub use ui::draw;

use crate::config::Settings;
use crate::session::{Control, Session};
use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{DefaultTerminal, Terminal, backend::CrosstermBackend};
use std::io;
use std::ops::{Deref, DerefMut};
use std::time::Duration;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::EnvFilter;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Runs a game session until the player quits.
///
/// # Errors
///
/// Fails if the log file or the terminal cannot be set up, or if the
/// session hits a board invariant breach. The terminal is restored in
/// every case.
pub async fn run_tui(settings: Settings) -> Result<()> {
    init_logging(&settings)?;
    info!("Starting clicktoe");

    let mut terminal = TerminalGuard::new().context("Failed to initialize terminal")?;
    let size = terminal.size()?;
    let mut session = Session::new(&settings, size.width, size.height);

    let res = event_loop(&mut terminal, &mut session).await;
    drop(terminal);

    if let Err(err) = &res {
        error!(error = %err, "Event loop failed");
    }
    info!("Shut down");
    res
}

/// Sends log output to the configured file; the terminal belongs to the UI.
fn init_logging(settings: &Settings) -> Result<()> {
    let log_file = std::fs::File::create(settings.log_file()).with_context(|| {
        format!(
            "Failed to create log file {}",
            settings.log_file().display()
        )
    })?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}

#[instrument(skip_all)]
async fn event_loop(terminal: &mut DefaultTerminal, session: &mut Session) -> Result<()> {
    loop {
        terminal.draw(|frame| draw(frame, session.regions()))?;

        while let Some(event) = session.try_next_event() {
            if session.handle(event)? == Control::Quit {
                return Ok(());
            }
        }

        if event::poll(POLL_INTERVAL)? {
            let raw = event::read()?;
            if let Some(event) = translate(&raw, session.regions()) {
                debug!(?event, "Input");
                if session.handle(event)? == Control::Quit {
                    return Ok(());
                }
            }
        }

        tokio::task::yield_now().await;
    }
}

/// Raw mode, alternate screen and mouse capture for as long as it lives.
struct TerminalGuard {
    terminal: DefaultTerminal,
}

impl TerminalGuard {
    fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
        match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => Ok(Self { terminal }),
            Err(e) => {
                let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
                let _ = disable_raw_mode();
                Err(e.into())
            }
        }
    }
}

impl Deref for TerminalGuard {
    type Target = DefaultTerminal;

    fn deref(&self) -> &Self::Target {
        &self.terminal
    }
}

impl DerefMut for TerminalGuard {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );
        let _ = self.terminal.show_cursor();
    }
}
