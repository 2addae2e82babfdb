//! Terminal ownership: raw mode, the alternate screen, and the input thread.

use std::io::Stdout;
use std::io::stdout;

use crossterm::event::Event;
use crossterm::event::KeyEventKind;
use crossterm::execute;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::app_event::AppEvent;
use crate::app_event_sender::AppEventSender;

/// Owns the terminal for the lifetime of the UI and restores it on drop,
/// including on error paths.
pub(crate) struct Tui {
    pub(crate) terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl Tui {
    pub(crate) fn new() -> std::io::Result<Self> {
        enable_raw_mode()?;
        execute!(stdout(), EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
        Ok(Self { terminal })
    }

    /// Best-effort restore; errors here have nowhere useful to go.
    pub(crate) fn restore() {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), LeaveAlternateScreen);
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        Self::restore();
    }
}

/// Forward crossterm input to the app channel from a dedicated thread. The
/// thread ends with the process; a read error stops forwarding.
pub(crate) fn spawn_input_thread(tx: AppEventSender) {
    std::thread::spawn(move || {
        loop {
            match crossterm::event::read() {
                Ok(Event::Key(key)) if key.kind != KeyEventKind::Release => {
                    tx.send(AppEvent::Key(key));
                }
                Ok(Event::Resize(_, _)) => tx.send(AppEvent::Resize),
                Ok(_) => {}
                Err(err) => {
                    tracing::error!("input thread terminating: {err}");
                    break;
                }
            }
        }
    });
}
