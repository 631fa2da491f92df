//! Terminal lifecycle: raw mode, alternate screen, mouse capture.
//!
//! This is the only module with side effects beyond logging. It owns the
//! ratatui terminal and restores the host terminal on drop, so an early
//! return or panic never leaves the shell in raw mode.

use std::io::{self, Stdout};

use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::error::Error;

/// An active terminal session.
pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    /// Enter raw mode, the alternate screen, and mouse capture.
    pub fn new() -> Result<Self, Error> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal })
    }

    /// Draw one frame.
    pub fn draw(&mut self, render: impl FnOnce(&mut ratatui::Frame)) -> Result<(), Error> {
        self.terminal.draw(render)?;
        Ok(())
    }

    /// Block until the next input event.
    pub fn next_event(&mut self) -> Result<Event, Error> {
        Ok(event::read()?)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(err) = restore() {
            log::error!("failed to restore terminal: {err}");
        }
    }
}

/// Restore the host terminal to cooked mode. Safe to call more than once.
pub fn restore() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore();
        original_hook(panic_info);
    }));
}
