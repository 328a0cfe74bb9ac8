//! Raw mode and alternate screen setup with guaranteed teardown

use std::io::{self, Write};

use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};

/// Holds the terminal in TUI mode until dropped
///
/// Created right after raw mode is enabled, so a failure later in setup or
/// an early return from the event loop still leaves a usable shell.
pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = Self { _private: () };
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = restore(&mut io::stdout()) {
            tracing::warn!(error = %e, "Failed to restore terminal");
        }
    }
}

/// Leave raw mode, the alternate screen and mouse capture; show the cursor
pub fn restore<W: Write>(out: &mut W) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(out, LeaveAlternateScreen, DisableMouseCapture, cursor::Show)
}

/// Restore the terminal before the default panic message is printed
pub fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore(&mut io::stdout());
        previous(info);
    }));
}
