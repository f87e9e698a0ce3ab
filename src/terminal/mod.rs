//! Terminal ownership for the catalog TUI.
//!
//! [`TerminalManager`] puts the terminal into raw/alternate-screen mode and
//! puts it back on drop. [`install_panic_hook`] covers the path where a
//! panic unwinds past the manager.

mod panic;
mod setup;

pub use panic::install_panic_hook;
pub use setup::{emergency_restore, enter_tui_mode, leave_tui_mode};

use color_eyre::Result;
use crossterm::terminal::enable_raw_mode;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};

pub type CatalogTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Owns the ratatui terminal; restores the shell when dropped.
pub struct TerminalManager {
    terminal: CatalogTerminal,
    restored: bool,
}

impl TerminalManager {
    /// Enable raw mode, enter the alternate screen and clear it.
    pub fn new() -> Result<Self> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        if let Err(err) = enter_tui_mode(&mut stdout) {
            leave_tui_mode(&mut stdout);
            return Err(err.into());
        }

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.clear()?;

        Ok(Self {
            terminal,
            restored: false,
        })
    }

    pub fn terminal(&mut self) -> &mut CatalogTerminal {
        &mut self.terminal
    }

    /// Restore the terminal now. Later calls (and drop) are no-ops.
    pub fn restore(&mut self) -> Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;
        leave_tui_mode(self.terminal.backend_mut());
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for TerminalManager {
    fn drop(&mut self) {
        if !self.restored {
            self.restored = true;
            leave_tui_mode(self.terminal.backend_mut());
        }
    }
}
