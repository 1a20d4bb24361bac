//! Terminal session guard.

use std::io::{self, Stdout};
use std::ops::{Deref, DerefMut};

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

/// Terminal type alias.
pub type Term = Terminal<CrosstermBackend<Stdout>>;

/// Raw-mode terminal on the alternate screen, restored on drop.
///
/// Restoration must not depend on the main loop returning cleanly, so
/// it lives in `Drop` rather than in a teardown function.
pub struct TerminalSession {
    terminal: Term,
}

impl TerminalSession {
    pub fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.clear()?;

        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

impl Deref for TerminalSession {
    type Target = Term;

    fn deref(&self) -> &Term {
        &self.terminal
    }
}

impl DerefMut for TerminalSession {
    fn deref_mut(&mut self) -> &mut Term {
        &mut self.terminal
    }
}
