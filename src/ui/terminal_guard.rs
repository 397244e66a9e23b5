//! Terminal state guard that restores the terminal on drop.

use anyhow::Result;
use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// RAII guard for raw mode and the alternate screen.
///
/// Restores the terminal on normal exit, on `?` early returns, and (through
/// `install_panic_hook`) on panics.
pub struct TerminalGuard {
    restored: bool,
}

impl TerminalGuard {
    /// Enter raw mode and the alternate screen
    pub fn enter() -> Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(Self { restored: false })
    }

    /// Restore now instead of waiting for drop
    pub fn restore(&mut self) {
        if !self.restored {
            self.restored = true;
            Self::reset_terminal();
        }
    }

    pub fn is_restored(&self) -> bool {
        self.restored
    }

    /// Best-effort terminal reset; errors are ignored because there is
    /// nowhere left to report them
    pub fn reset_terminal() {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
        let _ = io::stdout().flush();
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.restore();
    }
}

/// Reset the terminal before the default panic output is printed
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        TerminalGuard::reset_terminal();
        original_hook(panic_info);
    }));
}
