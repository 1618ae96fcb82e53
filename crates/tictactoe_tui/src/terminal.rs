//! Terminal setup and guaranteed teardown.

use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io::{self, Write};
use tracing::{debug, warn};

/// Leaves raw mode and the alternate screen, and shows the cursor again.
///
/// Both steps are attempted even if the first fails; the first error wins.
pub fn restore<W: Write>(out: &mut W) -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(out, LeaveAlternateScreen, Show);
    raw.and(screen)
}

/// Restores the terminal when dropped, including while unwinding.
pub struct TerminalGuard<W: Write> {
    out: W,
}

impl<W: Write> TerminalGuard<W> {
    /// Wraps `out` without touching terminal modes.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Enables raw mode and enters the alternate screen on `out`.
    ///
    /// The guard exists before the alternate screen is entered, so a
    /// failure there still restores raw mode.
    pub fn enter(out: W) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut guard = Self::new(out);
        execute!(guard.out, EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        if let Err(err) = restore(&mut self.out) {
            warn!(error = %err, "Failed to restore terminal");
        }
    }
}

/// Restores the terminal before the default panic message is printed.
pub fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore(&mut io::stdout());
        previous(info);
    }));
}
