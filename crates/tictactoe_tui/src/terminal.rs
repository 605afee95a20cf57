//! Terminal setup and teardown.

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
};
use ratatui::DefaultTerminal;
use std::io;
use tracing::{info, warn};

/// Runs a restore action when dropped, including while unwinding.
///
/// Create it before touching the terminal so every exit path after that
/// point, early returns and panics included, leaves the terminal usable.
pub struct RestoreGuard<F: FnMut()> {
    restore: Option<F>,
}

impl<F: FnMut()> RestoreGuard<F> {
    /// Arms the guard with `restore`.
    pub fn new(restore: F) -> Self {
        Self {
            restore: Some(restore),
        }
    }
}

impl<F: FnMut()> Drop for RestoreGuard<F> {
    fn drop(&mut self) {
        if let Some(mut restore) = self.restore.take() {
            restore();
        }
    }
}

/// Enters raw mode and the alternate screen, then enables mouse capture.
///
/// `ratatui` also installs a panic hook that restores the screen before the
/// panic message prints.
pub fn init() -> io::Result<DefaultTerminal> {
    let terminal = ratatui::try_init()?;
    execute!(io::stdout(), EnableMouseCapture)?;
    info!("Terminal initialized");
    Ok(terminal)
}

/// Undoes [`init`]. Safe to call more than once.
pub fn restore() {
    if let Err(err) = execute!(io::stdout(), DisableMouseCapture) {
        warn!(error = %err, "Failed to disable mouse capture");
    }
    ratatui::restore();
    info!("Terminal restored");
}
