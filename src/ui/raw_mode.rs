//! Scoped raw terminal mode.
//!
//! [`enter`] saves the current terminal settings and switches stdout's
//! terminal to raw mode (no echo, no line buffering). The settings are put
//! back when the returned guard is dropped, on every exit path including `?`
//! propagation and unwinding.

use std::io::{self, Stdout, Write};

use termion::raw::{IntoRawMode, RawTerminal};

/// Raw-mode terminal handle; also the writer the renderer draws to.
pub struct RawModeGuard {
    terminal: RawTerminal<Stdout>,
}

/// Switches the terminal to raw mode.
///
/// # Errors
///
/// Fails if stdout is not a terminal or its attributes cannot be changed.
pub fn enter() -> io::Result<RawModeGuard> {
    let terminal = io::stdout().into_raw_mode()?;
    tracing::debug!("raw mode entered");
    Ok(RawModeGuard { terminal })
}

impl RawModeGuard {
    /// Flushes pending output and restores the saved terminal settings.
    ///
    /// Dropping the guard restores them too; this only makes the point of
    /// release explicit and reports the flush error.
    ///
    /// # Errors
    ///
    /// Returns the flush error, if any. The settings are restored regardless.
    pub fn restore(mut self) -> io::Result<()> {
        let flushed = self.terminal.flush();
        drop(self);
        flushed
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        // RawTerminal's own Drop resets the termios right after this
        tracing::debug!("raw mode released");
    }
}

impl Write for RawModeGuard {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.terminal.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.terminal.flush()
    }
}
