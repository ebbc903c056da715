//! Blocking byte source for keyboard input.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, Read, Stdin};

/// Where keyboard bytes come from.
enum ByteSource {
    /// Reading from stdin
    Stdin(Stdin),
    /// Reading from /dev/tty (when stdin was piped)
    Tty(File),
}

/// Keyboard byte source for an interactive session.
///
/// Reads block until the user presses a key. The session pulls one byte at a
/// time through the [`Read`] impl and decodes it.
pub struct InputHandler {
    source: ByteSource,
}

impl InputHandler {
    /// Creates a new InputHandler that reads from stdin.
    pub fn new() -> Self {
        Self {
            source: ByteSource::Stdin(io::stdin()),
        }
    }

    /// Creates a new InputHandler that reads from /dev/tty.
    /// Use this when stdin has been consumed for piped data.
    pub fn new_with_tty() -> Result<Self> {
        let tty_file = termion::get_tty().context("Failed to open /dev/tty for keyboard input")?;

        Ok(Self {
            source: ByteSource::Tty(tty_file),
        })
    }
}

impl Read for InputHandler {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match &mut self.source {
            ByteSource::Stdin(stdin) => stdin.read(buf),
            ByteSource::Tty(tty) => tty.read(buf),
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
