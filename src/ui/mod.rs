//! Display side of an edit session.
//!
//! The editor never draws anything itself. After every key the session hands
//! the current `(mode, buffer, cursor)` triple to a [`Renderer`]. The terminal
//! implementation lives in [`terminal`], and [`raw_mode`] holds the guard that
//! keeps the terminal in raw mode for the length of the session.

pub mod raw_mode;
pub mod terminal;

use std::io;

use crate::editor::buffer::LineBuffer;
use crate::editor::mode::EditorMode;

pub use raw_mode::RawModeGuard;
pub use terminal::TerminalRenderer;

/// Draws the editor state. Implementations must not assume anything changed
/// between two calls.
pub trait Renderer {
    /// Redraws the line and the mode marker, then places the cursor.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    fn draw(&mut self, mode: EditorMode, buffer: &LineBuffer, cursor: usize) -> io::Result<()>;

    /// Called once after Enter, before the session returns.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn draw(&mut self, mode: EditorMode, buffer: &LineBuffer, cursor: usize) -> io::Result<()> {
        (**self).draw(mode, buffer, cursor)
    }

    fn finish(&mut self) -> io::Result<()> {
        (**self).finish()
    }
}
