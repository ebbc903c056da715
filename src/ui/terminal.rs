//! Two-line terminal renderer built on termion escape codes.
//!
//! Layout:
//!
//! ```text
//! Hello, world!␠        <- the line, plus one cell for an appending cursor
//! -- INSERT --          <- bold marker, blank in Normal mode
//! ```
//!
//! Every draw starts from the line row, rewrites both rows, then moves the
//! cursor back up to column `cursor` of the line row.

use std::io::{self, Write};

use termion::{clear, cursor, style};

use super::Renderer;
use crate::editor::buffer::LineBuffer;
use crate::editor::mode::EditorMode;

/// Marker shown under the line while in Insert mode.
pub const DEFAULT_INSERT_MARKER: &str = "-- INSERT --";

/// Renders the editor to any writer, usually a raw-mode terminal.
///
/// # Example
///
/// ```
/// use linequill::editor::buffer::LineBuffer;
/// use linequill::editor::mode::EditorMode;
/// use linequill::ui::{Renderer, TerminalRenderer};
///
/// let mut renderer = TerminalRenderer::new(Vec::new());
/// let buffer = LineBuffer::from_seed("abc", 16);
/// renderer.draw(EditorMode::Normal, &buffer, 1).unwrap();
///
/// let output = String::from_utf8(renderer.into_inner()).unwrap();
/// assert!(output.contains("abc "));
/// assert!(!output.contains("INSERT"));
/// ```
#[derive(Debug)]
pub struct TerminalRenderer<W: Write> {
    out: W,
    insert_marker: String,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self::with_marker(out, DEFAULT_INSERT_MARKER)
    }

    pub fn with_marker(out: W, insert_marker: impl Into<String>) -> Self {
        Self {
            out,
            insert_marker: insert_marker.into(),
        }
    }

    pub fn insert_marker(&self) -> &str {
        &self.insert_marker
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn draw(&mut self, mode: EditorMode, buffer: &LineBuffer, cursor_pos: usize) -> io::Result<()> {
        write!(self.out, "\r{}{} ", clear::CurrentLine, buffer)?;
        write!(self.out, "\r\n{}", clear::CurrentLine)?;
        if mode == EditorMode::Insert {
            write!(self.out, "{}{}{}", style::Bold, self.insert_marker, style::Reset)?;
        }
        write!(self.out, "{}\r", cursor::Up(1))?;
        // ESC[0C still moves one column on some terminals
        if cursor_pos > 0 {
            let columns = u16::try_from(cursor_pos).unwrap_or(u16::MAX);
            write!(self.out, "{}", cursor::Right(columns))?;
        }
        self.out.flush()
    }

    fn finish(&mut self) -> io::Result<()> {
        write!(self.out, "\r\n{}", clear::CurrentLine)?;
        self.out.flush()
    }
}
