//! The modal editor state machine.
//!
//! `ModalEditor` owns the line, the cursor, and the current mode. It consumes
//! one [`KeyEvent`] at a time and applies the binding for the active mode.
//! Nothing here performs I/O; the session loop reads keys and redraws.

use super::buffer::{LineBuffer, DEFAULT_CAPACITY};
use super::mode::EditorMode;
use super::motion;
use crate::error::{validate_seed, EditError};
use crate::input::keys::KeyEvent;

/// What the caller should do after an event has been handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorSignal {
    /// Keep reading keys.
    Continue,
    /// Enter was pressed; the buffer holds the final text.
    Done,
}

/// Single-line vi-style editor.
///
/// # Example
///
/// ```
/// use linequill::editor::mode::EditorMode;
/// use linequill::editor::state::{EditorSignal, ModalEditor};
/// use linequill::input::keys::KeyEvent;
///
/// let mut editor = ModalEditor::new("a,b,c").unwrap();
/// assert_eq!(editor.mode(), EditorMode::Insert);
/// assert_eq!(editor.cursor(), 5);
///
/// editor.handle(KeyEvent::Escape);
/// editor.handle(KeyEvent::Char('0'));
/// editor.handle(KeyEvent::Char('w'));
/// assert_eq!(editor.cursor(), 2);
///
/// editor.handle(KeyEvent::Char('x'));
/// assert_eq!(editor.text(), "a,,c");
/// assert_eq!(editor.handle(KeyEvent::Enter), EditorSignal::Done);
/// ```
#[derive(Debug, Clone)]
pub struct ModalEditor {
    buffer: LineBuffer,
    cursor: usize,
    mode: EditorMode,
    /// Set when Insert mode was left on the previous key.
    insert_exit_mark: Option<usize>,
}

impl ModalEditor {
    /// Creates an editor seeded with `seed` and the default capacity.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::NonAsciiInput`] if the seed has a byte >= 0x80.
    pub fn new(seed: &str) -> Result<Self, EditError> {
        Self::with_capacity(seed, DEFAULT_CAPACITY)
    }

    /// Creates an editor seeded with `seed` holding at most `capacity` characters.
    ///
    /// The cursor starts past the end of the seed in Insert mode.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::NonAsciiInput`] if the seed has a byte >= 0x80.
    pub fn with_capacity(seed: &str, capacity: usize) -> Result<Self, EditError> {
        validate_seed(seed)?;
        let buffer = LineBuffer::from_seed(seed, capacity);
        Ok(Self {
            cursor: buffer.len(),
            buffer,
            mode: EditorMode::Insert,
            insert_exit_mark: None,
        })
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn buffer(&self) -> &LineBuffer {
        &self.buffer
    }

    pub fn text(&self) -> &str {
        self.buffer.as_str()
    }

    /// Cursor position recorded when Insert mode was last left, if the next
    /// arrow key has not consumed it yet.
    pub fn insert_exit_mark(&self) -> Option<usize> {
        self.insert_exit_mark
    }

    pub fn into_text(self) -> String {
        self.buffer.into_string()
    }

    /// Applies one key event.
    pub fn handle(&mut self, event: KeyEvent) -> EditorSignal {
        if event == KeyEvent::Enter {
            tracing::debug!(text = %self.buffer, "enter pressed, finishing edit");
            return EditorSignal::Done;
        }
        match self.mode {
            EditorMode::Normal => self.handle_normal(event),
            EditorMode::Insert => self.handle_insert(event),
        }
        debug_assert!(self.cursor <= self.mode.max_cursor(self.buffer.len()));
        EditorSignal::Continue
    }

    fn handle_normal(&mut self, event: KeyEvent) {
        let c = match event {
            KeyEvent::ArrowLeft | KeyEvent::ArrowRight => {
                self.normal_arrow(event);
                return;
            }
            KeyEvent::Char(c) => c,
            _ => {
                self.insert_exit_mark = None;
                return;
            }
        };
        self.insert_exit_mark = None;

        let len = self.buffer.len();
        let last = len.saturating_sub(1);
        match c {
            'i' => self.enter_insert(self.cursor),
            'a' => self.enter_insert((self.cursor + 1).min(len)),
            'I' => self.enter_insert(0),
            'A' => self.enter_insert(len),
            'h' => self.cursor = self.cursor.saturating_sub(1),
            'l' => {
                if self.cursor < last {
                    self.cursor += 1;
                }
            }
            '0' | '^' => self.cursor = 0,
            '$' => self.cursor = last,
            'w' => self.cursor = motion::next_field_start(self.buffer.as_bytes(), self.cursor),
            'e' => self.cursor = motion::next_field_end(self.buffer.as_bytes(), self.cursor),
            'b' => self.cursor = motion::prev_field_start(self.buffer.as_bytes(), self.cursor),
            'x' => self.delete_under_cursor(),
            _ => {}
        }
    }

    /// Arrow keys in Normal mode.
    ///
    /// Right after leaving Insert mode the arrows may still reach the column
    /// past the last character, and they drop back into Insert mode.
    fn normal_arrow(&mut self, event: KeyEvent) {
        let resume_insert = self.insert_exit_mark.take().is_some();
        let bound = if resume_insert {
            self.buffer.len()
        } else {
            self.buffer.len().saturating_sub(1)
        };
        match event {
            KeyEvent::ArrowLeft => self.cursor = self.cursor.saturating_sub(1),
            KeyEvent::ArrowRight if self.cursor < bound => self.cursor += 1,
            _ => {}
        }
        if resume_insert {
            self.enter_insert(self.cursor);
        }
    }

    fn handle_insert(&mut self, event: KeyEvent) {
        match event {
            KeyEvent::Escape => {
                self.cursor = self.cursor.saturating_sub(1);
                self.insert_exit_mark = Some(self.cursor);
                self.mode = EditorMode::Normal;
                tracing::debug!(cursor = self.cursor, "insert -> normal");
            }
            KeyEvent::Backspace => {
                if self.cursor > 0 && self.buffer.delete_at(self.cursor - 1).is_ok() {
                    self.cursor -= 1;
                }
            }
            KeyEvent::Char(c) => match self.buffer.insert_at(self.cursor, c) {
                Ok(()) => self.cursor += 1,
                Err(err) => tracing::trace!(%err, "dropped typed character"),
            },
            KeyEvent::ArrowLeft => self.cursor = self.cursor.saturating_sub(1),
            KeyEvent::ArrowRight => {
                if self.cursor < self.buffer.len() {
                    self.cursor += 1;
                }
            }
            KeyEvent::Enter | KeyEvent::Ignored => {}
        }
    }

    fn enter_insert(&mut self, cursor: usize) {
        self.cursor = cursor;
        self.mode = EditorMode::Insert;
        tracing::debug!(cursor, "normal -> insert");
    }

    fn delete_under_cursor(&mut self) {
        if self.buffer.delete_at(self.cursor).is_ok() && self.cursor >= self.buffer.len() {
            self.cursor = self.cursor.saturating_sub(1);
        }
    }
}
