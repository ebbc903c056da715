//! Editor mode management for modal editing.
//!
//! This module provides the `EditorMode` enum that represents the current editing
//! mode of the line editor. Following vim-style modal editing, the editor is in
//! one of two modes, each with its own keybindings and legal cursor range.
//!
//! # Modes
//!
//! - **Normal**: Motions and commands (`h`, `l`, `w`, `x`, ...). The cursor
//!   always sits on a character.
//! - **Insert**: Printable keys are inserted at the cursor. The cursor may sit
//!   one column past the last character.
//!
//! # Example
//!
//! ```
//! use linequill::editor::mode::EditorMode;
//!
//! // A session starts in Insert mode so the seeded text can be appended to
//! let mode = EditorMode::default();
//! assert_eq!(mode, EditorMode::Insert);
//! assert_eq!(format!("{}", mode), "INSERT");
//!
//! let mode = EditorMode::Normal;
//! assert_eq!(format!("{}", mode), "NORMAL");
//! ```

use std::fmt;

/// Represents the current editing mode of the editor.
///
/// The mode decides which key-binding table is active. It is also shown to the
/// user: the renderer prints a bold marker while in Insert mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorMode {
    /// Normal mode for cursor motions and single-key commands.
    Normal,
    /// Insert mode for typing text at the cursor; every session starts here.
    #[default]
    Insert,
}

impl EditorMode {
    /// Returns the largest legal cursor index for a line of length `len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linequill::editor::mode::EditorMode;
    ///
    /// assert_eq!(EditorMode::Insert.max_cursor(5), 5);
    /// assert_eq!(EditorMode::Normal.max_cursor(5), 4);
    /// assert_eq!(EditorMode::Normal.max_cursor(0), 0);
    /// ```
    pub fn max_cursor(self, len: usize) -> usize {
        match self {
            EditorMode::Insert => len,
            EditorMode::Normal => len.saturating_sub(1),
        }
    }
}

impl fmt::Display for EditorMode {
    /// Formats the mode as an uppercase string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditorMode::Normal => write!(f, "NORMAL"),
            EditorMode::Insert => write!(f, "INSERT"),
        }
    }
}
