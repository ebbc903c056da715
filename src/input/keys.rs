//! Key event types and single-byte classification.

use crate::editor::buffer::is_printable;

/// Byte that starts an escape sequence (and is the Escape key on its own).
pub const ESC: u8 = 0x1b;
/// Delete, sent by the backspace key on most terminals.
pub const DEL: u8 = 0x7f;
/// Ctrl-H, sent by the backspace key on some terminals.
pub const CTRL_H: u8 = 0x08;

/// A decoded key press.
///
/// These are the only events the editor understands. Anything the decoder
/// cannot make sense of becomes [`KeyEvent::Ignored`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    /// A printable ASCII character
    Char(char),
    /// Enter / Return
    Enter,
    /// Backspace
    Backspace,
    /// A lone Escape key
    Escape,
    /// Left arrow (`ESC [ D`)
    ArrowLeft,
    /// Right arrow (`ESC [ C`)
    ArrowRight,
    /// Unknown byte or unsupported escape sequence
    Ignored,
}

/// Classifies a byte that is not part of an escape sequence.
///
/// Raw mode disables CR to NL translation, so both `\r` and `\n` count as Enter.
///
/// # Example
///
/// ```
/// use linequill::input::keys::{classify_byte, KeyEvent};
///
/// assert_eq!(classify_byte(b'x'), KeyEvent::Char('x'));
/// assert_eq!(classify_byte(b'\n'), KeyEvent::Enter);
/// assert_eq!(classify_byte(b'\r'), KeyEvent::Enter);
/// assert_eq!(classify_byte(0x7f), KeyEvent::Backspace);
/// assert_eq!(classify_byte(0x03), KeyEvent::Ignored);
/// assert_eq!(classify_byte(0xc3), KeyEvent::Ignored);
/// ```
pub fn classify_byte(byte: u8) -> KeyEvent {
    match byte {
        b'\n' | b'\r' => KeyEvent::Enter,
        DEL | CTRL_H => KeyEvent::Backspace,
        b if is_printable(b) => KeyEvent::Char(char::from(b)),
        _ => KeyEvent::Ignored,
    }
}
