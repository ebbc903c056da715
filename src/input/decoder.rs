//! Byte-stream decoder that turns raw terminal input into key events.
//!
//! Arrow keys arrive as three bytes (`ESC [ C` and `ESC [ D`). The decoder
//! keeps just enough state to recognise them and hands every other byte
//! straight through [`classify_byte`]. It never fails: malformed sequences
//! decode to [`KeyEvent::Ignored`], and every byte moves the state machine
//! exactly one step.
//!
//! A lone ESC can only be told apart from the start of an arrow sequence once
//! the following byte arrives. When that byte is not `[`, the decoder reports
//! [`KeyEvent::Escape`] together with whatever the byte decodes to on its own.
//!
//! # Example
//!
//! ```
//! use linequill::input::decoder::{DecodeResult, KeyDecoder};
//! use linequill::input::keys::KeyEvent;
//!
//! let mut decoder = KeyDecoder::new();
//! assert_eq!(decoder.next(0x1b), DecodeResult::Pending);
//! assert_eq!(decoder.next(b'['), DecodeResult::Pending);
//! assert_eq!(decoder.next(b'C'), DecodeResult::Emit(KeyEvent::ArrowRight));
//!
//! // Escape followed by `h`
//! assert_eq!(decoder.next(0x1b), DecodeResult::Pending);
//! assert_eq!(
//!     decoder.next(b'h'),
//!     DecodeResult::EmitTwo(KeyEvent::Escape, KeyEvent::Char('h'))
//! );
//! ```

use super::keys::{classify_byte, KeyEvent, ESC};

/// Escape-sequence progress inside the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PendingEscape {
    /// No sequence in progress.
    #[default]
    Idle,
    /// Saw `ESC`.
    SawEscape,
    /// Saw `ESC [`.
    SawBracket,
}

/// Outcome of feeding one byte to the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeResult {
    /// The sequence is incomplete; feed the next byte.
    Pending,
    /// One key event was produced.
    Emit(KeyEvent),
    /// A lone Escape followed by the event for the byte after it.
    EmitTwo(KeyEvent, KeyEvent),
}

impl DecodeResult {
    /// Returns the produced events in order.
    pub fn events(self) -> impl Iterator<Item = KeyEvent> {
        let (first, second) = match self {
            DecodeResult::Pending => (None, None),
            DecodeResult::Emit(event) => (Some(event), None),
            DecodeResult::EmitTwo(first, second) => (Some(first), Some(second)),
        };
        first.into_iter().chain(second)
    }
}

/// Three-state escape sequence decoder.
#[derive(Debug, Default)]
pub struct KeyDecoder {
    state: PendingEscape,
}

impl KeyDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current escape-sequence state.
    pub fn state(&self) -> PendingEscape {
        self.state
    }

    /// Drops any partial sequence.
    pub fn reset(&mut self) {
        self.state = PendingEscape::Idle;
    }

    /// Feeds one byte and advances the state machine by one transition.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self, byte: u8) -> DecodeResult {
        match (self.state, byte) {
            (PendingEscape::Idle, ESC) => {
                self.state = PendingEscape::SawEscape;
                DecodeResult::Pending
            }
            (PendingEscape::Idle, b) => DecodeResult::Emit(classify_byte(b)),
            (PendingEscape::SawEscape, b'[') => {
                self.state = PendingEscape::SawBracket;
                DecodeResult::Pending
            }
            // The first ESC was a key press; the second may start a sequence
            (PendingEscape::SawEscape, ESC) => DecodeResult::Emit(KeyEvent::Escape),
            (PendingEscape::SawEscape, b) => {
                self.state = PendingEscape::Idle;
                DecodeResult::EmitTwo(KeyEvent::Escape, classify_byte(b))
            }
            (PendingEscape::SawBracket, b) => {
                self.state = PendingEscape::Idle;
                DecodeResult::Emit(match b {
                    b'C' => KeyEvent::ArrowRight,
                    b'D' => KeyEvent::ArrowLeft,
                    _ => KeyEvent::Ignored,
                })
            }
        }
    }
}
