//! Fixed-capacity line storage.
//!
//! `LineBuffer` holds the single line being edited. It only ever contains
//! printable ASCII (`0x20..=0x7E`), so byte indices and character indices are
//! the same thing and the cursor can be a plain `usize`.
//!
//! # Example
//!
//! ```
//! use linequill::editor::buffer::LineBuffer;
//!
//! let mut buffer = LineBuffer::new(8);
//! buffer.insert_at(0, 'b').unwrap();
//! buffer.insert_at(0, 'a').unwrap();
//! assert_eq!(buffer.as_str(), "ab");
//!
//! assert_eq!(buffer.delete_at(0), Ok('a'));
//! assert_eq!(buffer.as_str(), "b");
//! ```

use std::fmt;

/// Default number of usable characters in a line.
pub const DEFAULT_CAPACITY: usize = 1023;

/// Errors returned by [`LineBuffer`] mutations.
///
/// The editor treats all of these as no-ops; they never reach the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferError {
    /// The buffer already holds `capacity` characters.
    Full,
    /// The index is past the end of the buffer.
    OutOfRange { index: usize, len: usize },
    /// The character is outside the printable ASCII range.
    Unprintable(char),
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BufferError::Full => write!(f, "Line buffer is full"),
            BufferError::OutOfRange { index, len } => {
                write!(f, "Index {} out of range for line of length {}", index, len)
            }
            BufferError::Unprintable(c) => {
                write!(f, "Character {:?} is not printable ASCII", c)
            }
        }
    }
}

impl std::error::Error for BufferError {}

/// Returns true if `byte` may be stored in a [`LineBuffer`].
pub fn is_printable(byte: u8) -> bool {
    (0x20..=0x7E).contains(&byte)
}

/// An ordered, bounded sequence of printable ASCII characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineBuffer {
    text: String,
    capacity: usize,
}

impl LineBuffer {
    /// Creates an empty buffer holding at most `capacity` characters.
    pub fn new(capacity: usize) -> Self {
        Self {
            text: String::with_capacity(capacity),
            capacity,
        }
    }

    /// Creates a buffer seeded with the printable bytes of `seed`.
    ///
    /// Control bytes are skipped. If the printable part of the seed is longer
    /// than `capacity`, the capacity grows to fit it.
    ///
    /// # Example
    ///
    /// ```
    /// use linequill::editor::buffer::LineBuffer;
    ///
    /// let buffer = LineBuffer::from_seed("a,b\n", 16);
    /// assert_eq!(buffer.as_str(), "a,b");
    /// assert_eq!(buffer.capacity(), 16);
    ///
    /// let buffer = LineBuffer::from_seed("abcdef", 4);
    /// assert_eq!(buffer.capacity(), 6);
    /// ```
    pub fn from_seed(seed: &str, capacity: usize) -> Self {
        let text: String = seed
            .bytes()
            .filter(|b| is_printable(*b))
            .map(char::from)
            .collect();
        let capacity = capacity.max(text.len());
        Self { text, capacity }
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.text.len() >= self.capacity
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Returns the character at `index`, if any.
    pub fn char_at(&self, index: usize) -> Option<char> {
        self.text.as_bytes().get(index).map(|b| char::from(*b))
    }

    /// Inserts `c` at `index`, shifting everything after it one place right.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::Unprintable`] for characters outside
    /// `0x20..=0x7E`, [`BufferError::OutOfRange`] if `index > len`, and
    /// [`BufferError::Full`] if the buffer is at capacity.
    pub fn insert_at(&mut self, index: usize, c: char) -> Result<(), BufferError> {
        if !c.is_ascii() || !is_printable(c as u8) {
            return Err(BufferError::Unprintable(c));
        }
        if index > self.text.len() {
            return Err(BufferError::OutOfRange {
                index,
                len: self.text.len(),
            });
        }
        if self.is_full() {
            return Err(BufferError::Full);
        }
        self.text.insert(index, c);
        Ok(())
    }

    /// Removes and returns the character at `index`, shifting the tail left.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::OutOfRange`] if `index >= len`.
    pub fn delete_at(&mut self, index: usize) -> Result<char, BufferError> {
        if index >= self.text.len() {
            return Err(BufferError::OutOfRange {
                index,
                len: self.text.len(),
            });
        }
        Ok(self.text.remove(index))
    }

    /// Consumes the buffer and returns its text.
    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for LineBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_shifts_tail_right() {
        let mut buffer = LineBuffer::from_seed("ac", 10);
        buffer.insert_at(1, 'b').unwrap();
        assert_eq!(buffer.as_str(), "abc");
        buffer.insert_at(3, 'd').unwrap();
        assert_eq!(buffer.as_str(), "abcd");
    }

    #[test]
    fn test_insert_when_full() {
        let mut buffer = LineBuffer::from_seed("abc", 3);
        assert_eq!(buffer.insert_at(1, 'x'), Err(BufferError::Full));
        assert_eq!(buffer.as_str(), "abc");
    }

    #[test]
    fn test_insert_out_of_range() {
        let mut buffer = LineBuffer::from_seed("ab", 10);
        assert_eq!(
            buffer.insert_at(5, 'x'),
            Err(BufferError::OutOfRange { index: 5, len: 2 })
        );
    }

    #[test]
    fn test_insert_rejects_unprintable() {
        let mut buffer = LineBuffer::new(10);
        assert_eq!(buffer.insert_at(0, '\t'), Err(BufferError::Unprintable('\t')));
        assert_eq!(buffer.insert_at(0, 'é'), Err(BufferError::Unprintable('é')));
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_delete_shifts_tail_left() {
        let mut buffer = LineBuffer::from_seed("abc", 10);
        assert_eq!(buffer.delete_at(1), Ok('b'));
        assert_eq!(buffer.as_str(), "ac");
    }

    #[test]
    fn test_delete_from_empty() {
        let mut buffer = LineBuffer::new(10);
        assert_eq!(
            buffer.delete_at(0),
            Err(BufferError::OutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn test_from_seed_drops_control_bytes() {
        let buffer = LineBuffer::from_seed("\ta\x7fb\r\n", 10);
        assert_eq!(buffer.as_str(), "ab");
    }

    #[test]
    fn test_error_display() {
        assert_eq!(BufferError::Full.to_string(), "Line buffer is full");
        assert_eq!(
            BufferError::OutOfRange { index: 4, len: 2 }.to_string(),
            "Index 4 out of range for line of length 2"
        );
    }
}
