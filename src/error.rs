//! Error types for an edit session.

use std::fmt;
use std::io;

/// Errors that end an edit session.
#[derive(Debug)]
pub enum EditError {
    /// The seed text contains a byte outside 7-bit ASCII.
    ///
    /// Raised before the terminal is touched.
    NonAsciiInput { position: usize, byte: u8 },
    /// The terminal could not be switched to raw mode, read from, or drawn to.
    Terminal(io::Error),
}

impl fmt::Display for EditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditError::NonAsciiInput { position, byte } => write!(
                f,
                "Non-ASCII byte 0x{:02X} at position {} in initial text",
                byte, position
            ),
            EditError::Terminal(err) => write!(f, "Terminal error: {}", err),
        }
    }
}

impl std::error::Error for EditError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EditError::NonAsciiInput { .. } => None,
            EditError::Terminal(err) => Some(err),
        }
    }
}

impl From<io::Error> for EditError {
    fn from(err: io::Error) -> Self {
        EditError::Terminal(err)
    }
}

/// Checks that `seed` contains only 7-bit bytes.
///
/// # Errors
///
/// Returns [`EditError::NonAsciiInput`] naming the first offending byte.
///
/// # Example
///
/// ```
/// use linequill::error::{validate_seed, EditError};
///
/// assert!(validate_seed("Hello, world!").is_ok());
/// assert!(matches!(
///     validate_seed("caf\u{e9}"),
///     Err(EditError::NonAsciiInput { position: 3, byte: 0xC3 })
/// ));
/// ```
pub fn validate_seed(seed: &str) -> Result<(), EditError> {
    match seed.bytes().enumerate().find(|(_, b)| *b >= 0x80) {
        Some((position, byte)) => Err(EditError::NonAsciiInput { position, byte }),
        None => Ok(()),
    }
}
