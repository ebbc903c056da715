//! Edit sessions: validation, the key loop, and terminal setup.
//!
//! [`Session::run`] is the loop itself and takes its collaborators as
//! arguments, so it can be driven from a byte slice in tests. [`edit`] and
//! [`edit_interactive`] wire it to the real terminal.

use std::io::{self, Read};

use crate::config::Config;
use crate::editor::state::{EditorSignal, ModalEditor};
use crate::error::EditError;
use crate::input::decoder::KeyDecoder;
use crate::input::handler::InputHandler;
use crate::ui::{raw_mode, Renderer, TerminalRenderer};

/// One line being edited.
#[derive(Debug)]
pub struct Session {
    editor: ModalEditor,
    decoder: KeyDecoder,
}

impl Session {
    /// Validates `initial` and prepares an editor for it.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::NonAsciiInput`] if `initial` has a byte >= 0x80.
    pub fn new(initial: &str, config: &Config) -> Result<Self, EditError> {
        let editor = ModalEditor::with_capacity(initial, config.capacity).inspect_err(|err| {
            tracing::warn!(%err, "rejected initial text");
        })?;
        Ok(Self {
            editor,
            decoder: KeyDecoder::new(),
        })
    }

    pub fn editor(&self) -> &ModalEditor {
        &self.editor
    }

    /// Runs the key loop until Enter and returns the final line.
    ///
    /// The renderer is called once before the first read and again after
    /// every decoded key, whether or not the key changed anything.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::Terminal`] if reading or drawing fails, including
    /// when the input ends before Enter.
    ///
    /// # Example
    ///
    /// ```
    /// use linequill::config::Config;
    /// use linequill::session::Session;
    /// use linequill::ui::TerminalRenderer;
    ///
    /// let session = Session::new("a,b", &Config::default()).unwrap();
    /// let mut renderer = TerminalRenderer::new(Vec::new());
    /// // Escape, `x` deletes the `b`, Enter
    /// let text = session.run(&b"\x1bx\n"[..], &mut renderer).unwrap();
    /// assert_eq!(text, "a,");
    /// ```
    pub fn run<R: Read, D: Renderer>(
        mut self,
        mut input: R,
        renderer: &mut D,
    ) -> Result<String, EditError> {
        tracing::debug!(text = self.editor.text(), "edit session started");
        self.redraw(renderer)?;

        loop {
            let byte = read_byte(&mut input)?;
            for event in self.decoder.next(byte).events() {
                tracing::trace!(?event, "key");
                let signal = self.editor.handle(event);
                self.redraw(renderer)?;
                if signal == EditorSignal::Done {
                    renderer.finish()?;
                    tracing::debug!(text = self.editor.text(), "edit session finished");
                    return Ok(self.editor.into_text());
                }
            }
        }
    }

    fn redraw<D: Renderer>(&self, renderer: &mut D) -> io::Result<()> {
        renderer.draw(
            self.editor.mode(),
            self.editor.buffer(),
            self.editor.cursor(),
        )
    }
}

/// Edits `initial` on the controlling terminal with default settings.
///
/// Keys are read from stdin and the line is drawn on stdout.
///
/// # Errors
///
/// Returns [`EditError::NonAsciiInput`] without touching the terminal if
/// `initial` is not ASCII, or [`EditError::Terminal`] on I/O failure.
pub fn edit(initial: &str) -> Result<String, EditError> {
    edit_interactive(initial, &Config::default(), InputHandler::new())
}

/// Edits `initial` on the terminal using `config` and the given key source.
///
/// Raw mode is entered only after the text has been validated, and is left
/// again before this returns, on success or failure.
///
/// # Errors
///
/// Same as [`edit`].
pub fn edit_interactive(
    initial: &str,
    config: &Config,
    input: InputHandler,
) -> Result<String, EditError> {
    let session = Session::new(initial, config)?;
    let guard = raw_mode::enter()?;
    let mut renderer = TerminalRenderer::with_marker(guard, config.insert_marker.as_str());
    let text = session.run(input, &mut renderer)?;
    renderer.into_inner().restore()?;
    Ok(text)
}

/// Reads exactly one byte, retrying on interruption.
fn read_byte<R: Read>(reader: &mut R) -> io::Result<u8> {
    let mut byte = [0u8; 1];
    loop {
        match reader.read(&mut byte) {
            Ok(0) => {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input closed before Enter was pressed",
                ))
            }
            Ok(_) => return Ok(byte[0]),
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_byte_in_order() {
        let mut input: &[u8] = b"ab";
        assert_eq!(read_byte(&mut input).unwrap(), b'a');
        assert_eq!(read_byte(&mut input).unwrap(), b'b');
    }

    #[test]
    fn test_read_byte_eof() {
        let mut input: &[u8] = b"";
        let err = read_byte(&mut input).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_edit_rejects_non_ascii_before_terminal() {
        // Fails during validation, so no raw mode is needed for this test
        let err = edit("Gr\u{fc}\u{df}e").unwrap_err();
        assert!(matches!(
            err,
            EditError::NonAsciiInput {
                position: 2,
                byte: 0xC3
            }
        ));
    }
}
