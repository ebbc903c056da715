use std::io;

use linequill::config::Config;
use linequill::editor::buffer::LineBuffer;
use linequill::editor::mode::EditorMode;
use linequill::session::Session;
use linequill::ui::{Renderer, TerminalRenderer};
use linequill::EditError;

/// Renderer that remembers every frame it was asked to draw.
#[derive(Default)]
struct RecordingRenderer {
    frames: Vec<(EditorMode, String, usize)>,
    finished: bool,
}

impl Renderer for RecordingRenderer {
    fn draw(&mut self, mode: EditorMode, buffer: &LineBuffer, cursor: usize) -> io::Result<()> {
        self.frames.push((mode, buffer.as_str().to_string(), cursor));
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        self.finished = true;
        Ok(())
    }
}

fn run(seed: &str, keys: &[u8]) -> (Result<String, EditError>, RecordingRenderer) {
    let mut renderer = RecordingRenderer::default();
    let session = Session::new(seed, &Config::default()).unwrap();
    let result = session.run(keys, &mut renderer);
    (result, renderer)
}

#[test]
fn test_enter_returns_seed_unchanged() {
    let (result, renderer) = run("Hello, world!", b"\n");
    assert_eq!(result.unwrap(), "Hello, world!");
    assert!(renderer.finished);
}

#[test]
fn test_draws_before_first_key_and_after_each_key() {
    let (result, renderer) = run("ab", b"c\n");
    assert_eq!(result.unwrap(), "abc");
    assert_eq!(
        renderer.frames,
        vec![
            (EditorMode::Insert, "ab".to_string(), 2),
            (EditorMode::Insert, "abc".to_string(), 3),
            (EditorMode::Insert, "abc".to_string(), 3),
        ]
    );
}

#[test]
fn test_no_op_keys_still_redraw() {
    // Backspace at column 0, then an unsupported escape sequence
    let (result, renderer) = run("", b"\x7f\x1b[A\r");
    assert_eq!(result.unwrap(), "");
    // initial + backspace + ignored + enter
    assert_eq!(renderer.frames.len(), 4);
}

#[test]
fn test_pending_bytes_do_not_redraw() {
    let (_, renderer) = run("ab", b"\x1b[D\n");
    // initial + arrow + enter
    assert_eq!(renderer.frames.len(), 3);
    assert_eq!(renderer.frames[1], (EditorMode::Insert, "ab".to_string(), 1));
}

#[test]
fn test_scenario_d_through_session() {
    let (result, _) = run("", b"ab\x7f\x7f\n");
    assert_eq!(result.unwrap(), "");
}

#[test]
fn test_escape_then_arrow_right_resumes_append() {
    // Escape, right arrow, then type
    let (result, renderer) = run("Hello, world!", b"\x1b\x1b[C?\n");
    assert_eq!(result.unwrap(), "Hello, world!?");
    assert!(renderer
        .frames
        .contains(&(EditorMode::Normal, "Hello, world!".to_string(), 12)));
}

#[test]
fn test_csv_edit_in_normal_mode() {
    // Escape, go to start, skip one field, delete it, insert a new one
    let (result, _) = run("id,old,x", b"\x1b0wxxxiNEW\r");
    assert_eq!(result.unwrap(), "id,NEW,x");
}

#[test]
fn test_eof_before_enter_is_an_error() {
    let (result, renderer) = run("abc", b"de");
    match result {
        Err(EditError::Terminal(err)) => assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof),
        other => panic!("expected EOF error, got {:?}", other),
    }
    assert!(!renderer.finished);
}

#[test]
fn test_non_ascii_seed_rejected_by_session() {
    let result = Session::new("na\u{ef}ve", &Config::default());
    assert!(matches!(
        result,
        Err(EditError::NonAsciiInput { position: 2, .. })
    ));
}

#[test]
fn test_new_session_starts_in_insert_at_end() {
    let session = Session::new("a,b", &Config::default()).unwrap();
    assert_eq!(session.editor().mode(), EditorMode::Insert);
    assert_eq!(session.editor().cursor(), 3);
    assert_eq!(session.editor().text(), "a,b");
}

#[test]
fn test_capacity_from_config() {
    let config = Config {
        capacity: 4,
        ..Config::default()
    };
    let session = Session::new("ab", &config).unwrap();
    assert_eq!(session.editor().buffer().capacity(), 4);
    let mut renderer = RecordingRenderer::default();
    let text = session.run(&b"cdef\n"[..], &mut renderer).unwrap();
    assert_eq!(text, "abcd");
}

#[test]
fn test_terminal_renderer_output() {
    let session = Session::new("x", &Config::default()).unwrap();
    let mut renderer = TerminalRenderer::with_marker(Vec::new(), "INS");
    let text = session.run(&b"\x1bh\n"[..], &mut renderer).unwrap();
    assert_eq!(text, "x");

    let output = String::from_utf8(renderer.into_inner()).unwrap();
    // Drawn in Insert mode first, Normal mode afterwards
    assert!(output.contains("INS"));
    assert!(output.contains("x "));
}
