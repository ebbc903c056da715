//! Keyboard input: byte sources, escape-sequence decoding and key events.

pub mod decoder;
pub mod handler;
pub mod keys;

pub use decoder::{DecodeResult, KeyDecoder};
pub use handler::InputHandler;
pub use keys::KeyEvent;
