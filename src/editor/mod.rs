//! Editor state and mode management.
//!
//! This module provides the core line-editing functionality. It follows vim-style
//! modal editing with Normal and Insert modes over a single line of ASCII text.
//!
//! # Modules
//!
//! - `buffer`: Fixed-capacity line storage with bounds-checked insert/delete
//! - `mode`: Editor mode enumeration
//! - `motion`: Comma-separated field motions (`w`, `e`, `b`)
//! - `state`: The modal key-binding state machine
//!
//! # Example
//!
//! ```
//! use linequill::editor::mode::EditorMode;
//!
//! // Editor starts in Insert mode
//! let mode = EditorMode::default();
//! assert_eq!(mode, EditorMode::Insert);
//! ```

pub mod buffer;
pub mod mode;
pub mod motion;
pub mod state;

pub use buffer::LineBuffer;
pub use mode::EditorMode;
pub use state::{EditorSignal, ModalEditor};
