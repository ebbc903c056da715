//! LineQuill - a single-line modal text editor for the terminal.
//!
//! The user edits one pre-seeded line with vi-style keys and gets the final
//! text back when they press Enter. Normal mode adds comma-aware field motions
//! (`w`, `e`, `b`) for editing CSV records.
//!
//! ```no_run
//! let line = linequill::edit("name,email,age").unwrap();
//! println!("{}", line);
//! ```

pub mod config;
pub mod editor;
pub mod error;
pub mod input;
pub mod session;
pub mod ui;

pub use error::EditError;
pub use session::edit;
