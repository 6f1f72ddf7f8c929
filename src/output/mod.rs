//! Output formatting for calculation results.
//!
//! - [`terminal`] - terminal output with colors
//! - [`clipboard`] - copy targets for the result text block

mod clipboard;
mod terminal;

pub use clipboard::{copy_result, Clipboard, FileClipboard, StdoutClipboard};
pub use terminal::{format_label, render_error, render_feedback, render_presets, render_result};
