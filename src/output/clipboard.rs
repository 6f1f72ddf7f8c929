//! Clipboard targets for the copy action.
//!
//! A terminal has no portable system clipboard, so the copy block goes to
//! stdout or to a file. Copy failures are logged and otherwise ignored.

use crate::models::CalculationResult;
use std::error::Error;
use std::io::Write;
use std::path::PathBuf;

/// Somewhere the copy block can be written.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), Box<dyn Error>>;
}

/// Prints the copy block between marker lines.
#[derive(Debug, Default)]
pub struct StdoutClipboard;

impl Clipboard for StdoutClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), Box<dyn Error>> {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "-----8<-----\n{text}\n----->8-----")?;
        stdout.flush()?;
        Ok(())
    }
}

/// Overwrites a file with the copy block on every copy.
#[derive(Debug, Clone)]
pub struct FileClipboard {
    pub path: PathBuf,
}

impl FileClipboard {
    pub fn new(path: impl Into<PathBuf>) -> FileClipboard {
        FileClipboard { path: path.into() }
    }
}

impl Clipboard for FileClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), Box<dyn Error>> {
        std::fs::write(&self.path, format!("{text}\n"))
            .map_err(|e| format!("Error writing clipboard file {}: {e}", self.path.display()))?;
        log::debug!("Copied result to {}", self.path.display());
        Ok(())
    }
}

/// Copy a result's text block. Returns whether the copy went through.
pub fn copy_result(clipboard: &mut dyn Clipboard, result: &CalculationResult) -> bool {
    match clipboard.write_text(&result.clipboard_text()) {
        Ok(()) => true,
        Err(e) => {
            log::warn!("Copy to clipboard failed, ignoring: {e}");
            false
        }
    }
}
