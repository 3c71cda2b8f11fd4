//! Read a document, format it, and persist the result.

use crate::error::{FormatError, Result};
use crate::format::format_source;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Where the formatted document goes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteMode {
    /// Overwrite the file, even when nothing changed.
    #[default]
    InPlace,
    /// Print the formatted text and leave the file alone.
    Stdout,
    /// Write nothing; only report whether the file would change.
    Check,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOutcome {
    pub path: PathBuf,
    pub changed: bool,
}

/// Format the file at `path`.
///
/// The file is read fully and transformed in memory before anything is
/// written, so a read or formatting failure leaves it untouched.
pub fn format_file(path: &Path, mode: WriteMode) -> Result<FormatOutcome> {
    let original = fs::read_to_string(path)
        .map_err(|source| FormatError::Read { path: path.to_path_buf(), source })?;
    debug!(path = %path.display(), bytes = original.len(), "read document");

    let formatted = format_source(&original)?;
    let changed = formatted != original;

    match mode {
        WriteMode::InPlace => {
            fs::write(path, &formatted)
                .map_err(|source| FormatError::Write { path: path.to_path_buf(), source })?;
            debug!(path = %path.display(), changed, "wrote document");
        }
        WriteMode::Stdout => print!("{formatted}"),
        WriteMode::Check => {}
    }

    Ok(FormatOutcome { path: path.to_path_buf(), changed })
}
