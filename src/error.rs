//! Error types for formatting a file.

use std::io;
use std::path::PathBuf;

/// Failures that can occur while formatting a document.
///
/// A missing path argument is not represented here; the CLI rejects it before
/// any file is touched.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The lookaround engine gave up on a rule (backtrack limit).
    #[error("rule `{rule}` failed to match: {source}")]
    Pattern {
        rule: &'static str,
        #[source]
        source: fancy_regex::Error,
    },
}

pub type Result<T> = std::result::Result<T, FormatError>;
