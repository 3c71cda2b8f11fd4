//! opspace: normalize operator and comma spacing in a source file
//!
//! A purely textual formatter. It applies an ordered list of regex
//! substitutions to a whole file and writes the result back in place.

pub mod cli;
pub mod error;
pub mod file;
pub mod format;

pub use error::FormatError;
pub use file::{format_file, FormatOutcome, WriteMode};
pub use format::format_source;
