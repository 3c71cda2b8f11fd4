//! Command-line interface for opspace
//!
//! `opspace <path>` rewrites the file in place. Failures are printed to stdout;
//! only a missing path (and `--check` on an unformatted file) exits non-zero.

use anyhow::Result;
use clap::builder::TypedValueParser;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::file::{format_file, WriteMode};

pub const USAGE_MESSAGE: &str = "Please provide a file path";

/// Normalize operator and comma spacing in a source file
#[derive(Parser, Debug)]
#[command(name = "opspace")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// File to format in place
    #[arg(
        value_name = "PATH",
        allow_hyphen_values = true,
        value_parser = clap::builder::OsStringValueParser::new().map(PathBuf::from)
    )]
    path: Option<PathBuf>,

    /// Anything after the path is accepted and ignored.
    #[arg(hide = true)]
    rest: Vec<OsString>,

    /// Print the formatted text instead of overwriting the file
    #[arg(long, conflicts_with = "check")]
    stdout: bool,

    /// Exit with status 1 if the file would be reformatted; write nothing
    #[arg(long)]
    check: bool,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn write_mode(&self) -> WriteMode {
        if self.check {
            WriteMode::Check
        } else if self.stdout {
            WriteMode::Stdout
        } else {
            WriteMode::InPlace
        }
    }
}

pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    // An empty argument counts as missing.
    let Some(path) = cli.path.clone().filter(|p| !p.as_os_str().is_empty()) else {
        println!("{USAGE_MESSAGE}");
        return Ok(ExitCode::from(1));
    };

    if !cli.rest.is_empty() {
        debug!(count = cli.rest.len(), "ignoring arguments after the path");
    }

    let mode = cli.write_mode();
    match format_file(&path, mode) {
        Ok(outcome) if mode == WriteMode::Check && outcome.changed => {
            println!("{}: would reformat", outcome.path.display());
            Ok(ExitCode::from(1))
        }
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            // I/O failures are reported, not signalled through the exit status.
            error!(path = %path.display(), "{err}");
            println!("{err}");
            Ok(ExitCode::SUCCESS)
        }
    }
}
