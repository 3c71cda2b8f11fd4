//! opspace: normalize operator and comma spacing in a source file

use anyhow::Result;
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    opspace::cli::run()
}
