//! Defines the command-line arguments for the report tool.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::Parser;
use std::path::PathBuf;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "nes-test-report",
    version,
    about = "Convert JSON test results to HTML"
)]
pub struct ReportArgs {
    /// Path to JSON test data.
    #[arg(required = true)]
    pub tests: PathBuf,

    /// Path to JSON results.
    #[arg(required = true)]
    pub results: PathBuf,

    /// HTML file to write; standard output if omitted.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
