//! The report tool's command-line interface.
//!
//! This module is the main entry point for the binary and orchestrates the
//! core library functions: load, join, categorize, render, write.

use std::fs;
use std::process;

use clap::Parser;

use crate::catalog::{self, Catalog};
use crate::cli::args::ReportArgs;
use crate::diagnostics::{print_error, ReportError};
use crate::render::render_report;
use crate::section::Report;

pub mod args;

/// The main entry point for the CLI.
pub fn run() {
    let args = ReportArgs::parse();

    if let Err(e) = generate(&args) {
        print_error(e);
        process::exit(1);
    }
}

/// Runs the whole pipeline for one invocation. A single forward pass; the
/// first failure aborts before any output is produced.
fn generate(args: &ReportArgs) -> Result<(), ReportError> {
    let tests = catalog::load_catalog(&args.tests)?;
    let results = catalog::load_results(&args.results)?;

    let catalog = Catalog::index(&tests)?;
    let report = Report::build(&catalog, &results)?;
    let html = render_report(&report);

    match &args.output {
        Some(path) => fs::write(path, &html).map_err(|source| ReportError::Write {
            path: path.clone(),
            source,
        })?,
        None => println!("{html}"),
    }

    Ok(())
}
