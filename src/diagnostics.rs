//! Unified diagnostics for the report pipeline.
//!
//! Every failure mode is a `ReportError` variant. None of them are
//! recovered: any error aborts the run before output is produced, and the
//! CLI renders it through `miette::Report`.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all report pipeline failure modes.
#[derive(Debug, Error, Diagnostic)]
pub enum ReportError {
    #[error("failed to read {}", path.display())]
    #[diagnostic(code(report::io))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}", path.display())]
    #[diagnostic(code(report::io))]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: not a valid JSON document", path.display())]
    #[diagnostic(code(report::parse))]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("duplicate test name '{name}' in catalog")]
    #[diagnostic(
        code(report::duplicate_test),
        help("test names are the join key and must be unique in the catalog")
    )]
    DuplicateTest { name: String },

    #[error("results reference unknown test '{name}'")]
    #[diagnostic(
        code(report::unknown_test),
        help("every result must name a test present in the catalog")
    )]
    UnknownTest { name: String },

    #[error("test '{name}' carries unrecognized outcome '{value}'")]
    #[diagnostic(
        code(report::unknown_outcome),
        help("expected one of PASSED, FAILED, EXPECTED_FAILURE, UNKNOWN")
    )]
    UnknownOutcome { name: String, value: String },
}

/// Prints a `ReportError` with full miette diagnostics.
///
/// Use this for user-facing error display in the CLI.
pub fn print_error(error: ReportError) {
    use miette::Report;
    let report = Report::new(error);
    eprintln!("{report:?}");
}
