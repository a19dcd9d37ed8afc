//! Loading of the two JSON documents and the name-keyed join between them.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::diagnostics::ReportError;
use crate::model::{JoinedResult, Outcome, ResultRecord, TestRecord};

/// Loads the test catalog document: a JSON array of `{name, tags}` records.
pub fn load_catalog(path: &Path) -> Result<Vec<TestRecord>, ReportError> {
    load_json(path)
}

/// Loads the results document: a JSON array of `{name, result}` records.
pub fn load_results(path: &Path) -> Result<Vec<ResultRecord>, ReportError> {
    load_json(path)
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, ReportError> {
    let text = fs::read_to_string(path).map_err(|source| ReportError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| ReportError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// The test catalog indexed by name.
#[derive(Debug)]
pub struct Catalog<'a> {
    by_name: HashMap<&'a str, &'a TestRecord>,
}

impl<'a> Catalog<'a> {
    /// Indexes the catalog by test name.
    ///
    /// Duplicate names are rejected outright rather than letting a later
    /// entry silently shadow an earlier one.
    pub fn index(tests: &'a [TestRecord]) -> Result<Self, ReportError> {
        let mut by_name = HashMap::with_capacity(tests.len());
        for test in tests {
            if by_name.insert(test.name.as_str(), test).is_some() {
                return Err(ReportError::DuplicateTest {
                    name: test.name.clone(),
                });
            }
        }
        Ok(Self { by_name })
    }

    /// Attaches a result to its catalog entry.
    ///
    /// An unknown name or outcome is a hard failure, not a skip; catalog and
    /// results drifting apart must never produce a partial report.
    pub fn join(&self, result: &'a ResultRecord) -> Result<JoinedResult<'a>, ReportError> {
        let test = self
            .by_name
            .get(result.name.as_str())
            .copied()
            .ok_or_else(|| ReportError::UnknownTest {
                name: result.name.clone(),
            })?;
        let outcome =
            Outcome::parse(&result.result).ok_or_else(|| ReportError::UnknownOutcome {
                name: result.name.clone(),
                value: result.result.clone(),
            })?;
        Ok(JoinedResult {
            name: &result.name,
            outcome,
            test,
        })
    }
}
