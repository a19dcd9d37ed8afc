//! Record types for the two input documents and the joined form the
//! renderer consumes.

use std::collections::HashSet;

use serde::Deserialize;

/// A catalog entry: the test's unique name plus its tag set.
#[derive(Debug, Clone, Deserialize)]
pub struct TestRecord {
    pub name: String,
    pub tags: HashSet<String>,
}

/// A results entry as it appears on the wire.
///
/// The outcome stays a plain string at this stage so an unrecognized value
/// can be reported against the record that carried it, rather than failing
/// the whole document parse.
#[derive(Debug, Clone, Deserialize)]
pub struct ResultRecord {
    pub name: String,
    pub result: String,
}

/// The four recognized test outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    Failed,
    ExpectedFailure,
    Unknown,
}

impl Outcome {
    /// Parses a wire-format outcome string. Anything outside the four known
    /// values yields `None`; callers decide how to fail.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "PASSED" => Some(Self::Passed),
            "FAILED" => Some(Self::Failed),
            "EXPECTED_FAILURE" => Some(Self::ExpectedFailure),
            "UNKNOWN" => Some(Self::Unknown),
            _ => None,
        }
    }

    /// The label shown in the result cell.
    pub fn label(self) -> &'static str {
        match self {
            Self::Passed => "Pass",
            Self::Failed => "Failed",
            Self::ExpectedFailure => "Failed (expected)",
            Self::Unknown => "Unknown",
        }
    }

    /// Result cell background color.
    pub fn background(self) -> &'static str {
        match self {
            Self::Passed => "lightgreen",
            Self::Failed | Self::ExpectedFailure => "pink",
            Self::Unknown => "yellow",
        }
    }

    /// Result cell foreground color. Always black today; kept alongside the
    /// other two so the whole triple lives in one place.
    pub fn foreground(self) -> &'static str {
        "black"
    }
}

/// A result joined to its catalog entry. Borrows the catalog record, never
/// copies it; lives only for the duration of one render.
#[derive(Debug, Clone, Copy)]
pub struct JoinedResult<'a> {
    pub name: &'a str,
    pub outcome: Outcome,
    pub test: &'a TestRecord,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_parses_all_four_wire_values() {
        assert_eq!(Outcome::parse("PASSED"), Some(Outcome::Passed));
        assert_eq!(Outcome::parse("FAILED"), Some(Outcome::Failed));
        assert_eq!(
            Outcome::parse("EXPECTED_FAILURE"),
            Some(Outcome::ExpectedFailure)
        );
        assert_eq!(Outcome::parse("UNKNOWN"), Some(Outcome::Unknown));
    }

    #[test]
    fn outcome_rejects_anything_else() {
        assert_eq!(Outcome::parse("passed"), None);
        assert_eq!(Outcome::parse("SKIPPED"), None);
        assert_eq!(Outcome::parse(""), None);
    }

    #[test]
    fn label_triples_match_the_fixed_table() {
        assert_eq!(Outcome::Passed.label(), "Pass");
        assert_eq!(Outcome::Passed.background(), "lightgreen");

        assert_eq!(Outcome::Failed.label(), "Failed");
        assert_eq!(Outcome::ExpectedFailure.label(), "Failed (expected)");
        assert_eq!(Outcome::Failed.background(), "pink");
        assert_eq!(Outcome::ExpectedFailure.background(), "pink");

        assert_eq!(Outcome::Unknown.label(), "Unknown");
        assert_eq!(Outcome::Unknown.background(), "yellow");

        for outcome in [
            Outcome::Passed,
            Outcome::Failed,
            Outcome::ExpectedFailure,
            Outcome::Unknown,
        ] {
            assert_eq!(outcome.foreground(), "black");
        }
    }
}
