//! Origin descriptor attached to every recorded failure.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// Identifies where a check ran: the owning test and suite plus the source
/// location of the check itself.
///
/// Details are plain values. They are cloned into whatever records a
/// failure and never mutated afterwards; [`TestDetails::at_line`] returns a
/// new value instead of editing in place.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TestDetails {
    /// Name of the test that owns the check.
    pub test_name: String,
    /// Name of the suite the test belongs to.
    pub suite_name: String,
    /// Source file containing the check.
    pub filename: String,
    /// Source line of the check.
    pub line_number: u32,
}

impl TestDetails {
    /// Creates details for a test declared at `filename:line_number`.
    pub fn new(
        test_name: impl Into<String>,
        suite_name: impl Into<String>,
        filename: impl Into<String>,
        line_number: u32,
    ) -> Self {
        Self {
            test_name: test_name.into(),
            suite_name: suite_name.into(),
            filename: filename.into(),
            line_number,
        }
    }

    /// Returns a copy of these details pointing at another source line.
    pub fn at_line(&self, line_number: u32) -> Self {
        Self {
            line_number,
            ..self.clone()
        }
    }
}

impl Display for TestDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}: {}::{}",
            self.filename, self.line_number, self.suite_name, self.test_name
        )
    }
}
