//! Outcome of one finished test.

use serde::{Deserialize, Serialize};
use tally_core::errors::{ErrorInfo, TallyError};
use tally_core::TestDetails;

/// A failed check inside a test: the check's line and its message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Failure {
    /// Source line of the failing check.
    pub line_number: u32,
    /// Finalized diagnostic text.
    pub message: String,
}

/// Buffered outcome of a single test.
///
/// Created once when the test finishes and read-only afterwards. The failed
/// flag is derived from the failures and cannot be set independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeferredTestResult {
    suite_name: String,
    test_name: String,
    filename: String,
    line_number: u32,
    failures: Vec<Failure>,
    time_elapsed: f64,
    failed: bool,
}

impl DeferredTestResult {
    /// Builds the result of the test identified by `details`.
    pub fn from_failures(details: &TestDetails, failures: Vec<Failure>, time_elapsed: f64) -> Self {
        Self {
            suite_name: details.suite_name.clone(),
            test_name: details.test_name.clone(),
            filename: details.filename.clone(),
            line_number: details.line_number,
            failed: !failures.is_empty(),
            failures,
            time_elapsed,
        }
    }

    /// Builds a passing result.
    pub fn passed(details: &TestDetails, time_elapsed: f64) -> Self {
        Self::from_failures(details, Vec::new(), time_elapsed)
    }

    /// Name of the suite that ran the test.
    pub fn suite_name(&self) -> &str {
        &self.suite_name
    }

    /// Name of the test.
    pub fn test_name(&self) -> &str {
        &self.test_name
    }

    /// File declaring the test.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Line declaring the test.
    pub fn line_number(&self) -> u32 {
        self.line_number
    }

    /// Failures in evaluation order.
    pub fn failures(&self) -> &[Failure] {
        &self.failures
    }

    /// Failure messages in evaluation order.
    pub fn failure_messages(&self) -> impl Iterator<Item = &str> + '_ {
        self.failures.iter().map(|failure| failure.message.as_str())
    }

    /// Seconds the test ran for.
    pub fn time_elapsed(&self) -> f64 {
        self.time_elapsed
    }

    /// Whether any check in the test failed.
    pub fn failed(&self) -> bool {
        self.failed
    }

    /// Verifies the failed flag agrees with the failures, which matters for
    /// results decoded from another process.
    pub fn validate(&self) -> Result<(), TallyError> {
        if self.failed != !self.failures.is_empty() {
            return Err(TallyError::Result(
                ErrorInfo::new(
                    "failed-flag-mismatch",
                    "test failed flag disagrees with its failure list",
                )
                .with_suite(&self.suite_name)
                .with_test(&self.test_name)
                .with_context("failures", self.failures.len().to_string()),
            ));
        }
        Ok(())
    }
}
