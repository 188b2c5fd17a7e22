//! Per-suite collection of deferred test results.
//!
//! A suite result only grows: tests are appended in completion order and
//! never reordered, deduplicated, edited or removed. Finalizing recomputes
//! the aggregate flag and time from the contained tests and seals the suite;
//! a sealed suite rejects further tests and may be finalized again with the
//! same outcome.

use serde::{Deserialize, Serialize};
use tally_core::errors::{ErrorInfo, TallyError};
use tally_core::serde::{from_json_slice, to_canonical_json_bytes};
use tracing::{debug, trace, warn};

use crate::test_result::DeferredTestResult;

/// Named, ordered collection of test results for one suite.
///
/// `Clone` is a deep copy, so a finished suite can be handed from the unit
/// that produced it to the merge stage without sharing state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeferredSuiteResult {
    suite_name: String,
    results: Vec<DeferredTestResult>,
    time_elapsed: f64,
    failed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    measured_elapsed: Option<f64>,
    #[serde(default)]
    sealed: bool,
}

fn sealed_error(suite: &str, operation: &str) -> TallyError {
    TallyError::Result(
        ErrorInfo::new("suite-sealed", "suite was already finalized")
            .with_suite(suite)
            .with_context("operation", operation),
    )
}

impl DeferredSuiteResult {
    /// Starts collecting results for `suite_name`.
    pub fn new(suite_name: impl Into<String>) -> Self {
        Self {
            suite_name: suite_name.into(),
            results: Vec::new(),
            time_elapsed: 0.0,
            failed: false,
            measured_elapsed: None,
            sealed: false,
        }
    }

    /// Appends a finished test. Fails once the suite is sealed.
    pub fn record_test(&mut self, result: DeferredTestResult) -> Result<(), TallyError> {
        if self.sealed {
            return Err(sealed_error(&self.suite_name, "record_test"));
        }
        if result.suite_name() != self.suite_name {
            warn!(
                suite = %self.suite_name,
                test_suite = %result.suite_name(),
                test = %result.test_name(),
                "recording test from another suite"
            );
        }
        trace!(
            suite = %self.suite_name,
            test = %result.test_name(),
            failed = result.failed(),
            "test recorded"
        );
        self.failed |= result.failed();
        if self.measured_elapsed.is_none() {
            self.time_elapsed += result.time_elapsed();
        }
        self.results.push(result);
        Ok(())
    }

    /// Overrides the summed test time with an externally measured duration.
    pub fn set_measured_elapsed(&mut self, seconds: f64) -> Result<(), TallyError> {
        if self.sealed {
            return Err(sealed_error(&self.suite_name, "set_measured_elapsed"));
        }
        self.measured_elapsed = Some(seconds);
        self.time_elapsed = seconds;
        Ok(())
    }

    /// Recomputes the failed flag and elapsed time from the contained tests
    /// and seals the suite.
    pub fn finalize(&mut self) -> &Self {
        self.sealed = true;
        self.failed = self.results.iter().any(DeferredTestResult::failed);
        self.time_elapsed = self
            .measured_elapsed
            .unwrap_or_else(|| self.results.iter().map(DeferredTestResult::time_elapsed).sum());
        debug!(
            suite = %self.suite_name,
            tests = self.results.len(),
            failed = self.failed,
            time_elapsed = self.time_elapsed,
            "suite finalized"
        );
        self
    }

    /// Name of the suite.
    pub fn suite_name(&self) -> &str {
        &self.suite_name
    }

    /// Test results in completion order.
    pub fn results(&self) -> &[DeferredTestResult] {
        &self.results
    }

    /// Seconds spent in the suite.
    pub fn time_elapsed(&self) -> f64 {
        self.time_elapsed
    }

    /// Whether any contained test failed.
    pub fn failed(&self) -> bool {
        self.failed
    }

    /// Whether the suite has been finalized.
    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    /// Number of recorded tests.
    pub fn test_count(&self) -> usize {
        self.results.len()
    }

    /// Number of recorded tests that failed.
    pub fn failed_test_count(&self) -> usize {
        self.results.iter().filter(|result| result.failed()).count()
    }

    /// Number of failures across all recorded tests.
    pub fn failure_count(&self) -> usize {
        self.results.iter().map(|result| result.failures().len()).sum()
    }

    /// Verifies the aggregate flag and every contained test.
    pub fn validate(&self) -> Result<(), TallyError> {
        for result in &self.results {
            result.validate()?;
        }
        let any_failed = self.results.iter().any(DeferredTestResult::failed);
        if self.failed != any_failed {
            return Err(TallyError::Result(
                ErrorInfo::new(
                    "suite-flag-mismatch",
                    "suite failed flag disagrees with its tests",
                )
                .with_suite(&self.suite_name)
                .with_hint("finalize the suite before handing it on"),
            ));
        }
        Ok(())
    }

    /// Serializes the suite as canonical JSON for transfer to a merger.
    pub fn to_bytes(&self) -> Result<Vec<u8>, TallyError> {
        to_canonical_json_bytes(self)
    }

    /// Decodes a suite produced by [`DeferredSuiteResult::to_bytes`] and
    /// checks its invariants.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TallyError> {
        let suite: Self = from_json_slice(bytes)?;
        suite.validate()?;
        Ok(suite)
    }

    /// Appends every test of `other`, which carries the same suite name.
    pub(crate) fn absorb(&mut self, other: DeferredSuiteResult) {
        let combined = self.time_elapsed + other.time_elapsed;
        self.failed |= other.failed;
        self.results.extend(other.results);
        self.measured_elapsed = Some(combined);
        self.time_elapsed = combined;
    }
}

/// Starts collecting results for `name`.
pub fn begin_suite(name: impl Into<String>) -> DeferredSuiteResult {
    DeferredSuiteResult::new(name)
}

/// Appends `result` to `suite`.
pub fn record_test(
    suite: &mut DeferredSuiteResult,
    result: DeferredTestResult,
) -> Result<(), TallyError> {
    suite.record_test(result)
}

/// Finalizes and seals `suite`; see [`DeferredSuiteResult::finalize`].
pub fn finalize_suite(suite: &mut DeferredSuiteResult) -> &DeferredSuiteResult {
    suite.finalize()
}
