//! Failure sinks: where checks send their diagnostics.
//!
//! Nothing here is global. Every check takes the sink it reports to, so each
//! concurrently running test can own its own sink.

use serde::{Deserialize, Serialize};
use tally_core::{MessageStream, TestDetails};
use tracing::{debug, warn};

use crate::policy::{DiagnosticPolicy, STANDARD_POLICY};

/// Receiver of failure events produced by checks.
///
/// Implementations must accept any number of calls per test; a failing check
/// never stops the checks that follow it.
pub trait FailureSink {
    /// Records one failed check.
    fn on_test_failure(&mut self, details: &TestDetails, message: String);

    /// Rendering limits applied when building messages for this sink.
    fn policy(&self) -> &DiagnosticPolicy {
        &STANDARD_POLICY
    }
}

impl<S: FailureSink + ?Sized> FailureSink for &mut S {
    fn on_test_failure(&mut self, details: &TestDetails, message: String) {
        (**self).on_test_failure(details, message);
    }

    fn policy(&self) -> &DiagnosticPolicy {
        (**self).policy()
    }
}

impl<S: FailureSink + ?Sized> FailureSink for Box<S> {
    fn on_test_failure(&mut self, details: &TestDetails, message: String) {
        (**self).on_test_failure(details, message);
    }

    fn policy(&self) -> &DiagnosticPolicy {
        (**self).policy()
    }
}

/// Hands a finished message to the sink and yields the check outcome.
pub(crate) fn report_failure<S: FailureSink + ?Sized>(
    results: &mut S,
    details: &TestDetails,
    message: MessageStream,
) -> bool {
    results.on_test_failure(details, message.into_text());
    false
}

/// One failure as seen by [`TestResults`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedFailure {
    /// Where the failing check ran.
    pub details: TestDetails,
    /// Finalized diagnostic text.
    pub message: String,
}

/// Counting sink spanning many tests.
///
/// Tracks how many tests started, how many of them failed at least once and
/// how many individual failures were reported, keeping the failures in
/// arrival order. A failure reported outside a started test is kept and
/// counted as a failure but not as a failed test.
#[derive(Debug, Clone, Default)]
pub struct TestResults {
    policy: DiagnosticPolicy,
    total_test_count: usize,
    failed_test_count: usize,
    failure_count: usize,
    in_test: bool,
    current_test_failed: bool,
    failures: Vec<RecordedFailure>,
}

impl TestResults {
    /// Creates an empty result set using the standard policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty result set using `policy` for message rendering.
    pub fn with_policy(policy: DiagnosticPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Marks the start of a test.
    pub fn on_test_start(&mut self, details: &TestDetails) {
        self.total_test_count += 1;
        self.in_test = true;
        self.current_test_failed = false;
        debug!(suite = %details.suite_name, test = %details.test_name, "test started");
    }

    /// Marks the end of a test that ran for `seconds_elapsed`.
    pub fn on_test_finish(&mut self, details: &TestDetails, seconds_elapsed: f64) {
        debug!(
            suite = %details.suite_name,
            test = %details.test_name,
            seconds_elapsed,
            failed = self.current_test_failed,
            "test finished"
        );
        self.in_test = false;
        self.current_test_failed = false;
    }

    /// Number of tests started.
    pub fn total_test_count(&self) -> usize {
        self.total_test_count
    }

    /// Number of tests with at least one failure.
    pub fn failed_test_count(&self) -> usize {
        self.failed_test_count
    }

    /// Number of failures across all tests.
    pub fn failure_count(&self) -> usize {
        self.failure_count
    }

    /// Failures in the order they were reported.
    pub fn failures(&self) -> &[RecordedFailure] {
        &self.failures
    }
}

impl FailureSink for TestResults {
    fn on_test_failure(&mut self, details: &TestDetails, message: String) {
        self.failure_count += 1;
        if !self.in_test {
            warn!(
                suite = %details.suite_name,
                test = %details.test_name,
                "failure reported outside a started test"
            );
        } else if !self.current_test_failed {
            self.failed_test_count += 1;
            self.current_test_failed = true;
        }
        debug!(
            suite = %details.suite_name,
            test = %details.test_name,
            line = details.line_number,
            "check failed"
        );
        self.failures.push(RecordedFailure {
            details: details.clone(),
            message,
        });
    }

    fn policy(&self) -> &DiagnosticPolicy {
        &self.policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failures_count_once_per_test() {
        let first = TestDetails::new("First", "Suite", "suite.rs", 1);
        let second = TestDetails::new("Second", "Suite", "suite.rs", 9);
        let mut results = TestResults::new();

        results.on_test_start(&first);
        results.on_test_failure(&first, "Expected a".into());
        results.on_test_failure(&first, "Expected b".into());
        results.on_test_finish(&first, 0.01);

        results.on_test_start(&second);
        results.on_test_finish(&second, 0.02);

        assert_eq!(results.total_test_count(), 2);
        assert_eq!(results.failed_test_count(), 1);
        assert_eq!(results.failure_count(), 2);
        assert_eq!(results.failures()[1].message, "Expected b");
    }

    #[test]
    fn failure_outside_a_test_is_not_a_failed_test() {
        let details = TestDetails::new("Loose", "Suite", "suite.rs", 4);
        let mut results = TestResults::new();
        results.on_test_failure(&details, "Expected a".into());
        assert_eq!(results.failure_count(), 1);
        assert_eq!(results.failed_test_count(), 0);
        assert_eq!(results.total_test_count(), 0);

        results.on_test_start(&details);
        results.on_test_finish(&details, 0.0);
        results.on_test_failure(&details, "Expected b".into());
        assert_eq!(results.failed_test_count(), 0);
        assert_eq!(results.failures().len(), 2);
    }

    #[test]
    fn forwarding_sinks_share_policy() {
        let policy = DiagnosticPolicy {
            max_rendered_elements: Some(2),
            preview_elements: 1,
        };
        let mut results = TestResults::with_policy(policy.clone());
        let forward = &mut results;
        assert_eq!(FailureSink::policy(&forward), &policy);
        forward.on_test_failure(&TestDetails::new("T", "S", "f.rs", 3), "Expected".into());
        assert_eq!(results.failure_count(), 1);
    }
}
