use tally_check::{DiagnosticPolicy, FailureSink};
use tally_core::TestDetails;
use tracing::debug;

use crate::test_result::{DeferredTestResult, Failure};

/// Per-test failure sink that produces a [`DeferredTestResult`].
///
/// One recorder belongs to one running test; nothing is shared with other
/// tests, so recorders can live on different threads.
#[derive(Debug, Clone)]
pub struct TestRecorder {
    details: TestDetails,
    policy: DiagnosticPolicy,
    failures: Vec<Failure>,
}

impl TestRecorder {
    /// Starts recording the test identified by `details`.
    pub fn new(details: TestDetails) -> Self {
        Self::with_policy(details, DiagnosticPolicy::default())
    }

    /// Starts recording with a custom diagnostic policy.
    pub fn with_policy(details: TestDetails, policy: DiagnosticPolicy) -> Self {
        Self {
            details,
            policy,
            failures: Vec::new(),
        }
    }

    /// Details of the recorded test.
    pub fn details(&self) -> &TestDetails {
        &self.details
    }

    /// Number of failures recorded so far.
    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    /// Whether any failure was recorded.
    pub fn has_failed(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Seals the test with its externally measured duration.
    pub fn finish(self, time_elapsed: f64) -> DeferredTestResult {
        DeferredTestResult::from_failures(&self.details, self.failures, time_elapsed)
    }
}

impl FailureSink for TestRecorder {
    fn on_test_failure(&mut self, details: &TestDetails, message: String) {
        debug!(
            suite = %details.suite_name,
            test = %details.test_name,
            line = details.line_number,
            "check failed"
        );
        self.failures.push(Failure {
            line_number: details.line_number,
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
    use tally_check::{check_close, check_equal};

    #[test]
    fn recorder_keeps_evaluation_order() {
        let details = TestDetails::new("Order", "Recorder", "recorder.rs", 10);
        let mut recorder = TestRecorder::new(details.clone());
        check_equal(&mut recorder, &1, &2, &details.at_line(11));
        check_close(&mut recorder, &1.0, &2.0, &0.5, &details.at_line(12));
        check_equal(&mut recorder, &3, &3, &details.at_line(13));
        assert_eq!(recorder.failure_count(), 2);

        let result = recorder.finish(0.125);
        assert!(result.failed());
        let lines: Vec<u32> = result.failures().iter().map(|f| f.line_number).collect();
        assert_eq!(lines, vec![11, 12]);
        assert_eq!(result.line_number(), 10);
        assert_eq!(result.time_elapsed(), 0.125);
    }

    #[test]
    fn clean_test_passes() {
        let details = TestDetails::new("Clean", "Recorder", "recorder.rs", 20);
        let recorder = TestRecorder::new(details);
        assert!(!recorder.has_failed());
        assert!(!recorder.finish(0.0).failed());
    }
}
