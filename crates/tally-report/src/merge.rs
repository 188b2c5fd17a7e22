//! Single-threaded merge of suite results from many producers.
//!
//! Producers (threads, processes) each finish their own suites without
//! sharing state; the merger runs once they are all done and is the only
//! place their outputs meet.

use serde::{Deserialize, Serialize};
use tally_core::errors::{ErrorInfo, TallyError};
use tally_core::stable_hash_string;
use tracing::debug;

use crate::policy::{MergePolicy, SuiteOrder};
use crate::suite::DeferredSuiteResult;

/// Final, ordered report produced by the merge stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedReport {
    /// Content-addressed hash of the merged suites.
    pub report_hash: String,
    /// Suites in report order.
    pub suites: Vec<DeferredSuiteResult>,
    /// Number of tests across all suites.
    pub total_tests: usize,
    /// Number of failing tests across all suites.
    pub failed_tests: usize,
    /// Number of individual failures across all suites.
    pub failure_count: usize,
    /// Sum of suite times in seconds.
    pub time_elapsed: f64,
    /// Whether any suite failed.
    pub failed: bool,
}

impl MergedReport {
    fn from_suites(suites: Vec<DeferredSuiteResult>) -> Result<Self, TallyError> {
        let report_hash = stable_hash_string(&suites)?;
        Ok(Self {
            report_hash,
            total_tests: suites.iter().map(DeferredSuiteResult::test_count).sum(),
            failed_tests: suites.iter().map(DeferredSuiteResult::failed_test_count).sum(),
            failure_count: suites.iter().map(DeferredSuiteResult::failure_count).sum(),
            time_elapsed: suites.iter().map(DeferredSuiteResult::time_elapsed).sum(),
            failed: suites.iter().any(DeferredSuiteResult::failed),
            suites,
        })
    }

    /// Looks up a suite by name.
    pub fn suite(&self, name: &str) -> Option<&DeferredSuiteResult> {
        self.suites.iter().find(|suite| suite.suite_name() == name)
    }
}

/// Accumulates finished suites and combines them into a [`MergedReport`].
#[derive(Debug, Clone, Default)]
pub struct ReportMerger {
    policy: MergePolicy,
    suites: Vec<DeferredSuiteResult>,
}

impl ReportMerger {
    /// Creates a merger governed by `policy`.
    pub fn new(policy: MergePolicy) -> Self {
        Self {
            policy,
            suites: Vec::new(),
        }
    }

    /// Accepts one suite. The suite is finalized and validated first; a
    /// repeated suite name is concatenated onto the earlier one or rejected,
    /// depending on the policy.
    pub fn add(&mut self, mut suite: DeferredSuiteResult) -> Result<(), TallyError> {
        suite.finalize();
        suite.validate()?;
        let existing = self
            .suites
            .iter()
            .position(|known| known.suite_name() == suite.suite_name());
        match existing {
            Some(index) if self.policy.combine_duplicates => {
                debug!(suite = %suite.suite_name(), tests = suite.test_count(), "combining suite");
                let known = &mut self.suites[index];
                known.absorb(suite);
                known.finalize();
            }
            Some(_) => {
                return Err(TallyError::Merge(
                    ErrorInfo::new("duplicate-suite", "suite was produced more than once")
                        .with_suite(suite.suite_name())
                        .with_hint("enable combine_duplicates to concatenate repeated suites"),
                ));
            }
            None => self.suites.push(suite),
        }
        Ok(())
    }

    /// Accepts every suite from `suites` in iteration order.
    pub fn add_all<I>(&mut self, suites: I) -> Result<(), TallyError>
    where
        I: IntoIterator<Item = DeferredSuiteResult>,
    {
        for suite in suites {
            self.add(suite)?;
        }
        Ok(())
    }

    /// Produces the merged report.
    pub fn finish(self) -> Result<MergedReport, TallyError> {
        let mut suites = self.suites;
        if self.policy.order == SuiteOrder::SuiteName {
            suites.sort_by(|a, b| a.suite_name().cmp(b.suite_name()));
        }
        let report = MergedReport::from_suites(suites)?;
        debug!(
            suites = report.suites.len(),
            tests = report.total_tests,
            failed = report.failed,
            hash = %report.report_hash,
            "report merged"
        );
        Ok(report)
    }
}

/// Merges `suites` in one call.
pub fn merge_suites<I>(suites: I, policy: &MergePolicy) -> Result<MergedReport, TallyError>
where
    I: IntoIterator<Item = DeferredSuiteResult>,
{
    let mut merger = ReportMerger::new(policy.clone());
    merger.add_all(suites)?;
    merger.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suite::{begin_suite, record_test};
    use crate::test_result::DeferredTestResult;
    use tally_core::TestDetails;

    fn suite_with(name: &str, tests: &[&str]) -> DeferredSuiteResult {
        let mut suite = begin_suite(name);
        for test in tests {
            let details = TestDetails::new(*test, name, "merge.rs", 1);
            record_test(&mut suite, DeferredTestResult::passed(&details, 0.5)).unwrap();
        }
        suite
    }

    #[test]
    fn first_seen_keeps_arrival_order() {
        let report = merge_suites(
            vec![suite_with("B", &["x"]), suite_with("A", &["y"])],
            &MergePolicy::default(),
        )
        .unwrap();
        let names: Vec<&str> = report.suites.iter().map(|s| s.suite_name()).collect();
        assert_eq!(names, vec!["B", "A"]);
        assert_eq!(report.total_tests, 2);
        assert!(!report.failed);
    }

    #[test]
    fn duplicates_concatenate_in_arrival_order() {
        let report = merge_suites(
            vec![suite_with("A", &["one"]), suite_with("A", &["two", "three"])],
            &MergePolicy::default(),
        )
        .unwrap();
        assert_eq!(report.suites.len(), 1);
        let suite = report.suite("A").unwrap();
        let tests: Vec<&str> = suite.results().iter().map(|r| r.test_name()).collect();
        assert_eq!(tests, vec!["one", "two", "three"]);
        assert_eq!(suite.time_elapsed(), 1.5);
    }

    #[test]
    fn duplicates_rejected_when_disabled() {
        let policy = MergePolicy {
            combine_duplicates: false,
            ..MergePolicy::default()
        };
        let err = merge_suites(vec![suite_with("A", &[]), suite_with("A", &[])], &policy)
            .unwrap_err();
        assert_eq!(err.info().code, "duplicate-suite");
        assert_eq!(err.info().suite(), Some("A"));
    }
}
