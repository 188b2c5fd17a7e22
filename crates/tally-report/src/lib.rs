#![deny(missing_docs)]
#![doc = "Deferred test and suite results. Tests record their failures locally, suites collect finished tests in completion order, and a single merge stage combines suites from independent producers into one report."]

pub mod merge;
/// Merge ordering and duplicate handling.
pub mod policy;
/// Failure sink that records one test.
pub mod recorder;
pub mod suite;
pub mod test_result;

pub use merge::{merge_suites, MergedReport, ReportMerger};
pub use policy::{MergePolicy, SuiteOrder};
pub use recorder::TestRecorder;
pub use suite::{begin_suite, finalize_suite, record_test, DeferredSuiteResult};
pub use test_result::{DeferredTestResult, Failure};
