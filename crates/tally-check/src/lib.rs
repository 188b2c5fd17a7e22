#![deny(missing_docs)]
#![doc = "Capability-gated comparison checks. Each check evaluates a predicate and, on failure, reports a diagnostic beginning with `Expected` to a caller-provided failure sink."]

pub mod array;
pub mod close;
pub mod contains;
pub mod equal;
pub mod macros;
/// Diagnostic rendering limits.
pub mod policy;
pub mod sink;

pub use array::{array_are_close, check_array2d_close, check_array_close, check_array_equal};
pub use close::{are_close, are_close_relative, check_close, check_close_relative};
pub use contains::{check_contains, check_contains_display};
pub use equal::{
    check, check_equal, check_equal_str, check_not_equal, check_not_equal_str, strings_equal,
};
pub use policy::DiagnosticPolicy;
pub use sink::{FailureSink, RecordedFailure, TestResults};
pub use tally_core::{Opaque, Stringify, TestDetails};
