//! Truthiness, equality and inequality checks.

use std::ptr;

use tally_core::stringify::{both_renderable, Stringify};
use tally_core::{MessageStream, TestDetails};

use crate::sink::{report_failure, FailureSink};

/// Rendering used for an absent string operand.
pub const NULL_STRING: &str = "(null)";

/// Checks that `value` holds. `description` names the condition in the
/// failure message, typically the source text of the expression.
pub fn check<S: FailureSink + ?Sized>(
    results: &mut S,
    value: bool,
    description: &str,
    details: &TestDetails,
) -> bool {
    if value {
        return true;
    }
    let mut stream = MessageStream::new();
    stream
        .append("Expected ")
        .append(description)
        .append(" to hold, but it did not");
    report_failure(results, details, stream)
}

/// Checks `expected == actual`.
///
/// Operands are rendered into the message only when both of their types are
/// renderable.
pub fn check_equal<S, E, A>(
    results: &mut S,
    expected: &E,
    actual: &A,
    details: &TestDetails,
) -> bool
where
    S: FailureSink + ?Sized,
    E: PartialEq<A> + Stringify + ?Sized,
    A: Stringify + ?Sized,
{
    if expected == actual {
        return true;
    }
    let mut stream = MessageStream::new();
    stream.append("Expected values to be the same, but they were not");
    if both_renderable::<E, A>() {
        stream
            .newline()
            .append("\tExpected: ")
            .append_rendered(expected)
            .newline()
            .append("\t  Actual: ")
            .append_rendered(actual)
            .newline();
    }
    report_failure(results, details, stream)
}

/// Checks `comperand != actual`.
///
/// When both types are renderable the shared value is printed once, since
/// the operands compared equal.
pub fn check_not_equal<S, C, A>(
    results: &mut S,
    comperand: &C,
    actual: &A,
    details: &TestDetails,
) -> bool
where
    S: FailureSink + ?Sized,
    C: PartialEq<A> + Stringify + ?Sized,
    A: Stringify + ?Sized,
{
    if comperand != actual {
        return true;
    }
    let mut stream = MessageStream::new();
    if both_renderable::<C, A>() {
        stream
            .append("Expected values to be not equal, but they were both ")
            .append_rendered(comperand);
    } else {
        stream.append("Expected values to be not equal, but they were equal");
    }
    report_failure(results, details, stream)
}

/// Compares two optional strings.
///
/// Identical references (including two `None`s) are equal without looking
/// at their contents; otherwise the bytes are compared.
pub fn strings_equal(expected: Option<&str>, actual: Option<&str>) -> bool {
    match (expected, actual) {
        (None, None) => true,
        (Some(expected), Some(actual)) => {
            ptr::eq(expected, actual) || expected.as_bytes() == actual.as_bytes()
        }
        _ => false,
    }
}

fn render_string(value: Option<&str>) -> &str {
    value.unwrap_or(NULL_STRING)
}

/// Checks that two optional strings are equal.
pub fn check_equal_str<S: FailureSink + ?Sized>(
    results: &mut S,
    expected: Option<&str>,
    actual: Option<&str>,
    details: &TestDetails,
) -> bool {
    if strings_equal(expected, actual) {
        return true;
    }
    let mut stream = MessageStream::new();
    stream
        .append("Expected ")
        .append(render_string(expected))
        .append(" but was ")
        .append(render_string(actual));
    report_failure(results, details, stream)
}

/// Checks that two optional strings differ.
pub fn check_not_equal_str<S: FailureSink + ?Sized>(
    results: &mut S,
    comperand: Option<&str>,
    actual: Option<&str>,
    details: &TestDetails,
) -> bool {
    if !strings_equal(comperand, actual) {
        return true;
    }
    let mut stream = MessageStream::new();
    stream
        .append("Expected values to be not equal, but they were both ")
        .append(render_string(comperand));
    report_failure(results, details, stream)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::TestResults;
    use tally_core::Opaque;

    /// Comparable with `i32` but has no text form.
    struct Hidden(i32);
    tally_core::impl_opaque!(Hidden);

    impl PartialEq<i32> for Hidden {
        fn eq(&self, other: &i32) -> bool {
            self.0 == *other
        }
    }

    impl PartialEq<Hidden> for i32 {
        fn eq(&self, other: &Hidden) -> bool {
            *self == other.0
        }
    }

    fn details() -> TestDetails {
        TestDetails::new("Equal", "Checks", "equal.rs", 1)
    }

    #[test]
    fn equal_values_record_nothing() {
        let mut results = TestResults::new();
        assert!(check_equal(&mut results, &3, &3, &details()));
        assert!(check_equal(&mut results, "abc", &String::from("abc"), &details()));
        assert_eq!(results.failure_count(), 0);
    }

    #[test]
    fn unequal_values_render_both_sides() {
        let mut results = TestResults::new();
        assert!(!check_equal(&mut results, &4, &5, &details()));
        assert_eq!(
            results.failures()[0].message,
            "Expected values to be the same, but they were not\n\tExpected: 4\n\t  Actual: 5\n"
        );
    }

    #[test]
    fn unrenderable_operands_fall_back_to_generic_text() {
        let mut results = TestResults::new();
        assert!(!check_equal(&mut results, &Opaque(1), &Opaque(2), &details()));
        assert_eq!(
            results.failures()[0].message,
            "Expected values to be the same, but they were not"
        );
    }

    #[test]
    fn not_equal_prints_shared_value() {
        let mut results = TestResults::new();
        assert!(check_not_equal(&mut results, &1, &2, &details()));
        assert!(!check_not_equal(&mut results, &7, &7, &details()));
        assert!(!check_not_equal(&mut results, &Opaque(7), &Opaque(7), &details()));
        assert_eq!(
            results.failures()[0].message,
            "Expected values to be not equal, but they were both 7"
        );
        assert_eq!(
            results.failures()[1].message,
            "Expected values to be not equal, but they were equal"
        );
    }

    #[test]
    fn optional_strings_compare_by_identity_then_content() {
        let text = String::from("hello");
        let slice = text.as_str();
        assert!(strings_equal(None, None));
        assert!(strings_equal(Some(slice), Some(slice)));
        assert!(strings_equal(Some("hello"), Some(slice)));
        assert!(!strings_equal(Some("hello"), None));

        let mut results = TestResults::new();
        assert!(!check_equal_str(&mut results, Some("hello"), None, &details()));
        assert!(!check_not_equal_str(&mut results, None, None, &details()));
        assert_eq!(results.failures()[0].message, "Expected hello but was (null)");
        assert_eq!(
            results.failures()[1].message,
            "Expected values to be not equal, but they were both (null)"
        );
    }

    #[test]
    fn check_names_the_condition() {
        let mut results = TestResults::new();
        assert!(check(&mut results, true, "always", &details()));
        assert!(!check(&mut results, false, "x > 3", &details()));
        assert_eq!(
            results.failures()[0].message,
            "Expected x > 3 to hold, but it did not"
        );
    }

    #[test]
    fn one_unrenderable_operand_suppresses_both() {
        let mut results = TestResults::new();
        assert!(!check_equal(&mut results, &Hidden(4), &5, &details()));
        assert!(!check_equal(&mut results, &5, &Hidden(4), &details()));
        for failure in results.failures() {
            assert_eq!(failure.message, "Expected values to be the same, but they were not");
        }
        assert!(check_equal(&mut results, &Hidden(5), &5, &details()));
        assert_eq!(results.failure_count(), 2);
    }

    #[test]
    fn not_equal_with_one_unrenderable_operand_says_equal() {
        let mut results = TestResults::new();
        assert!(!check_not_equal(&mut results, &Hidden(7), &7, &details()));
        assert!(!check_not_equal(&mut results, &7, &Hidden(7), &details()));
        assert_eq!(results.failure_count(), 2);
        for failure in results.failures() {
            assert_eq!(failure.message, "Expected values to be not equal, but they were equal");
        }
    }
}
