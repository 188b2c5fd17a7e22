//! Absolute and relative tolerance checks.
//!
//! Preconditions are the caller's: the absolute tolerance must be
//! non-negative and the relative check must not be given a zero expected
//! value. Neither is validated; violating them yields whatever the
//! arithmetic produces (an empty interval, an infinite or NaN relative
//! error, or an integer division panic).

use std::ops::{Add, Div, Sub};

use tally_core::stringify::{all_renderable3, Stringify};
use tally_core::{MessageStream, TestDetails};

use crate::sink::{report_failure, FailureSink};

/// Returns whether `actual` lies in `[expected - tolerance, expected + tolerance]`.
pub fn are_close<E, A, T>(expected: &E, actual: &A, tolerance: &T) -> bool
where
    E: Copy + Add<T, Output = E> + Sub<T, Output = E>,
    A: PartialOrd<E>,
    T: Copy,
{
    *actual >= *expected - *tolerance && *actual <= *expected + *tolerance
}

/// Returns whether `(expected - actual) / expected <= relative_tolerance`.
///
/// The bound is one-sided: an `actual` that overshoots a positive
/// `expected` produces a negative relative error and always passes.
pub fn are_close_relative<E, A, T>(expected: &E, actual: &A, relative_tolerance: &T) -> bool
where
    E: Copy + Sub<A, Output = E> + Div<E, Output = E> + PartialOrd<T>,
    A: Copy,
{
    let relative_error = (*expected - *actual) / *expected;
    relative_error <= *relative_tolerance
}

/// Checks that `actual` is within `tolerance` of `expected`.
pub fn check_close<S, E, A, T>(
    results: &mut S,
    expected: &E,
    actual: &A,
    tolerance: &T,
    details: &TestDetails,
) -> bool
where
    S: FailureSink + ?Sized,
    E: Copy + Add<T, Output = E> + Sub<T, Output = E> + Stringify,
    A: PartialOrd<E> + Stringify,
    T: Copy + Stringify,
{
    if are_close(expected, actual, tolerance) {
        return true;
    }
    let mut stream = MessageStream::new();
    if all_renderable3::<E, T, A>() {
        stream
            .append("Expected ")
            .append_rendered(expected)
            .append(" +/- ")
            .append_rendered(tolerance)
            .append(" but was ")
            .append_rendered(actual);
    } else {
        stream.append("Expected values to be close to within a given tolerance, but they weren't");
    }
    report_failure(results, details, stream)
}

/// Checks that the relative error of `actual` against `expected` does not
/// exceed `relative_tolerance`. See [`are_close_relative`] for the formula.
pub fn check_close_relative<S, E, A, T>(
    results: &mut S,
    expected: &E,
    actual: &A,
    relative_tolerance: &T,
    details: &TestDetails,
) -> bool
where
    S: FailureSink + ?Sized,
    E: Copy + Sub<A, Output = E> + Div<E, Output = E> + PartialOrd<T> + Stringify,
    A: Copy + Stringify,
    T: Stringify,
{
    if are_close_relative(expected, actual, relative_tolerance) {
        return true;
    }
    let mut stream = MessageStream::new();
    if all_renderable3::<E, T, A>() {
        stream
            .append("Expected ")
            .append_rendered(expected)
            .append(" R(+/-) ")
            .append_rendered(relative_tolerance)
            .append(" but was ")
            .append_rendered(actual);
    } else {
        stream.append(
            "Expected values to be close to within a given relative tolerance, but they weren't",
        );
    }
    report_failure(results, details, stream)
}
