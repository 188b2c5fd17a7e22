//! Element-wise checks over arrays and row-major matrices.
//!
//! Every index is evaluated even after a mismatch is found. On failure the
//! full expected and actual sequences are rendered, which can make messages
//! long for large inputs; a sink's [`DiagnosticPolicy`] may cap this.
//!
//! `count`, `rows` and `columns` must not exceed the lengths of the slices
//! passed in. Out-of-range counts panic on slice indexing.

use std::ops::{Add, Sub};

use tally_core::stringify::{both_renderable, Stringify};
use tally_core::{MessageStream, TestDetails};

use crate::close::are_close;
use crate::policy::DiagnosticPolicy;
use crate::sink::{report_failure, FailureSink};

fn render_sequence<T: Stringify>(
    stream: &mut MessageStream,
    items: &[T],
    policy: &DiagnosticPolicy,
) {
    let shown = policy.rendered_len(items.len());
    stream.append("[ ");
    for item in &items[..shown] {
        stream.append_rendered(item).append(" ");
    }
    if shown < items.len() {
        stream.append("... ");
    }
    stream.append("]");
}

fn render_matrix<R: AsRef<[T]>, T: Stringify>(
    stream: &mut MessageStream,
    rows: &[R],
    columns: usize,
    policy: &DiagnosticPolicy,
) {
    let shown = policy.rendered_len(rows.len());
    stream.append("[ ");
    for row in &rows[..shown] {
        render_sequence(stream, &row.as_ref()[..columns], policy);
        stream.append(" ");
    }
    if shown < rows.len() {
        stream.append("... ");
    }
    stream.append("]");
}

/// Returns whether the first `count` elements of both slices are within
/// `tolerance` of each other, evaluating every index.
pub fn array_are_close<E, A, T>(expected: &[E], actual: &[A], count: usize, tolerance: &T) -> bool
where
    E: Copy + Add<T, Output = E> + Sub<T, Output = E>,
    A: PartialOrd<E>,
    T: Copy,
{
    expected[..count]
        .iter()
        .zip(&actual[..count])
        .fold(true, |close, (e, a)| close & are_close(e, a, tolerance))
}

/// Checks that the first `count` elements of `expected` and `actual` are
/// pairwise equal.
pub fn check_array_equal<S, E, A>(
    results: &mut S,
    expected: &[E],
    actual: &[A],
    count: usize,
    details: &TestDetails,
) -> bool
where
    S: FailureSink + ?Sized,
    E: PartialEq<A> + Stringify,
    A: Stringify,
{
    let expected = &expected[..count];
    let actual = &actual[..count];
    let equal = expected
        .iter()
        .zip(actual)
        .fold(true, |equal, (e, a)| equal & (e == a));
    if equal {
        return true;
    }

    let mut stream = MessageStream::new();
    stream
        .append("Expected array elements to be equal up to ")
        .append(count)
        .append(" elements, but they were not.");
    if both_renderable::<E, A>() {
        let policy = results.policy();
        stream.newline().append("\tExpected: ");
        render_sequence(&mut stream, expected, policy);
        stream.newline().append("\t  Actual: ");
        render_sequence(&mut stream, actual, policy);
        stream.newline();
    }
    report_failure(results, details, stream)
}

/// Checks that the first `count` elements of `expected` and `actual` are
/// pairwise within `tolerance`.
pub fn check_array_close<S, E, A, T>(
    results: &mut S,
    expected: &[E],
    actual: &[A],
    count: usize,
    tolerance: &T,
    details: &TestDetails,
) -> bool
where
    S: FailureSink + ?Sized,
    E: Copy + Add<T, Output = E> + Sub<T, Output = E> + Stringify,
    A: PartialOrd<E> + Stringify,
    T: Copy + Stringify,
{
    if array_are_close(expected, actual, count, tolerance) {
        return true;
    }

    let mut stream = MessageStream::new();
    if T::CAN_STRINGIFY {
        stream
            .append("Expected array elements to be close to within a tolerance of ")
            .append_rendered(tolerance)
            .append(" up to ")
            .append(count)
            .append(" elements, but they were not.");
    } else {
        stream
            .append("Expected array elements to be close up to ")
            .append(count)
            .append(" elements, but they were not.");
    }
    if both_renderable::<E, A>() {
        let policy = results.policy();
        stream.newline().append("\tExpected: ");
        render_sequence(&mut stream, &expected[..count], policy);
        stream.newline().append("\t  Actual: ");
        render_sequence(&mut stream, &actual[..count], policy);
        stream.newline();
    }
    report_failure(results, details, stream)
}

/// Checks a `rows` by `columns` matrix element-wise against `tolerance`.
///
/// Each row is any `AsRef<[_]>` (arrays, vectors, slices).
pub fn check_array2d_close<S, RE, RA, E, A, T>(
    results: &mut S,
    expected: &[RE],
    actual: &[RA],
    rows: usize,
    columns: usize,
    tolerance: &T,
    details: &TestDetails,
) -> bool
where
    S: FailureSink + ?Sized,
    RE: AsRef<[E]>,
    RA: AsRef<[A]>,
    E: Copy + Add<T, Output = E> + Sub<T, Output = E> + Stringify,
    A: PartialOrd<E> + Stringify,
    T: Copy + Stringify,
{
    let expected = &expected[..rows];
    let actual = &actual[..rows];
    let close = expected.iter().zip(actual).fold(true, |close, (e, a)| {
        close & array_are_close(e.as_ref(), a.as_ref(), columns, tolerance)
    });
    if close {
        return true;
    }

    let mut stream = MessageStream::new();
    if T::CAN_STRINGIFY {
        stream
            .append("Expected array elements to be close to within a tolerance of ")
            .append_rendered(tolerance)
            .append(" across ");
    } else {
        stream.append("Expected array elements to be close across ");
    }
    stream
        .append(rows)
        .append(" rows of ")
        .append(columns)
        .append(" columns, but they were not.");
    if both_renderable::<E, A>() {
        let policy = results.policy();
        stream.newline().append("\tExpected: ");
        render_matrix(&mut stream, expected, columns, policy);
        stream.newline().append("\t  Actual: ");
        render_matrix(&mut stream, actual, columns, policy);
        stream.newline();
    }
    report_failure(results, details, stream)
}
