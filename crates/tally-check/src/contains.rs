//! Linear-scan containment checks.

use std::fmt::Display;

use tally_core::stringify::{stringify_or, Stringify};
use tally_core::{MessageStream, TestDetails};

use crate::sink::{report_failure, FailureSink};

/// Stand-in used when the needle cannot be rendered.
pub const GIVEN_VALUE: &str = "given value";

struct Scan<'a, T> {
    found: bool,
    count: usize,
    preview: Vec<&'a T>,
}

fn scan<'a, I, T, N>(haystack: I, needle: &N, preview_len: usize) -> Scan<'a, T>
where
    I: IntoIterator<Item = &'a T>,
    T: PartialEq<N> + 'a,
    N: ?Sized,
{
    let mut state = Scan {
        found: false,
        count: 0,
        preview: Vec::with_capacity(preview_len),
    };
    for item in haystack {
        if *item == *needle {
            state.found = true;
            return state;
        }
        if state.preview.len() < preview_len {
            state.preview.push(item);
        }
        state.count += 1;
    }
    state
}

fn report_missing<S, T>(
    results: &mut S,
    needle: &str,
    scan: &Scan<'_, T>,
    details: &TestDetails,
) -> bool
where
    S: FailureSink + ?Sized,
    T: Stringify,
{
    // Reporters key off the leading "Expected".
    let mut stream = MessageStream::new();
    stream
        .append("Expected to find ")
        .append(needle)
        .append(" in the range of ")
        .append(scan.count)
        .append(" elements, but it was not there.");
    if T::CAN_STRINGIFY && !scan.preview.is_empty() {
        stream.newline().append("\tThe first few:").newline();
        for item in &scan.preview {
            stream.append("\t\t").append_rendered(*item).newline();
        }
    }
    report_failure(results, details, stream)
}

/// Checks that `haystack` yields an element equal to `needle`.
///
/// The needle is rendered only when its type is renderable; otherwise the
/// message says "given value". When the element type is renderable the
/// first few elements are listed, as many as the sink's policy allows.
pub fn check_contains<'a, S, I, T, N>(
    results: &mut S,
    haystack: I,
    needle: &N,
    details: &TestDetails,
) -> bool
where
    S: FailureSink + ?Sized,
    I: IntoIterator<Item = &'a T>,
    T: PartialEq<N> + Stringify + 'a,
    N: Stringify + ?Sized,
{
    let preview_len = results.policy().preview_elements;
    let scan = scan(haystack, needle, preview_len);
    if scan.found {
        return true;
    }
    report_missing(results, &stringify_or(needle, GIVEN_VALUE), &scan, details)
}

/// Same as [`check_contains`] but renders the needle through `Display`
/// unconditionally.
pub fn check_contains_display<'a, S, I, T, N>(
    results: &mut S,
    haystack: I,
    needle: &N,
    details: &TestDetails,
) -> bool
where
    S: FailureSink + ?Sized,
    I: IntoIterator<Item = &'a T>,
    T: PartialEq<N> + Stringify + 'a,
    N: Display + ?Sized,
{
    let preview_len = results.policy().preview_elements;
    let scan = scan(haystack, needle, preview_len);
    if scan.found {
        return true;
    }
    report_missing(results, &needle.to_string(), &scan, details)
}
