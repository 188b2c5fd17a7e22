//! Call-site macros that stamp each check with its own source line.
//!
//! Every macro takes the sink first and the owning test's
//! [`TestDetails`](tally_core::TestDetails) second; the details reported on
//! failure carry the line of the macro invocation.

/// Checks that a boolean expression holds, naming it by its source text.
#[macro_export]
macro_rules! check {
    ($results:expr, $details:expr, $value:expr $(,)?) => {
        $crate::equal::check(
            $results,
            $value,
            ::std::stringify!($value),
            &($details).at_line(::std::line!()),
        )
    };
}

/// Checks `expected == actual`.
#[macro_export]
macro_rules! check_equal {
    ($results:expr, $details:expr, $expected:expr, $actual:expr $(,)?) => {
        $crate::equal::check_equal(
            $results,
            &$expected,
            &$actual,
            &($details).at_line(::std::line!()),
        )
    };
}

/// Checks `comperand != actual`.
#[macro_export]
macro_rules! check_not_equal {
    ($results:expr, $details:expr, $comperand:expr, $actual:expr $(,)?) => {
        $crate::equal::check_not_equal(
            $results,
            &$comperand,
            &$actual,
            &($details).at_line(::std::line!()),
        )
    };
}

/// Checks that `actual` is within `tolerance` of `expected`.
#[macro_export]
macro_rules! check_close {
    ($results:expr, $details:expr, $expected:expr, $actual:expr, $tolerance:expr $(,)?) => {
        $crate::close::check_close(
            $results,
            &$expected,
            &$actual,
            &$tolerance,
            &($details).at_line(::std::line!()),
        )
    };
}

/// Checks the one-sided relative error of `actual` against `expected`.
#[macro_export]
macro_rules! check_close_relative {
    ($results:expr, $details:expr, $expected:expr, $actual:expr, $tolerance:expr $(,)?) => {
        $crate::close::check_close_relative(
            $results,
            &$expected,
            &$actual,
            &$tolerance,
            &($details).at_line(::std::line!()),
        )
    };
}

/// Checks the first `count` elements of two slices for equality.
#[macro_export]
macro_rules! check_array_equal {
    ($results:expr, $details:expr, $expected:expr, $actual:expr, $count:expr $(,)?) => {
        $crate::array::check_array_equal(
            $results,
            &$expected[..],
            &$actual[..],
            $count,
            &($details).at_line(::std::line!()),
        )
    };
}

/// Checks the first `count` elements of two slices for closeness.
#[macro_export]
macro_rules! check_array_close {
    (
        $results:expr,
        $details:expr,
        $expected:expr,
        $actual:expr,
        $count:expr,
        $tolerance:expr $(,)?
    ) => {
        $crate::array::check_array_close(
            $results,
            &$expected[..],
            &$actual[..],
            $count,
            &$tolerance,
            &($details).at_line(::std::line!()),
        )
    };
}

/// Checks a `rows` by `columns` matrix for closeness.
#[macro_export]
macro_rules! check_array2d_close {
    (
        $results:expr,
        $details:expr,
        $expected:expr,
        $actual:expr,
        $rows:expr,
        $columns:expr,
        $tolerance:expr $(,)?
    ) => {
        $crate::array::check_array2d_close(
            $results,
            &$expected[..],
            &$actual[..],
            $rows,
            $columns,
            &$tolerance,
            &($details).at_line(::std::line!()),
        )
    };
}

/// Checks that a collection contains `needle`.
#[macro_export]
macro_rules! check_contains {
    ($results:expr, $details:expr, $haystack:expr, $needle:expr $(,)?) => {
        $crate::contains::check_contains(
            $results,
            &$haystack,
            &$needle,
            &($details).at_line(::std::line!()),
        )
    };
}
