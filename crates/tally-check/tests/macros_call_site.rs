use tally_check::{
    check, check_array2d_close, check_array_close, check_array_equal, check_close,
    check_close_relative, check_contains, check_equal, check_not_equal, TestResults,
};
use tally_core::TestDetails;

#[test]
fn macros_stamp_their_own_line() {
    let details = TestDetails::new("Lines", "Macros", file!(), 1);
    let mut results = TestResults::new();

    let line = line!() + 1;
    check_equal!(&mut results, &details, 4, 5);

    let failure = &results.failures()[0];
    assert_eq!(failure.details.line_number, line);
    assert_eq!(failure.details.test_name, "Lines");
    assert_eq!(details.line_number, 1);
}

#[test]
fn every_failure_is_collected() {
    let details = TestDetails::new("All", "Macros", file!(), 1);
    let mut results = TestResults::new();
    results.on_test_start(&details);

    let x = 2;
    check!(&mut results, &details, x > 3);
    check_equal!(&mut results, &details, 1, 1);
    check_not_equal!(&mut results, &details, "a", "a");
    check_close!(&mut results, &details, 1.0, 1.5, 0.1);
    check_close_relative!(&mut results, &details, 10.0, 5.0, 0.1);
    check_array_equal!(&mut results, &details, [1, 2], [1, 3], 2);
    check_array_close!(&mut results, &details, [1.0, 2.0], [1.0, 2.0], 2, 0.01);
    check_array2d_close!(&mut results, &details, [[1.0], [2.0]], [[1.0], [9.0]], 2, 1, 0.5);
    check_contains!(&mut results, &details, vec![1, 2, 3], 9);

    results.on_test_finish(&details, 0.0);
    assert_eq!(results.failure_count(), 7);
    assert_eq!(results.failed_test_count(), 1);
    assert_eq!(
        results.failures()[0].message,
        "Expected x > 3 to hold, but it did not"
    );
    for failure in results.failures() {
        assert!(failure.message.starts_with("Expected"), "{}", failure.message);
    }
}
