use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tally_check::{check_array_close, check_contains, check_equal, FailureSink, Opaque};
use tally_core::TestDetails;

/// Drops messages so long runs do not accumulate them.
struct DiscardSink;

impl FailureSink for DiscardSink {
    fn on_test_failure(&mut self, _details: &TestDetails, message: String) {
        black_box(message);
    }
}

fn check_benchmark(c: &mut Criterion) {
    let details = TestDetails::new("Bench", "Checks", "check_throughput.rs", 1);
    let expected: Vec<f64> = (0..1024).map(f64::from).collect();
    let mut actual = expected.clone();
    actual[1000] += 1.0;

    c.bench_function("check/equal_pass", |b| {
        let mut results = DiscardSink;
        b.iter(|| check_equal(&mut results, black_box(&42_u64), black_box(&42_u64), &details));
    });

    c.bench_function("check/equal_fail_rendered", |b| {
        let mut results = DiscardSink;
        b.iter(|| check_equal(&mut results, black_box(&4_u64), black_box(&5_u64), &details));
    });

    c.bench_function("check/equal_fail_opaque", |b| {
        let mut results = DiscardSink;
        b.iter(|| {
            check_equal(
                &mut results,
                black_box(&Opaque(4_u64)),
                black_box(&Opaque(5_u64)),
                &details,
            )
        });
    });

    c.bench_function("check/array_close_1024_fail", |b| {
        let mut results = DiscardSink;
        b.iter(|| {
            check_array_close(
                &mut results,
                black_box(&expected),
                black_box(&actual),
                expected.len(),
                &0.5,
                &details,
            )
        });
    });

    c.bench_function("check/contains_miss", |b| {
        let mut results = DiscardSink;
        b.iter(|| check_contains(&mut results, black_box(&expected), &-1.0, &details));
    });
}

criterion_group!(benches, check_benchmark);
criterion_main!(benches);
