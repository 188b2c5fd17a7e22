use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tally_check::check_equal;
use tally_core::TestDetails;
use tally_report::{begin_suite, merge_suites, record_test, DeferredSuiteResult, MergePolicy, TestRecorder};

fn build_suites(suites: usize, tests: usize) -> Vec<DeferredSuiteResult> {
    (0..suites)
        .map(|s| {
            let name = format!("Suite{s}");
            let mut suite = begin_suite(name.clone());
            for t in 0..tests {
                let details = TestDetails::new(format!("t{t}"), name.clone(), "bench.rs", 1);
                let mut recorder = TestRecorder::new(details.clone());
                check_equal(&mut recorder, &(t % 7), &0, &details);
                record_test(&mut suite, recorder.finish(0.001)).unwrap();
            }
            suite
        })
        .collect()
}

fn merge_benchmark(c: &mut Criterion) {
    let suites = build_suites(16, 64);
    let policy = MergePolicy::default();

    c.bench_function("merge/16x64", |b| {
        b.iter(|| merge_suites(black_box(suites.clone()), &policy))
    });

    c.bench_function("suite/to_bytes_64", |b| {
        let suite = &suites[0];
        b.iter(|| black_box(suite.to_bytes()))
    });
}

criterion_group!(benches, merge_benchmark);
criterion_main!(benches);
