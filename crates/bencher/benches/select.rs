use bencher::{MANY_ACCEPTS, MIXED_ACCEPTS, PETSTORE_ACCEPTS, TestCase};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use header_selector::HeaderSelector;
use std::hint::black_box;

fn create_test_cases() -> Vec<TestCase> {
    vec![
        TestCase::small("single_accept", &PETSTORE_ACCEPTS[1..2]),
        TestCase::small("petstore_accepts", &PETSTORE_ACCEPTS),
        TestCase::normal("mixed_accepts", &MIXED_ACCEPTS),
        TestCase::large("many_accepts", &MANY_ACCEPTS),
    ]
}

fn benchmark_select_headers(criterion: &mut Criterion) {
    let test_cases = create_test_cases();
    let selector = HeaderSelector::default();
    let mut group = criterion.benchmark_group("select_headers");

    for case in test_cases {
        group.throughput(Throughput::Elements(case.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(case.name()), &case, |b, case| {
            b.iter(|| {
                let headers =
                    selector.select_headers(black_box(case.accepts()), black_box(Some("application/json")), false);
                black_box(headers);
            });
        });
    }

    group.finish();
}

criterion_group!(select, benchmark_select_headers);
criterion_main!(select);
