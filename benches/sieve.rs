use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use wordle_sieve::{
    build_opening_report, filter, load_dictionary, select_best, CandidateSet, ConstraintModel,
    FeedbackPattern,
};

/// Feedback calculation for one reference against every dictionary word
fn bench_compare(c: &mut Criterion) {
    let dictionary = load_dictionary().unwrap();
    let reference = *dictionary.word_at(0).unwrap();

    let mut group = c.benchmark_group("compare");
    group.throughput(Throughput::Elements(dictionary.len() as u64));
    group.bench_function("whole_dictionary", |b| {
        b.iter(|| {
            for guess in dictionary.iter() {
                black_box(FeedbackPattern::calculate(&reference, black_box(guess)));
            }
        });
    });
    group.finish();
}

fn bench_filter(c: &mut Criterion) {
    let dictionary = load_dictionary().unwrap();

    let mut group = c.benchmark_group("filter");
    group.throughput(Throughput::Elements(dictionary.len() as u64));
    for data in ["", "nsnlwanrwe", "nsnlwanrwencwrnanpwe"] {
        let mut model = ConstraintModel::new();
        model.apply_encoded(data).unwrap();
        let name = if data.is_empty() { "empty" } else { data };
        group.bench_with_input(BenchmarkId::from_parameter(name), &model, |b, model| {
            b.iter(|| black_box(filter(model, &dictionary)));
        });
    }
    group.finish();
}

fn bench_ranking(c: &mut Criterion) {
    let dictionary = load_dictionary().unwrap();
    let candidates = CandidateSet::all(&dictionary);

    c.bench_function("select_best/whole_dictionary", |b| {
        b.iter(|| black_box(select_best(&candidates)));
    });
    c.bench_function("opening_report/depth3_width3", |b| {
        b.iter(|| black_box(build_opening_report(&dictionary, 3, 3)));
    });
}

criterion_group!(benches, bench_compare, bench_filter, bench_ranking);
criterion_main!(benches);
