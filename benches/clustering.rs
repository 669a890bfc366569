use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::prelude::*;
use stackmeans::{Kmeans, StratifiedSampler, Vector};

fn bench_kmeans(c: &mut Criterion) {
    let mut group = c.benchmark_group("kmeans");

    // Synthetic questions: 15 languages, heavy-tailed scores.
    let mut rng = StdRng::seed_from_u64(42);
    let n = 20_000;
    let spread = 50_000;
    let languages = 15;
    let kernels = 45;

    let points: Vec<Vector> = (0..n)
        .map(|_| {
            let lang = rng.random_range(0..languages);
            let score = (rng.random::<f64>().powi(4) * 2_000.0) as i32;
            Vector::new(lang * spread, score)
        })
        .collect();

    let initial = StratifiedSampler::new(kernels, spread, languages as usize)
        .sample(&points)
        .unwrap();

    group.bench_function("sample_n20000_k45", |b| {
        b.iter(|| {
            StratifiedSampler::new(kernels, spread, languages as usize)
                .sample(black_box(&points))
                .unwrap();
        })
    });

    group.bench_function("fit_n20000_k45", |b| {
        b.iter(|| {
            let model = Kmeans::new().with_max_iter(10);
            model.fit(black_box(&points), black_box(&initial)).unwrap();
        })
    });

    group.finish();
}

criterion_group!(benches, bench_kmeans);
criterion_main!(benches);
