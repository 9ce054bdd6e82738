use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rsvc::kernel::{Kernel, KernelKind};
use rsvc::{FeatureTable, SvcParams, TargetColumn};

fn random_rows(n: usize, n_features: usize, rng: &mut impl Rng) -> Vec<Vec<f64>> {
    (0..n)
        .map(|_| (0..n_features).map(|_| rng.gen_range(-1.0..1.0)).collect())
        .collect()
}

fn kernel_bench(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(40);
    let mut group = c.benchmark_group("kernel");

    for n_features in [4, 64, 512] {
        let rows = random_rows(2, n_features, &mut rng);
        for kind in KernelKind::ALL {
            let kernel = match kind.build(0.1, 3, 0.0) {
                Ok(kernel) => kernel,
                Err(err) => panic!("{kind}: {err}"),
            };
            group.bench_with_input(BenchmarkId::new(kind.as_str(), n_features), &rows, |b, rows| {
                b.iter(|| black_box(kernel.compute(&rows[0], &rows[1])))
            });
        }
    }
    group.finish();
}

fn fit_bench(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(40);
    let mut group = c.benchmark_group("svc_fit");
    group.sample_size(10);

    for n in [60, 240] {
        let rows = random_rows(n, 4, &mut rng);
        let labels: Vec<String> = rows
            .iter()
            .map(|r| if r[0] + r[1] > 0.0 { "pos" } else { "neg" }.to_string())
            .collect();
        let table = FeatureTable::from_rows(rows).unwrap();
        let target = TargetColumn::new("target", labels);

        for shrinking in [true, false] {
            let params = SvcParams::new().with_shrinking(shrinking).with_probability(true);
            let id = BenchmarkId::new(if shrinking { "shrinking" } else { "no_shrinking" }, n);
            group.bench_with_input(id, &(&table, &target), |b, (x, y)| {
                b.iter(|| black_box(params.fit(x.rows(), y.values()).unwrap()))
            });
        }
    }
    group.finish();
}

criterion_group!(benches, kernel_bench, fit_bench);
criterion_main!(benches);
