use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use oersted_field::fields::{OerstedEvaluator, RectangularConductor};
use oersted_field::math::linspace;

fn bench_field_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("field_sweep");
    let conductor = RectangularConductor::new(3e-6, 25e-9).unwrap();
    let eval = OerstedEvaluator::new(conductor, 90e-9, 0.15).unwrap();

    for n in [1_000, 100_000] {
        let xs = linspace(-1.5e-6, 1.5e-6, n);
        group.bench_with_input(BenchmarkId::new("serial", n), &xs, |b, xs| {
            b.iter(|| eval.field_along(xs))
        });
        #[cfg(feature = "parallel")]
        group.bench_with_input(BenchmarkId::new("parallel", n), &xs, |b, xs| {
            b.iter(|| eval.field_along_par(xs))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_field_sweep);
criterion_main!(benches);
