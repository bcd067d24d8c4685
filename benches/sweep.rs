use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use rootsweep::bracket::{first_bracket, Bounds};
use rootsweep::config::SearchConfig;
use rootsweep::solver::find_roots;
use rootsweep::wrap::RealFn;

pub fn scan(c: &mut Criterion) {
    let in_f = |x: f64| x * x + 1.0;
    let f = RealFn::new(&in_f);

    let mut group = c.benchmark_group("scan without roots");
    for step in [1e-2, 1e-3, 1e-4] {
        group.bench_with_input(format!("first_bracket {step:?}"), &step, |b, step| {
            b.iter(|| first_bracket(&f, black_box(-1.0), 1.0, *step))
        });
    }
    group.finish();
}

pub fn sweep(c: &mut Criterion) {
    let in_f = |x: f64| x.powi(4) * x.sin();
    let f = RealFn::new(&in_f);
    let bounds = Bounds::new(-5.0, 5.0);

    let mut group = c.benchmark_group("find_roots x^4 sin x");
    for epsilon in [1e-6, 1e-9, 1e-12] {
        let config = SearchConfig::new(epsilon).with_step(0.01);
        group.bench_with_input(format!("epsilon {epsilon:?}"), &config, |b, config| {
            b.iter(|| find_roots(&f, black_box(&bounds), config))
        });
    }
    group.finish();
}

criterion_group!(benches, scan, sweep);
criterion_main!(benches);
