//! Criterion benchmarks for the job-shop GA.
//!
//! Measures the makespan simulator on its own and full GA runs on the
//! built-in sample instance under varying population sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use u_jobshop::ga::{Chromosome, GaConfig, GaRunner};
use u_jobshop::models::Instance;
use u_jobshop::sim::simulate;

fn bench_simulate(c: &mut Criterion) {
    let instance = Instance::sample();
    let mut rng = SmallRng::seed_from_u64(42);
    let chromosome = Chromosome::random(&instance, &mut rng);

    c.bench_function("simulate_sample_instance", |b| {
        b.iter(|| simulate(black_box(&instance), black_box(&chromosome)))
    });
}

fn bench_ga_sample(c: &mut Criterion) {
    let instance = Instance::sample();
    let mut group = c.benchmark_group("ga_sample_instance");
    group.sample_size(10);

    for &pop in &[20usize, 50, 100] {
        let config = GaConfig::default()
            .with_population_size(pop)
            .with_generations(50)
            .with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(pop), &config, |b, cfg| {
            b.iter(|| {
                let result = GaRunner::run(black_box(&instance), black_box(cfg));
                black_box(result)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_simulate, bench_ga_sample);
criterion_main!(benches);
