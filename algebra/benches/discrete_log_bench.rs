use std::hint::black_box;

use algebra::arith::{discrete_log, pow_mod, primitive_root};
use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use rand::{distributions::Uniform, thread_rng, Rng};

pub fn criterion_benchmark(c: &mut Criterion) {
    let modulus = 998_244_353u64;
    let mut rng = thread_rng();
    let dis = Uniform::new(0, modulus - 1);

    c.bench_function("primitive root", |b| {
        b.iter(|| primitive_root(black_box(modulus)))
    });

    let g = primitive_root(modulus).unwrap();
    c.bench_function("discrete log", |b| {
        b.iter_batched(
            || pow_mod(g, rng.sample(dis), modulus),
            |y| discrete_log(black_box(g), black_box(y), black_box(modulus)),
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
