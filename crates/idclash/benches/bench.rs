use core::hint::black_box;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use idclash::{
    AlphabetGenerator, IdGenerator, TimeOrderedGenerator, collision_probability, simulate,
};

// Number of IDs drawn per benchmark iteration.
const TOTAL_IDS: usize = 4096;

fn bench_generate(c: &mut Criterion, group_name: &str, generator: &dyn IdGenerator) {
    let mut group = c.benchmark_group(group_name);
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));

    group.bench_function(format!("elems/{TOTAL_IDS}"), |b| {
        b.iter(|| {
            for _ in 0..TOTAL_IDS {
                black_box(generator.generate());
            }
        })
    });

    group.finish();
}

fn bench_generators(c: &mut Criterion) {
    let base64 = AlphabetGenerator::base64(10).unwrap();
    bench_generate(c, "generate/base64", &base64);

    let base62 = AlphabetGenerator::base62(10).unwrap();
    bench_generate(c, "generate/base62", &base62);

    let snowflake = TimeOrderedGenerator::new(0);
    bench_generate(c, "generate/snowflake", &snowflake);
}

fn bench_closed_form(c: &mut Criterion) {
    c.bench_function("probability/closed_form", |b| {
        b.iter(|| black_box(collision_probability(black_box(1_000), black_box(1 << 60))))
    });
}

fn bench_simulation(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulate/base62");
    group.throughput(Throughput::Elements(10_000));
    group.sample_size(20);

    group.bench_function("elems/10000", |b| {
        let generator = AlphabetGenerator::base62(8).unwrap();
        b.iter(|| black_box(simulate(&generator, 10_000)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_generators,
    bench_closed_form,
    bench_simulation
);
criterion_main!(benches);
