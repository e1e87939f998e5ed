use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use silent_encoder::{Block, CodeConfig, ExConvCode, GF2};

fn random_blocks(len: usize) -> Vec<Block> {
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    (0..len).map(|_| Block::random(&mut rng)).collect()
}

pub fn bench_schedule(c: &mut Criterion) {
    let mut g = c.benchmark_group("exconv_schedule");
    for log_k in [12, 16] {
        let config = CodeConfig::with_defaults(1 << log_k).unwrap();
        g.bench_with_input(BenchmarkId::new("derive", log_k), &config, |b, config| {
            b.iter(|| black_box(ExConvCode::with_config(*config).unwrap()))
        });
    }
    g.finish();
}

pub fn bench_encode(c: &mut Criterion) {
    let mut g = c.benchmark_group("exconv_dual_encode");
    for log_k in [12, 16, 18] {
        let config = CodeConfig::with_defaults(1 << log_k).unwrap();
        let code = ExConvCode::with_config(config).unwrap();
        let input = random_blocks(config.code_size());
        let choice = vec![GF2::one(); config.code_size()];
        g.bench_with_input(BenchmarkId::new("block", log_k), &log_k, |b, _| {
            b.iter_batched_ref(
                || input.clone(),
                |buffer| code.encode_single_block(buffer).unwrap(),
                criterion::BatchSize::LargeInput,
            )
        });
        g.bench_with_input(BenchmarkId::new("block_and_bit", log_k), &log_k, |b, _| {
            b.iter_batched_ref(
                || (input.clone(), choice.clone()),
                |(blocks, bits)| code.encode_dual_block_bit(blocks, bits).unwrap(),
                criterion::BatchSize::LargeInput,
            )
        });
    }
    g.finish();
}

criterion_group!(benches, bench_schedule, bench_encode);
criterion_main!(benches);
