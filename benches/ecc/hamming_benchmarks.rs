use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hamming_channel::ecc::{noise, HammingCode};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_message(len: usize) -> String {
    let mut rng = StdRng::seed_from_u64(42);
    (0..len)
        .map(|_| rng.gen_range(b'a'..=b'z') as char)
        .collect()
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("hamming_encode");
    let message = random_message(4096);

    for mode in [8, 43, 120] {
        let code = HammingCode::new(mode).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(mode), &message, |b, message| {
            b.iter(|| code.encode(black_box(message)))
        });
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("hamming_decode");
    let message = random_message(4096);
    let mut rng = StdRng::seed_from_u64(7);

    for mode in [8, 43, 120] {
        let code = HammingCode::new(mode).unwrap();
        let clean = code.encode(&message);
        let noisy = noise::flip_one_bit_per_codeword_with_rng(&clean, mode, &mut rng).unwrap();

        group.bench_with_input(BenchmarkId::new("clean", mode), &clean, |b, bits| {
            b.iter(|| code.decode(black_box(bits)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("one_flip", mode), &noisy, |b, bits| {
            b.iter(|| code.decode(black_box(bits)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
