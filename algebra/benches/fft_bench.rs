use algebra::{random::sample_binary_values, FftProcessor, IntPolynomial, TorusPolynomial};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{distributions::Standard, prelude::*};
use rand_chacha::ChaCha12Rng;

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut rng = ChaCha12Rng::seed_from_u64(0);

    for log_n in [9u32, 10, 11] {
        let n = 1usize << log_n;
        let fft = FftProcessor::new(n).unwrap();

        let torus: TorusPolynomial = Standard.sample_iter(&mut rng).take(n).collect();
        let int = IntPolynomial::new(sample_binary_values(n, &mut rng));

        c.bench_function(&format!("fft forward {}", n), |b| {
            b.iter(|| fft.transform_torus(black_box(&torus)))
        });

        let fourier = fft.transform_torus(&torus);
        let mut out = TorusPolynomial::zero(n);
        c.bench_function(&format!("fft inverse {}", n), |b| {
            b.iter(|| fft.inverse_torus(black_box(&fourier), &mut out))
        });

        c.bench_function(&format!("fft mul {}", n), |b| {
            b.iter(|| fft.mul(black_box(&int), black_box(&torus)))
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
