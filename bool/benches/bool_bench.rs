use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;
use tfhe_bool::{Encryptor, Evaluator, KeyGen, DEFAULT_128_BITS_PARAMETERS};

pub fn criterion_benchmark(c: &mut Criterion) {
    // set random generator
    let mut rng = ChaCha12Rng::from_entropy();

    // generate keys
    let (sk, ek) = KeyGen::generate_keys(*DEFAULT_128_BITS_PARAMETERS, &mut rng).unwrap();
    let evaluator = Evaluator::from(ek);
    let encryptor = Encryptor::new(&sk);

    let c0 = encryptor.encrypt(rng.gen(), &mut rng);
    let c1 = encryptor.encrypt(rng.gen(), &mut rng);
    let c2 = encryptor.encrypt(rng.gen(), &mut rng);

    c.bench_function("nand", |b| {
        b.iter(|| evaluator.nand(black_box(&c0), black_box(&c1)))
    });

    c.bench_function("mux", |b| {
        b.iter(|| evaluator.mux(black_box(&c0), black_box(&c1), black_box(&c2)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
