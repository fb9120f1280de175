use algebra::random::sample_binary_values;
use algebra::{
    mod_switch_from_torus, mod_switch_to_torus, FftProcessor, IntPolynomial, Torus32,
    TorusPolynomial,
};
use lattice::utils::{ExternalProductSpace, TlweSpace};
use lattice::{extract_lwe_key, FourierTgsw, GadgetDecomposition, Lwe, Tgsw, Tlwe};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;

const N: usize = 1024; // ring dimension
const K: usize = 1; // module rank
const LWE_N: usize = 500;

const MSIZE: usize = 8; // message space

const LWE_STD_DEV: f64 = 2.44e-5;
const RING_STD_DEV: f64 = 7.18e-9;

fn ring_key(rng: &mut ChaCha12Rng) -> Vec<IntPolynomial> {
    (0..K)
        .map(|_| IntPolynomial::new(sample_binary_values(N, rng)))
        .collect()
}

#[test]
fn test_lwe() {
    let mut rng = ChaCha12Rng::seed_from_u64(100);

    let a1: Vec<Torus32> = (0..LWE_N).map(|_| rng.gen()).collect();
    let a2: Vec<Torus32> = (0..LWE_N).map(|_| rng.gen()).collect();
    let a3: Vec<Torus32> = a1.iter().zip(a2.iter()).map(|(&u, &v)| u + v).collect();

    let b1: Torus32 = rng.gen();
    let b2: Torus32 = rng.gen();

    let lwe1 = Lwe::new(a1, b1, 0.);
    let lwe2 = Lwe::new(a2, b2, 0.);
    let lwe3 = Lwe::new(a3, b1 + b2, 0.);
    assert_eq!(&lwe1 + &lwe2, lwe3);
    assert_eq!(&lwe3 - &lwe2, lwe1);
}

#[test]
fn test_lwe_he() {
    let mut rng = ChaCha12Rng::seed_from_u64(101);
    let key = sample_binary_values(LWE_N, &mut rng);

    let v0 = rng.gen_range(0..MSIZE as i32);
    let v1 = rng.gen_range(0..MSIZE as i32);

    let m0 = mod_switch_to_torus(v0, MSIZE);
    let m1 = mod_switch_to_torus(v1, MSIZE);

    let c0 = Lwe::encrypt(m0, &key, LWE_STD_DEV, &mut rng);
    let c1 = Lwe::encrypt(m1, &key, LWE_STD_DEV, &mut rng);

    let sum = &c0 + &c1;
    let decrypted = mod_switch_from_torus(sum.decrypt(&key, MSIZE), MSIZE);
    assert_eq!(decrypted as i32, (v0 + v1) % MSIZE as i32);
    assert_eq!(sum.variance(), 2. * LWE_STD_DEV * LWE_STD_DEV);

    let mut tripled = c0.clone();
    tripled.mul_scalar_assign(3);
    let decrypted = mod_switch_from_torus(tripled.decrypt(&key, MSIZE), MSIZE);
    assert_eq!(decrypted as i32, (3 * v0) % MSIZE as i32);
}

#[test]
fn test_tlwe_he() {
    let mut rng = ChaCha12Rng::seed_from_u64(102);
    let fft = FftProcessor::new(N).unwrap();
    let key = ring_key(&mut rng);

    let v0: Vec<i32> = (0..N).map(|_| rng.gen_range(0..MSIZE as i32)).collect();
    let v1: Vec<i32> = (0..N).map(|_| rng.gen_range(0..MSIZE as i32)).collect();

    let m0: TorusPolynomial = v0.iter().map(|&v| mod_switch_to_torus(v, MSIZE)).collect();
    let m1: TorusPolynomial = v1.iter().map(|&v| mod_switch_to_torus(v, MSIZE)).collect();

    let mut c0 = Tlwe::encrypt(&m0, &key, RING_STD_DEV, &fft, &mut rng);
    let c1 = Tlwe::encrypt(&m1, &key, RING_STD_DEV, &fft, &mut rng);

    c0.add_assign_component_wise(&c1);
    let decrypted = c0.decrypt(&key, MSIZE, &fft);
    let expect: TorusPolynomial = v0
        .iter()
        .zip(v1.iter())
        .map(|(&a, &b)| mod_switch_to_torus(a + b, MSIZE))
        .collect();
    assert_eq!(decrypted, expect);
}

#[test]
fn test_sample_extraction() {
    let mut rng = ChaCha12Rng::seed_from_u64(103);
    let fft = FftProcessor::new(N).unwrap();
    let key = ring_key(&mut rng);
    let lwe_key = extract_lwe_key(&key);

    let mu: TorusPolynomial = (0..N)
        .map(|_| mod_switch_to_torus(rng.gen_range(0..MSIZE as i32), MSIZE))
        .collect();
    let c = Tlwe::encrypt(&mu, &key, RING_STD_DEV, &fft, &mut rng);

    for index in [0, 1, N / 2, N - 1] {
        let lwe = c.extract_lwe(index);
        assert_eq!(lwe.dimension(), K * N);
        assert_eq!(lwe.decrypt(&lwe_key, MSIZE), mu[index]);
    }
}

#[test]
fn test_blind_rotation_step() {
    let mut rng = ChaCha12Rng::seed_from_u64(104);
    let fft = FftProcessor::new(N).unwrap();
    let key = ring_key(&mut rng);
    let gadget = GadgetDecomposition::new(3, 7);

    let mu: TorusPolynomial = (0..N)
        .map(|_| mod_switch_to_torus(rng.gen_range(0..MSIZE as i32), MSIZE))
        .collect();
    let acc = Tlwe::encrypt(&mu, &key, RING_STD_DEV, &fft, &mut rng);

    let mut space = ExternalProductSpace::new(K, gadget.length(), N);
    let mut temp = TlweSpace::new(K, N);

    for (bit, a) in [(0, 17usize), (1, 17), (1, N + 3)] {
        let bk = Tgsw::encrypt_int(bit, &key, gadget.clone(), RING_STD_DEV, &fft, &mut rng);
        let bk = FourierTgsw::from_tgsw(&bk, &fft);

        // acc + bk ⊡ ((X^a - 1) * acc)
        let mut result = acc.clone();
        acc.mul_by_x_ai_minus_one_into(a, &mut temp);
        bk.external_product_inplace(&mut temp, &fft, &mut space);
        result.add_assign_component_wise(&temp);

        let expect = if bit == 1 {
            mu.mul_by_x_ai(a)
        } else {
            mu.clone()
        };
        assert_eq!(result.decrypt(&key, MSIZE, &fft), expect);
    }
}
