use fhe_core::{mux, FALSE_MESSAGE};
use once_cell::sync::Lazy;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;
use tfhe_bool::{
    BinaryGate, ConstParameters, Decryptor, Encryptor, Evaluator, KeyGen, LutEncoder, Lwe,
    SecretKeyPack, CONST_DEFAULT_128_BITS_PARAMETERS, DEFAULT_128_BITS_PARAMETERS,
    DEFAULT_80_BITS_PARAMETERS,
};

struct Keys {
    sk: SecretKeyPack,
    evaluator: Evaluator,
    encryptor: Encryptor,
    decryptor: Decryptor,
}

impl Keys {
    fn new(seed: u64, params: tfhe_bool::Parameters) -> Self {
        let mut rng = ChaCha12Rng::seed_from_u64(seed);
        let (sk, ek) = KeyGen::generate_keys(params, &mut rng).unwrap();
        Self {
            encryptor: Encryptor::new(&sk),
            decryptor: Decryptor::new(&sk),
            evaluator: Evaluator::from(ek),
            sk,
        }
    }
}

static KEYS_128: Lazy<Keys> = Lazy::new(|| Keys::new(0, *DEFAULT_128_BITS_PARAMETERS));

const INPUTS: [(bool, bool); 4] = [(false, false), (false, true), (true, false), (true, true)];

#[test]
fn test_nand_scenario() {
    let keys = &*KEYS_128;
    let mut rng = ChaCha12Rng::seed_from_u64(0);

    let c0 = keys.encryptor.encrypt(true, &mut rng);
    let c1 = keys.encryptor.encrypt(false, &mut rng);
    let c = keys.evaluator.nand(&c0, &c1);
    assert!(keys.decryptor.decrypt(&c));
}

#[test]
fn test_and_scenario() {
    let keys = &*KEYS_128;
    let mut rng = ChaCha12Rng::seed_from_u64(0);

    let c0 = keys.encryptor.encrypt(true, &mut rng);
    let c1 = keys.encryptor.encrypt(true, &mut rng);
    let c = keys.evaluator.and(&c0, &c1);
    assert!(keys.decryptor.decrypt(&c));
}

#[test]
fn test_xor_scenario() {
    let keys = &*KEYS_128;
    let mut rng = ChaCha12Rng::seed_from_u64(0);

    let c0 = keys.encryptor.encrypt(true, &mut rng);
    let c1 = keys.encryptor.encrypt(true, &mut rng);
    let c = keys.evaluator.xor(&c0, &c1);
    assert!(!keys.decryptor.decrypt(&c));
}

#[test]
fn test_mux_scenario() {
    let keys = &*KEYS_128;
    let mut rng = ChaCha12Rng::seed_from_u64(0);

    // sel = false selects b
    let sel = keys.encryptor.encrypt(false, &mut rng);
    let a = keys.encryptor.encrypt(false, &mut rng);
    let b = keys.encryptor.encrypt(true, &mut rng);
    let c = keys.evaluator.mux(&sel, &a, &b);
    assert!(keys.decryptor.decrypt(&c));
}

#[test]
fn test_ripple_carry_adder() {
    let keys = &*KEYS_128;
    let evaluator = &keys.evaluator;
    let mut rng = ChaCha12Rng::seed_from_u64(0);

    let x = keys.encryptor.encrypt_bits(5, 8, &mut rng);
    let y = keys.encryptor.encrypt_bits(3, 8, &mut rng);

    let mut carry = evaluator.constant(false);
    let mut sum = Vec::with_capacity(8);
    for (a, b) in x.iter().zip(&y) {
        let t = evaluator.xor(a, b);
        sum.push(evaluator.xor(&t, &carry));
        let g = evaluator.and(a, b);
        let p = evaluator.and(&t, &carry);
        carry = evaluator.or(&g, &p);
    }

    assert_eq!(keys.decryptor.decrypt_bits(&sum), 8);
    assert!(!keys.decryptor.decrypt(&carry));
}

#[test]
fn test_repeated_nand() {
    let keys = Keys::new(42, *DEFAULT_80_BITS_PARAMETERS);
    let mut rng = ChaCha12Rng::seed_from_u64(42);

    // nand(c, c) = not(c), so the message flips every iteration
    let mut c = keys.encryptor.encrypt(false, &mut rng);
    for i in 0..100 {
        c = keys.evaluator.nand(&c, &c);
        // i + 1 flips so far
        let expect = i % 2 == 0;
        if i % 10 == 0 {
            assert!(keys.decryptor.decrypt(&c), "iteration {i}");
        }
        assert_eq!(keys.decryptor.decrypt(&c), expect, "iteration {i}");
    }
}

#[test]
fn test_truth_tables() {
    let keys = &*KEYS_128;
    let mut rng = ChaCha12Rng::seed_from_u64(1);

    for gate in BinaryGate::ALL {
        for (a, b) in INPUTS {
            let c0 = keys.encryptor.encrypt(a, &mut rng);
            let c1 = keys.encryptor.encrypt(b, &mut rng);
            let c = keys.evaluator.gate(gate, &c0, &c1);
            let (m, noise) = keys.decryptor.decrypt_with_noise(&c);
            assert_eq!(m, gate.evaluate(a, b), "{gate:?}({a}, {b})");
            assert!(noise < 1. / 16.);
        }
    }
}

#[test]
fn test_named_gates() {
    let keys = &*KEYS_128;
    let evaluator = &keys.evaluator;
    let mut rng = ChaCha12Rng::seed_from_u64(2);

    for (a, b) in INPUTS {
        let c0 = keys.encryptor.encrypt(a, &mut rng);
        let c1 = keys.encryptor.encrypt(b, &mut rng);
        let decrypt = |c: Lwe| keys.decryptor.decrypt(&c);

        assert_eq!(decrypt(evaluator.nand(&c0, &c1)), !(a & b));
        assert_eq!(decrypt(evaluator.and(&c0, &c1)), a & b);
        assert_eq!(decrypt(evaluator.or(&c0, &c1)), a | b);
        assert_eq!(decrypt(evaluator.nor(&c0, &c1)), !(a | b));
        assert_eq!(decrypt(evaluator.xor(&c0, &c1)), a ^ b);
        assert_eq!(decrypt(evaluator.xnor(&c0, &c1)), !(a ^ b));
        assert_eq!(decrypt(evaluator.andny(&c0, &c1)), !a & b);
        assert_eq!(decrypt(evaluator.andyn(&c0, &c1)), a & !b);
        assert_eq!(decrypt(evaluator.orny(&c0, &c1)), !a | b);
        assert_eq!(decrypt(evaluator.oryn(&c0, &c1)), a | !b);
        assert_eq!(decrypt(evaluator.not(&c0)), !a);
        assert_eq!(decrypt(evaluator.copy(&c0)), a);
    }

    assert!(keys.decryptor.decrypt(&evaluator.constant(true)));
    assert!(!keys.decryptor.decrypt(&evaluator.constant(false)));
    assert_eq!(evaluator.constant(false).variance(), 0.);
    assert_eq!(evaluator.constant(false).b(), FALSE_MESSAGE);
}

#[test]
fn test_mux_and_majority() {
    let keys = &*KEYS_128;
    let mut rng = ChaCha12Rng::seed_from_u64(3);

    for bits in 0..8u32 {
        let (s, a, b) = (bits & 1 == 1, bits & 2 == 2, bits & 4 == 4);
        let c0 = keys.encryptor.encrypt(s, &mut rng);
        let c1 = keys.encryptor.encrypt(a, &mut rng);
        let c2 = keys.encryptor.encrypt(b, &mut rng);

        let c = keys.evaluator.mux(&c0, &c1, &c2);
        assert_eq!(keys.decryptor.decrypt(&c), mux(s, a, b), "mux({s}, {a}, {b})");
        assert_eq!(c.dimension(), keys.sk.parameters().lwe_dimension());

        let c = keys.evaluator.majority(&c0, &c1, &c2);
        let expect = (s & a) | (a & b) | (s & b);
        assert_eq!(keys.decryptor.decrypt(&c), expect);
    }
}

#[test]
fn test_bootstrapping_idempotence() {
    let keys = &*KEYS_128;
    let mut rng = ChaCha12Rng::seed_from_u64(4);
    let max_variance = keys.sk.parameters().max_noise_std_dev().powi(2);

    for message in [true, false] {
        let c = keys.encryptor.encrypt(message, &mut rng);
        let once = keys.evaluator.bootstrap(&c);
        let twice = keys.evaluator.bootstrap(&once);

        assert_eq!(keys.decryptor.decrypt(&once), message);
        assert_eq!(keys.decryptor.decrypt(&twice), message);
        assert!(once.variance() < max_variance);
        assert!(twice.variance() < max_variance);
        assert!((twice.variance() - once.variance()).abs() < 0.1 * once.variance());
    }
}

#[test]
fn test_batch_keeps_order() {
    let keys = &*KEYS_128;
    let mut rng = ChaCha12Rng::seed_from_u64(5);

    let a: Vec<bool> = (0..8).map(|_| rng.gen()).collect();
    let b: Vec<bool> = (0..8).map(|_| rng.gen()).collect();
    let c0: Vec<Lwe> = a.iter().map(|&m| keys.encryptor.encrypt(m, &mut rng)).collect();
    let c1: Vec<Lwe> = b.iter().map(|&m| keys.encryptor.encrypt(m, &mut rng)).collect();

    let result = keys.evaluator.batch(BinaryGate::Or, &c0, &c1);
    assert_eq!(result.len(), 8);
    for ((c, &x), &y) in result.iter().zip(&a).zip(&b) {
        assert_eq!(keys.decryptor.decrypt(c), x | y);
    }
}

#[test]
fn test_encrypt_decrypt_bits() {
    let keys = &*KEYS_128;
    let mut rng = ChaCha12Rng::seed_from_u64(6);

    for _ in 0..8 {
        let value: u64 = rng.gen_range(0..1 << 16);
        let c = keys.encryptor.encrypt_bits(value, 16, &mut rng);
        assert_eq!(keys.decryptor.decrypt_bits(&c), value);
        assert_eq!(keys.sk.decrypt(&c[0]), value & 1 == 1);
    }
}

#[test]
fn test_serialize() {
    let keys = &*KEYS_128;
    let mut rng = ChaCha12Rng::seed_from_u64(7);

    let bytes = bincode::serialize(&CONST_DEFAULT_128_BITS_PARAMETERS).unwrap();
    let params: ConstParameters = bincode::deserialize(&bytes).unwrap();
    assert_eq!(params, CONST_DEFAULT_128_BITS_PARAMETERS);

    let c = keys.encryptor.encrypt(true, &mut rng);
    let bytes = bincode::serialize(&c).unwrap();
    let d: Lwe = bincode::deserialize(&bytes).unwrap();
    assert_eq!(c, d);
    assert!(keys.decryptor.decrypt(&d));
}

#[test]
fn test_bootstrap_func() {
    let keys = &*KEYS_128;
    let evaluator = &keys.evaluator;
    let mut rng = ChaCha12Rng::seed_from_u64(8);

    // identity and not over Z_2
    let encoder = LutEncoder::new(2).unwrap();
    for x in [0, 1] {
        let c = keys.encryptor.encrypt_message(x, encoder, &mut rng);
        let id = evaluator.bootstrap_func(&c, 2, |x| x).unwrap();
        let not = evaluator.bootstrap_func(&c, 2, |x| 1 - x).unwrap();
        assert_eq!(keys.decryptor.decrypt_message(&id, encoder), x);
        assert_eq!(keys.decryptor.decrypt_message(&not, encoder), 1 - x);
    }

    // x * 3 mod 8
    let encoder = LutEncoder::new(8).unwrap();
    let lut = evaluator.lut(8, |x| x * 3 % 8).unwrap();
    for x in 0..8 {
        let c = keys.encryptor.encrypt_message(x, encoder, &mut rng);
        let c = evaluator.bootstrap_lut(&c, &lut);
        assert_eq!(c.dimension(), keys.sk.parameters().lwe_dimension());
        assert_eq!(keys.decryptor.decrypt_message(&c, encoder), x * 3 % 8);
    }
}

#[test]
fn test_bootstrap_lut_chained() {
    let keys = &*KEYS_128;
    let evaluator = &keys.evaluator;
    let mut rng = ChaCha12Rng::seed_from_u64(9);

    let encoder = LutEncoder::new(4).unwrap();
    let increment = evaluator.lut(4, |x| (x + 1) % 4).unwrap();
    assert_eq!(increment.encoder(), encoder);

    for x in 0..4 {
        let mut c = keys.encryptor.encrypt_message(x, encoder, &mut rng);
        for i in 1..=5 {
            c = evaluator.bootstrap_lut(&c, &increment);
            assert_eq!(keys.decryptor.decrypt_message(&c, encoder), (x + i) % 4);
        }
    }

    assert!(evaluator.bootstrap_func(&evaluator.constant(true), 1, |x| x).is_err());
}
