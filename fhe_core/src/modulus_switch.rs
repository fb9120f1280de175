use algebra::mod_switch_from_torus;
use lattice::Lwe;

/// A [`Lwe`] sample whose coefficients are rounded to `Z_modulus`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModulusSwitchedLwe {
    a: Vec<usize>,
    b: usize,
    modulus: usize,
}

impl ModulusSwitchedLwe {
    /// Returns the switched mask, every value in `[0, modulus)`.
    #[inline]
    pub fn a(&self) -> &[usize] {
        &self.a
    }

    /// Returns the switched body, in `[0, modulus)`.
    #[inline]
    pub fn b(&self) -> usize {
        self.b
    }

    /// Returns the modulus of this sample.
    #[inline]
    pub fn modulus(&self) -> usize {
        self.modulus
    }

    /// Computes the phase `b - <a, key>` modulo `modulus`.
    ///
    /// # Panics
    ///
    /// Panics if the key length differs from the dimension.
    pub fn phase(&self, key: &[i32]) -> usize {
        assert_eq!(self.a.len(), key.len(), "dimension mismatch");
        let inner = self
            .a
            .iter()
            .zip(key)
            .filter(|(_, &s)| s != 0)
            .fold(0, |acc, (&a, _)| (acc + a) % self.modulus);
        (self.b + self.modulus - inner) % self.modulus
    }
}

/// Implementation of modulus switching, rounding every coefficient of `c`
/// to the closest multiple of `1 / modulus_after`.
///
/// The bootstrapping switches to `2N`.
#[inline]
pub fn lwe_modulus_switch(c: &Lwe, modulus_after: usize) -> ModulusSwitchedLwe {
    let mut destination = ModulusSwitchedLwe {
        a: Vec::with_capacity(c.dimension()),
        b: 0,
        modulus: modulus_after,
    };
    lwe_modulus_switch_inplace(c, modulus_after, &mut destination);
    destination
}

/// Implementation of modulus switching, reusing the storage of `destination`.
pub fn lwe_modulus_switch_inplace(
    c: &Lwe,
    modulus_after: usize,
    destination: &mut ModulusSwitchedLwe,
) {
    destination.a.clear();
    destination.a.extend(
        c.a()
            .iter()
            .map(|&v| mod_switch_from_torus(v, modulus_after)),
    );
    destination.b = mod_switch_from_torus(c.b(), modulus_after);
    destination.modulus = modulus_after;
}

#[cfg(test)]
mod tests {
    use algebra::{mod_switch_to_torus, random::sample_binary_values};
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha12Rng;

    use super::*;

    #[test]
    fn test_modulus_switch() {
        let mut rng = ChaCha12Rng::seed_from_u64(41);
        let key = sample_binary_values(64, &mut rng);
        let modulus = 2048;

        for _ in 0..16 {
            let v = rng.gen_range(0..8);
            let c = Lwe::encrypt(mod_switch_to_torus(v, 8), &key, 2f64.powi(-25), &mut rng);
            let switched = lwe_modulus_switch(&c, modulus);
            assert_eq!(switched.modulus(), modulus);
            assert!(switched.a().iter().all(|&a| a < modulus));

            // each of the 65 roundings moves the phase by at most 1/2
            let phase = switched.phase(&key) as i64;
            let expect = v as i64 * (modulus / 8) as i64;
            let diff = (phase - expect).rem_euclid(modulus as i64);
            let diff = diff.min(modulus as i64 - diff);
            assert!(diff <= 33, "diff = {diff}");
        }
    }
}
