use algebra::Torus32;
use fhe_core::{and, andny, andyn, nand, nor, or, orny, oryn, xnor, xor};

/// `1/8`
const EIGHTH: Torus32 = Torus32::new(1 << 29);
/// `1/4`
const QUARTER: Torus32 = Torus32::new(1 << 30);

/// The binary gates evaluated with one bootstrapping.
///
/// Each gate is a linear combination `bias + p0 * c0 + p1 * c1` of its
/// inputs, whose phase is positive exactly when the gate outputs `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryGate {
    /// `not(a and b)`
    Nand,
    /// `a and b`
    And,
    /// `a or b`
    Or,
    /// `not(a or b)`
    Nor,
    /// `a xor b`
    Xor,
    /// `not(a xor b)`
    Xnor,
    /// `not(a) and b`
    AndNY,
    /// `a and not(b)`
    AndYN,
    /// `not(a) or b`
    OrNY,
    /// `a or not(b)`
    OrYN,
}

impl BinaryGate {
    /// All the binary gates.
    pub const ALL: [BinaryGate; 10] = [
        BinaryGate::Nand,
        BinaryGate::And,
        BinaryGate::Or,
        BinaryGate::Nor,
        BinaryGate::Xor,
        BinaryGate::Xnor,
        BinaryGate::AndNY,
        BinaryGate::AndYN,
        BinaryGate::OrNY,
        BinaryGate::OrYN,
    ];

    /// Evaluates the gate on plaintext bits.
    #[inline]
    pub const fn evaluate(self, a: bool, b: bool) -> bool {
        match self {
            BinaryGate::Nand => nand(a, b),
            BinaryGate::And => and(a, b),
            BinaryGate::Or => or(a, b),
            BinaryGate::Nor => nor(a, b),
            BinaryGate::Xor => xor(a, b),
            BinaryGate::Xnor => xnor(a, b),
            BinaryGate::AndNY => andny(a, b),
            BinaryGate::AndYN => andyn(a, b),
            BinaryGate::OrNY => orny(a, b),
            BinaryGate::OrYN => oryn(a, b),
        }
    }

    /// Returns `(bias, p0, p1)` such that `bias + p0 * a + p1 * b` has the sign of the gate output.
    #[inline]
    pub fn linear_combination(self) -> (Torus32, i32, i32) {
        match self {
            BinaryGate::Nand => (EIGHTH, -1, -1),
            BinaryGate::And => (-EIGHTH, 1, 1),
            BinaryGate::Or => (EIGHTH, 1, 1),
            BinaryGate::Nor => (-EIGHTH, -1, -1),
            BinaryGate::Xor => (QUARTER, 2, 2),
            BinaryGate::Xnor => (-QUARTER, -2, -2),
            BinaryGate::AndNY => (-EIGHTH, -1, 1),
            BinaryGate::AndYN => (-EIGHTH, 1, -1),
            BinaryGate::OrNY => (EIGHTH, -1, 1),
            BinaryGate::OrYN => (EIGHTH, 1, -1),
        }
    }
}
