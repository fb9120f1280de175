use algebra::Torus32;

/// The torus encoding of `true`, `1/8`.
pub const TRUE_MESSAGE: Torus32 = Torus32::new(1 << 29);

/// The torus encoding of `false`, `-1/8`.
pub const FALSE_MESSAGE: Torus32 = Torus32::new(-(1 << 29));

/// Encodes a message
#[inline]
pub fn encode(message: bool) -> Torus32 {
    if message {
        TRUE_MESSAGE
    } else {
        FALSE_MESSAGE
    }
}

/// Decodes a phase, by its sign.
#[inline]
pub fn decode(phase: Torus32) -> bool {
    phase.inner() > 0
}

/// Returns the distance, as a fraction of the torus, between `phase`
/// and the encoding of the message it decodes to.
#[inline]
pub fn noise_distance(phase: Torus32) -> f64 {
    phase.distance(encode(decode(phase)))
}
