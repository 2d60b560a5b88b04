//! Random number generator (xorshift32)
//!
//! Deterministic and seedable so spawn placement is reproducible in tests.
//! The state must never be zero; the world initializer guarantees that.

/// Advance the state and return the next raw 32-bit value.
#[inline]
pub fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Next float in [0, 1).
///
/// Uses the top 24 bits so every value is exactly representable in f32.
#[inline]
pub fn unit_f32(state: &mut u32) -> f32 {
    (xorshift32(state) >> 8) as f32 / (1u32 << 24) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = 42u32;
        let mut b = 42u32;
        for _ in 0..100 {
            assert_eq!(xorshift32(&mut a), xorshift32(&mut b));
        }
    }

    #[test]
    fn unit_f32_stays_in_range() {
        let mut state = 12345u32;
        for _ in 0..10_000 {
            let v = unit_f32(&mut state);
            assert!((0.0..1.0).contains(&v));
        }
    }
}
