//! Seeded deterministic randomness.
//!
//! Not a statistically rigorous PRNG and not cryptographically secure —
//! purely for reproducible "randomness": the same seed must yield the same
//! float sequence forever, because palette regeneration from a returned
//! seed is part of the engine's contract. The sine-of-counter transform is
//! kept behind this one small struct so it can be swapped for a stronger
//! deterministic generator without touching callers.

/// Deterministic sequence generator keyed by a string or numeric seed.
#[derive(Debug, Clone)]
pub struct SeededRng {
    /// Counter advanced by one per draw. f64 so the sine transform keeps
    /// full precision even for large hash seeds.
    state: f64,
}

impl SeededRng {
    /// Seed directly from a number.
    #[must_use]
    pub fn new(seed: u32) -> Self {
        Self { state: f64::from(seed) }
    }

    /// Seed from a string via a rolling hash:
    /// `hash = char + (hash << 5) - hash`, accumulated with wrapping i32
    /// arithmetic, then the absolute value.
    #[must_use]
    pub fn from_text(seed: &str) -> Self {
        let mut hash: i32 = 0;
        for ch in seed.chars() {
            hash = (ch as i32).wrapping_add(hash.wrapping_shl(5).wrapping_sub(hash));
        }
        Self::new(hash.unsigned_abs())
    }

    /// Next value in `[0, 1)`: fractional part of `sin(counter) * 10000`.
    pub fn next(&mut self) -> f32 {
        let x = self.state.sin() * 10_000.0;
        self.state += 1.0;
        // The f64→f32 rounding could land exactly on 1.0; keep the
        // half-open interval contract.
        ((x - x.floor()) as f32).min(0.999_999_94)
    }

    /// Next value linearly rescaled into `[lo, hi)`.
    pub fn next_range(&mut self, lo: f32, hi: f32) -> f32 {
        (hi - lo).mul_add(self.next(), lo)
    }

    /// Pick an element from a non-empty slice.
    #[allow(clippy::cast_sign_loss)]
    pub fn pick<'a, T>(&mut self, slice: &'a [T]) -> &'a T {
        let idx = (self.next() * slice.len() as f32) as usize;
        &slice[idx.min(slice.len() - 1)]
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
