//! Random source capability.
//!
//! `shuffle_with` takes the generator explicitly instead of reaching for a
//! process-wide seed, so callers decide how state is shared across threads.

/// A source of uniformly distributed indices.
pub trait RandSource {
    /// Uniform integer in `[0, bound)`. `bound` is never zero.
    fn below(&mut self, bound: usize) -> usize;
}

impl<R: RandSource + ?Sized> RandSource for &mut R {
    #[inline]
    fn below(&mut self, bound: usize) -> usize {
        (**self).below(bound)
    }
}

#[cfg(feature = "rand")]
impl RandSource for fastrand::Rng {
    #[inline]
    fn below(&mut self, bound: usize) -> usize {
        self.usize(..bound)
    }
}

/// Deterministic linear congruential generator.
///
/// Reproducible for a given seed; available without `std`.
#[derive(Debug, Clone)]
pub struct Lcg {
    state: u64,
}

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Next raw value.
    pub fn next_u64(&mut self) -> u64 {
        // Knuth MMIX multiplier and increment
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.state
    }
}

impl Default for Lcg {
    fn default() -> Self {
        Self::new(1)
    }
}

impl RandSource for Lcg {
    fn below(&mut self, bound: usize) -> usize {
        // Widening multiply keeps the high bits, the well-mixed ones of an LCG.
        ((self.next_u64() as u128 * bound as u128) >> 64) as usize
    }
}
