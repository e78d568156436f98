use rand::prelude::*;

/// Seedable RNG passed explicitly wherever randomness is needed.
///
/// The library never reaches for a global or thread-local generator; a
/// seeded `RngState` makes every randomized component reproducible.
#[repr(transparent)]
#[derive(Debug, Clone)]
pub struct RngState(pub SmallRng);

impl RngState {
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
}

impl From<SmallRng> for RngState {
    fn from(value: SmallRng) -> Self {
        Self(value)
    }
}

impl RngCore for RngState {
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.0.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.0.try_fill_bytes(dest)
    }
}
