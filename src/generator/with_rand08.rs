//! Integration with `rand` (v0.8) crate.

use super::{Generator, RandSource};
use rand::RngCore;

/// An adapter that implements [`RandSource`] for [`RngCore`] types.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Adapter<T>(/** The wrapped [`RngCore`] type. */ pub T);

impl<T: RngCore> RandSource for Adapter<T> {
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.0.fill_bytes(dest);
    }
}

impl<T: RngCore> Generator<Adapter<T>> {
    /// Creates a generator object with a specified random number generator that implements
    /// [`RngCore`] from `rand` (v0.8) crate.
    pub const fn with_rand08(rng: T) -> Self {
        Self::new(Adapter(rng))
    }
}

#[cfg(test)]
mod tests {
    use super::Adapter;
    use crate::{Generator, UuidValue, Variant};
    use rand::{rngs::StdRng, SeedableRng};

    /// Reproduces identifiers from the same seed
    #[test]
    fn reproduces_identifiers_from_the_same_seed() {
        let mut g = Generator::with_rand08(StdRng::seed_from_u64(42));
        let mut h = Generator::new(Adapter(StdRng::seed_from_u64(42)));
        for _ in 0..1_000 {
            let e = g.generate_v4();
            assert_eq!(e, h.generate_v4());
            assert_eq!(e.version(), 4);
            assert_eq!(e.variant(), Variant::Rfc4122);
        }
    }
}
