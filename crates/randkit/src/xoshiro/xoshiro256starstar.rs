use crate::{expand_seed, Prng};
use rand_core::impls::fill_bytes_via_next;
use rand_core::le::read_u64_into;
use rand_core::{RngCore, SeedableRng};

/// A xoshiro256** random number generator.
///
/// The xoshiro256** algorithm is not suitable for cryptographic purposes, but
/// is very fast and has excellent statistical properties.
///
/// The algorithm used here is translated from [the `xoshiro256starstar.c`
/// reference source code](http://xoshiro.di.unimi.it/xoshiro256starstar.c) by
/// David Blackman and Sebastiano Vigna.
///
/// The all-zero state is a fixed point of the transition and only ever yields
/// zeros. [`Xoshiro256StarStar::new`] stores whatever it is given, so avoiding
/// it is up to the caller; the byte-seed path of [`SeedableRng::from_seed`]
/// remaps it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Xoshiro256StarStar {
    s: [u64; 4],
}

impl Xoshiro256StarStar {
    /// Creates a generator whose state is exactly `s`.
    pub const fn new(s: [u64; 4]) -> Xoshiro256StarStar {
        Xoshiro256StarStar { s }
    }

    /// Jump forward, equivalently to 2^128 calls to `next_u64()`.
    ///
    /// This can be used to generate 2^128 non-overlapping subsequences for
    /// parallel computations.
    ///
    /// ```
    /// use randkit::rand_core::SeedableRng;
    /// use randkit::Xoshiro256StarStar;
    ///
    /// let rng1 = Xoshiro256StarStar::seed_from_u64(0);
    /// let mut rng2 = rng1.clone();
    /// rng2.jump();
    /// let mut rng3 = rng2.clone();
    /// rng3.jump();
    /// ```
    pub fn jump(&mut self) {
        impl_jump!(
            u64,
            self,
            [
                0x180ec6d33cfd0aba,
                0xd5a61266f0c9392c,
                0xa9582618e03fc9aa,
                0x39abdc4529b1661c
            ]
        );
    }

    /// Jump forward, equivalently to 2^192 calls to `next_u64()`.
    ///
    /// This can be used to generate 2^64 starting points, from each of which
    /// `jump()` will generate 2^64 non-overlapping subsequences for parallel
    /// distributed computations.
    pub fn long_jump(&mut self) {
        impl_jump!(
            u64,
            self,
            [
                0x76e15d3efefdcbbf,
                0xc5004e441c522fb3,
                0x77710069854ee241,
                0x39109bb02acbe635
            ]
        );
    }

    /// Initializes multiple RNG states such that each state corresponds to a subsequence
    /// separated by `2**128` steps from eachother in the main sequence. This ensures that as long as
    /// no state requests more than `2**128` random numbers, the states are guaranteed to be fully independent.
    pub fn initialize_states(seed: u64, num_states: usize) -> Vec<Self> {
        core::iter::successors(Some(Self::seed_from_u64(seed)), |prev| {
            let mut next = *prev;
            next.jump();
            Some(next)
        })
        .take(num_states)
        .collect()
    }
}

impl SeedableRng for Xoshiro256StarStar {
    type Seed = [u8; 32];

    /// Create a new `Xoshiro256StarStar`.  If `seed` is entirely 0, it will be
    /// mapped to a different seed.
    #[inline]
    fn from_seed(seed: [u8; 32]) -> Xoshiro256StarStar {
        deal_with_zero_seed!(seed, Self);
        let mut state = [0; 4];
        read_u64_into(&seed, &mut state);
        Xoshiro256StarStar { s: state }
    }

    /// Seed a `Xoshiro256StarStar` from a `u64` using `SplitMix64`.
    fn seed_from_u64(seed: u64) -> Xoshiro256StarStar {
        expand_seed(seed)
    }
}

impl Prng for Xoshiro256StarStar {
    const SEED_WORDS: usize = 4;

    fn from_seed_words(words: &[u64]) -> Xoshiro256StarStar {
        let mut s = [0; 4];
        let n = words.len().min(s.len());
        s[..n].copy_from_slice(&words[..n]);
        Xoshiro256StarStar::new(s)
    }
}

impl RngCore for Xoshiro256StarStar {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        // The lowest bits have some linear dependencies, so we use the
        // upper bits instead.
        (self.next_u64() >> 32) as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        let result_starstar = starstar_u64!(self.s[1]);
        impl_xoshiro_u64!(self);
        result_starstar
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        fill_bytes_via_next(self, dest);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SplitMix64;

    #[test]
    fn reference() {
        let mut rng = Xoshiro256StarStar::from_seed([
            1, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 4, 0, 0, 0, 0,
            0, 0, 0,
        ]);
        // These values were produced with the reference implementation:
        // http://xoshiro.di.unimi.it/xoshiro256starstar.c
        let expected = [
            11520,
            0,
            1509978240,
            1215971899390074240,
            1216172134540287360,
            607988272756665600,
            16172922978634559625,
            8476171486693032832,
            10595114339597558777,
            2904607092377533576,
        ];
        for &e in &expected {
            assert_eq!(rng.next_u64(), e);
        }
    }

    #[test]
    fn word_seed_matches_byte_seed() {
        let mut bytes = [0u8; 32];
        for (i, chunk) in bytes.chunks_mut(8).enumerate() {
            chunk.copy_from_slice(&(i as u64 + 1).to_le_bytes());
        }
        assert_eq!(
            Xoshiro256StarStar::new([1, 2, 3, 4]),
            Xoshiro256StarStar::from_seed(bytes)
        );
    }

    #[test]
    fn seed_from_u64_draws_four_splitmix_words() {
        let mut expander = SplitMix64::new(42);
        let words = [
            expander.next_u64(),
            expander.next_u64(),
            expander.next_u64(),
            expander.next_u64(),
        ];
        let mut rng = Xoshiro256StarStar::seed_from_u64(42);
        assert_eq!(rng, Xoshiro256StarStar::new(words));
        assert_eq!(rng.next_u64(), 1546998764402558742);
        assert_eq!(rng.next_u64(), 6990951692964543102);
    }

    #[test]
    fn zero_byte_seed_is_remapped() {
        let rng = Xoshiro256StarStar::from_seed([0; 32]);
        assert_eq!(rng, Xoshiro256StarStar::seed_from_u64(0));
        assert_ne!(rng.s, [0; 4]);
    }

    #[test]
    fn zero_word_seed_is_kept() {
        let mut rng = Xoshiro256StarStar::from_seed_words(&[]);
        assert_eq!(rng.s, [0; 4]);
        assert_eq!(rng.next_u64(), 0);
    }

    #[test]
    fn zero_source_seeds_differ_by_path() {
        // The all-zero state is itself a source of nothing but zeros.
        let mut zeros = Xoshiro256StarStar::new([0; 4]);
        let via_rng = Xoshiro256StarStar::from_rng(&mut zeros);
        let via_generator = Xoshiro256StarStar::from_generator(&mut zeros);

        assert_eq!(via_rng, Xoshiro256StarStar::seed_from_u64(0));
        assert_eq!(via_generator.s, [0; 4]);
        assert_ne!(via_rng, via_generator);
    }

    #[test]
    fn initialized_states_are_one_jump_apart() {
        let states = Xoshiro256StarStar::initialize_states(7, 3);
        assert_eq!(states.len(), 3);

        let mut expected = Xoshiro256StarStar::seed_from_u64(7);
        for state in &states {
            assert_eq!(*state, expected);
            expected.jump();
        }
    }

    #[test]
    fn long_jump_differs_from_jump() {
        let mut a = Xoshiro256StarStar::seed_from_u64(1);
        let mut b = a;
        a.jump();
        b.long_jump();
        assert_ne!(a, b);
    }
}
