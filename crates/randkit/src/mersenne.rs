//! The 64-bit Mersenne Twister.

use crate::Prng;
use rand_core::impls::fill_bytes_via_next;
use rand_core::le::read_u64_into;
use rand_core::{RngCore, SeedableRng};
use tracing::trace;

const W: u32 = 64;
const N: usize = 312;
const M: usize = 156;
const R: u32 = 31;
const A: u64 = 0xB5026F5AA96619E9;
const U: u32 = 11;
const D: u64 = 0x5555555555555555;
const S: u32 = 17;
const B: u64 = 0x71D67FFFEDA60000;
const T: u32 = 37;
const C: u64 = 0xFFF7EEE000000000;
const L: u32 = 43;
const F: u64 = 0x5851F42D4C957F2D;
const LOWER_MASK: u64 = (1 << R) - 1;
const UPPER_MASK: u64 = !LOWER_MASK;

/// Seed used by the reference implementation when none is given.
pub const DEFAULT_SEED: u64 = 5489;

/// An MT19937-64 Mersenne Twister.
///
/// Not suitable for cryptographic purposes: the full state can be recovered from 312
/// consecutive outputs. Seeding and twisting follow Nishimura and Matsumoto's
/// `mt19937-64.c`, but the first tempering shift is 11 rather than their 29, so the
/// output differs from `mt19937-64.out`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MersenneTwister64 {
    mt: [u64; N],
    index: usize,
}

impl MersenneTwister64 {
    /// Fills the state from `seed` with the reference linear recurrence.
    ///
    /// The first output triggers a twist.
    pub fn new(seed: u64) -> MersenneTwister64 {
        let mut mt = [0u64; N];
        mt[0] = seed;
        for i in 1..N {
            mt[i] = F
                .wrapping_mul(mt[i - 1] ^ (mt[i - 1] >> (W - 2)))
                .wrapping_add(i as u64);
        }
        MersenneTwister64 { mt, index: N }
    }

    /// Seeds from an arbitrary-length key with the `init_by_array64` recurrence.
    ///
    /// An empty key is treated as the single word `0`.
    pub fn from_key(key: &[u64]) -> MersenneTwister64 {
        let key = if key.is_empty() { &[0u64][..] } else { key };
        let mut twister = MersenneTwister64::new(19650218);
        let mt = &mut twister.mt;

        let mut i = 1;
        let mut j = 0;
        for _ in 0..N.max(key.len()) {
            let prev = mt[i - 1] ^ (mt[i - 1] >> 62);
            mt[i] = (mt[i] ^ prev.wrapping_mul(3935559000370003845))
                .wrapping_add(key[j])
                .wrapping_add(j as u64);
            i += 1;
            j += 1;
            if i >= N {
                mt[0] = mt[N - 1];
                i = 1;
            }
            if j >= key.len() {
                j = 0;
            }
        }
        for _ in 0..N - 1 {
            let prev = mt[i - 1] ^ (mt[i - 1] >> 62);
            mt[i] = (mt[i] ^ prev.wrapping_mul(2862933555777941757)).wrapping_sub(i as u64);
            i += 1;
            if i >= N {
                mt[0] = mt[N - 1];
                i = 1;
            }
        }
        // MSB is 1, assuring a non-zero initial array.
        mt[0] = 1 << 63;

        twister
    }

    /// Regenerates all `N` words in one forward pass.
    ///
    /// `mt[i + 1]` and `mt[i + M]` are read before `mt[i]` is written. Past `N - M` the `M`
    /// offset wraps onto words already rewritten in this pass, as in the reference algorithm.
    fn twist(&mut self) {
        trace!("twisting mersenne twister state");
        for i in 0..N {
            let x = (self.mt[i] & UPPER_MASK) + (self.mt[(i + 1) % N] & LOWER_MASK);
            let mut x_a = x >> 1;
            if x & 1 != 0 {
                x_a ^= A;
            }
            self.mt[i] = self.mt[(i + M) % N] ^ x_a;
        }
        self.index = 0;
    }

    #[inline]
    fn temper(mut y: u64) -> u64 {
        y ^= (y >> U) & D;
        y ^= (y << S) & B;
        y ^= (y << T) & C;
        y ^= y >> L;
        y
    }
}

impl Default for MersenneTwister64 {
    fn default() -> MersenneTwister64 {
        MersenneTwister64::new(DEFAULT_SEED)
    }
}

impl RngCore for MersenneTwister64 {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        if self.index >= N {
            self.twist();
        }
        let y = self.mt[self.index];
        self.index += 1;
        Self::temper(y)
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        fill_bytes_via_next(self, dest);
    }
}

impl SeedableRng for MersenneTwister64 {
    type Seed = [u8; 8];

    /// Seeds from a single little-endian `u64`.
    fn from_seed(seed: [u8; 8]) -> MersenneTwister64 {
        let mut state = [0; 1];
        read_u64_into(&seed, &mut state);
        MersenneTwister64::new(state[0])
    }

    /// The twister takes a 64-bit seed natively, so no expansion is involved.
    fn seed_from_u64(seed: u64) -> MersenneTwister64 {
        MersenneTwister64::new(seed)
    }
}

impl Prng for MersenneTwister64 {
    const SEED_WORDS: usize = 1;

    fn from_seed_words(words: &[u64]) -> MersenneTwister64 {
        MersenneTwister64::new(words.first().copied().unwrap_or(0))
    }
}
