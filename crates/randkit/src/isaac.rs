//! The ISAAC generator over 64-bit words.

use crate::{expand_seed, Csprng, Prng};
use rand_core::impls::fill_bytes_via_next;
use rand_core::le::read_u64_into;
use rand_core::{CryptoRng, RngCore, SeedableRng};
use tracing::trace;

/// Words of internal memory, and of output per batch.
pub const RAND_SIZE: usize = 256;

/// Bytes in an [`IsaacSeed`].
pub const SEED_BYTES: usize = RAND_SIZE * 8;

const GOLDEN_RATIO: u64 = 0x9e3779b97f4a7c13;

/// 2048-byte seed for [`Isaac64`], read as 256 little-endian words.
///
/// This wrapper is necessary, because some traits required for a seed are not
/// implemented on large arrays.
#[derive(Clone)]
pub struct IsaacSeed(pub [u8; SEED_BYTES]);

impl core::fmt::Debug for IsaacSeed {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Debug::fmt(&self.0[..], f)
    }
}

impl Default for IsaacSeed {
    fn default() -> IsaacSeed {
        IsaacSeed([0; SEED_BYTES])
    }
}

impl AsMut<[u8]> for IsaacSeed {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.0
    }
}

impl AsRef<[u8]> for IsaacSeed {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// An ISAAC random number generator producing 64-bit words.
///
/// Output is produced in batches of [`RAND_SIZE`] words; the whole internal memory is
/// rewritten once per batch. The round schedule is the one from Bob Jenkins' ISAAC
/// (`<<13, >>6, <<2, >>16`, indirection through bits `2..10` and `10..18`) applied to
/// 64-bit words, so the output is not the `isaac64.c` sequence.
#[derive(Clone)]
pub struct Isaac64 {
    mm: [u64; RAND_SIZE],
    result: [u64; RAND_SIZE],
    aa: u64,
    bb: u64,
    cc: u64,
    count: usize,
}

impl Isaac64 {
    /// Seeds the generator. The seed is zero-padded or truncated to [`RAND_SIZE`] words.
    pub fn new(seed: &[u64]) -> Isaac64 {
        let seed = normalize_seed(seed);

        let mut state = [GOLDEN_RATIO; 8];
        for _ in 0..4 {
            mix(&mut state);
        }

        let mut mm = [0u64; RAND_SIZE];
        for (block, seed_block) in mm.chunks_exact_mut(8).zip(seed.chunks_exact(8)) {
            for (s, &w) in state.iter_mut().zip(seed_block) {
                *s = s.wrapping_add(w);
            }
            mix(&mut state);
            block.copy_from_slice(&state);
        }
        // Second pass so every seed word affects all of `mm`.
        for block in mm.chunks_exact_mut(8) {
            for (s, &w) in state.iter_mut().zip(block.iter()) {
                *s = s.wrapping_add(w);
            }
            mix(&mut state);
            block.copy_from_slice(&state);
        }

        Isaac64 {
            mm,
            result: [0; RAND_SIZE],
            aa: 0,
            bb: 0,
            cc: 0,
            count: RAND_SIZE,
        }
    }

    /// Refills `result` with the next batch and rewinds the read position.
    fn generate(&mut self) {
        self.cc = self.cc.wrapping_add(1);
        self.bb = self.bb.wrapping_add(self.cc);
        trace!(batch = self.cc, "generating isaac64 batch");

        for i in 0..RAND_SIZE {
            let x = self.mm[i];
            self.aa ^= match i & 3 {
                0 => self.aa << 13,
                1 => self.aa >> 6,
                2 => self.aa << 2,
                _ => self.aa >> 16,
            };
            self.aa = self.mm[i ^ 128].wrapping_add(self.aa);
            let y = self.mm[(x >> 2) as usize & 0xff]
                .wrapping_add(self.aa)
                .wrapping_add(self.bb);
            self.mm[i] = y;
            self.bb = self.mm[(y >> 10) as usize & 0xff].wrapping_add(x);
            self.result[i] = self.bb;
        }
        self.count = 0;
    }
}

fn normalize_seed(seed: &[u64]) -> [u64; RAND_SIZE] {
    let mut words = [0u64; RAND_SIZE];
    let n = seed.len().min(RAND_SIZE);
    words[..n].copy_from_slice(&seed[..n]);
    words
}

fn mix(s: &mut [u64; 8]) {
    s[0] ^= s[1] << 11;
    s[3] = s[3].wrapping_add(s[0]);
    s[1] = s[1].wrapping_add(s[2]);
    s[1] ^= s[2] >> 2;
    s[4] = s[4].wrapping_add(s[1]);
    s[2] = s[2].wrapping_add(s[3]);
    s[2] ^= s[3] << 8;
    s[5] = s[5].wrapping_add(s[2]);
    s[3] = s[3].wrapping_add(s[4]);
    s[3] ^= s[4] >> 16;
    s[6] = s[6].wrapping_add(s[3]);
    s[4] = s[4].wrapping_add(s[5]);
    s[4] ^= s[5] << 10;
    s[7] = s[7].wrapping_add(s[4]);
    s[5] = s[5].wrapping_add(s[6]);
    s[5] ^= s[6] >> 4;
    s[0] = s[0].wrapping_add(s[5]);
    s[6] = s[6].wrapping_add(s[7]);
    s[6] ^= s[7] << 8;
    s[1] = s[1].wrapping_add(s[6]);
    s[7] = s[7].wrapping_add(s[0]);
    s[7] ^= s[0] >> 9;
    s[2] = s[2].wrapping_add(s[7]);
    s[0] = s[0].wrapping_add(s[1]);
}

// Internal state stays out of logs.
impl core::fmt::Debug for Isaac64 {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("Isaac64")
            .field("count", &self.count)
            .finish_non_exhaustive()
    }
}

impl RngCore for Isaac64 {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        if self.count == RAND_SIZE {
            self.generate();
        }
        let value = self.result[self.count];
        self.count += 1;
        value
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        fill_bytes_via_next(self, dest);
    }
}

impl SeedableRng for Isaac64 {
    type Seed = IsaacSeed;

    fn from_seed(seed: IsaacSeed) -> Isaac64 {
        let mut words = [0u64; RAND_SIZE];
        read_u64_into(&seed.0, &mut words);
        Isaac64::new(&words)
    }

    /// Seed an `Isaac64` from a `u64` using 256 words of `SplitMix64` output.
    fn seed_from_u64(seed: u64) -> Isaac64 {
        expand_seed(seed)
    }
}

impl Prng for Isaac64 {
    const SEED_WORDS: usize = RAND_SIZE;

    fn from_seed_words(words: &[u64]) -> Isaac64 {
        Isaac64::new(words)
    }
}

impl CryptoRng for Isaac64 {}

impl Csprng for Isaac64 {}

#[cfg(test)]
mod tests {
    use super::*;

    fn take(rng: &mut Isaac64, n: usize) -> Vec<u64> {
        (0..n).map(|_| rng.next_u64()).collect()
    }

    #[test]
    fn zero_seed() {
        let mut rng = Isaac64::new(&[]);
        let out = take(&mut rng, 2 * RAND_SIZE);
        assert_eq!(
            out[..4],
            [
                6801769443594191565,
                8035843825213082587,
                9458009917602874542,
                5472444135490143758,
            ]
        );
        assert_eq!(out[255], 3391747272293483626);
        assert_eq!(
            out[256..259],
            [
                320092288855430299,
                17763798822585107549,
                1281381649101458898,
            ]
        );
        assert_eq!(out[511], 15206197730614113627);
    }

    #[test]
    fn short_seed_is_zero_padded() {
        let short: Vec<u64> = (1..=8).collect();
        let mut padded = short.clone();
        padded.resize(RAND_SIZE, 0);

        let mut a = Isaac64::new(&short);
        let mut b = Isaac64::new(&padded);
        assert_eq!(take(&mut a, 300), take(&mut b, 300));
        assert_eq!(
            Isaac64::new(&short).next_u64(),
            9993858882239119333
        );
    }

    #[test]
    fn long_seed_is_truncated() {
        let long: Vec<u64> = (0..300).map(|i| i * 0x0101_0101).collect();
        let mut a = Isaac64::new(&long);
        let mut b = Isaac64::new(&long[..RAND_SIZE]);
        assert_eq!(take(&mut a, 300), take(&mut b, 300));
    }

    #[test]
    fn batch_boundary_generates_once() {
        let mut rng = Isaac64::new(&[3, 1, 4, 1, 5]);
        assert_eq!(rng.cc, 0);
        take(&mut rng, RAND_SIZE);
        assert_eq!(rng.cc, 1);
        assert_eq!(rng.count, RAND_SIZE);

        let mut fresh = rng.clone();
        fresh.generate();

        let next = rng.next_u64();
        assert_eq!(rng.cc, 2);
        assert_eq!(rng.count, 1);
        assert_eq!(next, fresh.result[0]);
        assert_eq!(rng.result, fresh.result);
    }

    #[test]
    fn seed_from_u64_expands_through_splitmix() {
        let mut rng = Isaac64::seed_from_u64(42);
        assert_eq!(
            take(&mut rng, 4),
            [
                8497873148450333640,
                3436708656857807677,
                17573726688137387779,
                701602095851201115,
            ]
        );
    }

    #[test]
    fn byte_seed_is_little_endian_words() {
        let words: Vec<u64> = (0..RAND_SIZE as u64).map(|i| i.wrapping_mul(GOLDEN_RATIO)).collect();
        let mut seed = IsaacSeed::default();
        for (chunk, w) in seed.as_mut().chunks_mut(8).zip(&words) {
            chunk.copy_from_slice(&w.to_le_bytes());
        }
        let mut a = Isaac64::from_seed(seed);
        let mut b = Isaac64::new(&words);
        assert_eq!(take(&mut a, 10), take(&mut b, 10));
    }

    #[test]
    fn debug_hides_state() {
        let rng = Isaac64::new(&[0xfeed]);
        assert_eq!(format!("{rng:?}"), "Isaac64 { count: 256, .. }");
    }
}
