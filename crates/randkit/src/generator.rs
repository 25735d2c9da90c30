use crate::xoshiro::SplitMix64;
use crate::{Error, Result};
use rand_core::{CryptoRng, OsRng, RngCore, TryRngCore};
use tracing::{debug, trace};

/// The largest seed, in 64-bit words, that any generator in this crate draws.
pub const MAX_SEED_WORDS: usize = 256;

/// A seedable pseudorandom generator of 64-bit words.
///
/// Beyond [`RngCore`], a `Prng` can be built from an explicit word seed, or by drawing its seed
/// one word at a time from any other generator. The latter is how generators are chained, and how
/// they are seeded from the operating system.
pub trait Prng: RngCore + Sized {
    /// Number of 64-bit words in a full seed. This is exactly how many words
    /// [`Prng::from_generator`] draws from its source. Never larger than [`MAX_SEED_WORDS`].
    const SEED_WORDS: usize;

    /// Builds the generator from explicit seed words.
    ///
    /// Seeds shorter than [`Prng::SEED_WORDS`] are padded with zeros and longer seeds are
    /// truncated; a seed is never rejected.
    fn from_seed_words(words: &[u64]) -> Self;

    /// Builds the generator from words drawn from `generator`, calling
    /// [`RngCore::next_u64`] exactly [`Prng::SEED_WORDS`] times.
    fn from_generator<G: RngCore + ?Sized>(generator: &mut G) -> Self {
        let mut buf = [0u64; MAX_SEED_WORDS];
        let words = &mut buf[..Self::SEED_WORDS.min(MAX_SEED_WORDS)];
        for word in words.iter_mut() {
            *word = generator.next_u64();
        }
        trace!(
            words = words.len(),
            "seeding {} from another generator",
            core::any::type_name::<Self>()
        );
        Self::from_seed_words(words)
    }

    /// Like [`Prng::from_generator`], but over a fallible entropy source.
    ///
    /// The first failure aborts seeding and is reported as [`Error::Entropy`].
    fn try_from_entropy<E: TryRngCore>(source: &mut E) -> Result<Self> {
        let required = Self::SEED_WORDS.min(MAX_SEED_WORDS);
        let mut buf = [0u64; MAX_SEED_WORDS];
        for (drawn, word) in buf[..required].iter_mut().enumerate() {
            *word = source.try_next_u64().map_err(|err| Error::Entropy {
                drawn,
                required,
                reason: err.to_string(),
            })?;
        }
        debug!(
            words = required,
            "seeded {} from entropy source",
            core::any::type_name::<Self>()
        );
        Ok(Self::from_seed_words(&buf[..required]))
    }

    /// Seeds the generator from the operating system's entropy source.
    fn from_system_entropy() -> Result<Self> {
        Self::try_from_entropy(&mut OsRng)
    }
}

/// A [`Prng`] intended for security-sensitive use.
///
/// This is a tag: it adds no behavior, it only records the implementer's claim that the algorithm
/// resists prediction from previously observed output.
pub trait Csprng: Prng + CryptoRng {}

/// Expands a single `u64` into a full seed for `P` by drawing from a [`SplitMix64`] seeded with
/// `seed`.
///
/// ```
/// use randkit::{expand_seed, Xoshiro256StarStar};
/// use randkit::rand_core::SeedableRng;
///
/// let a: Xoshiro256StarStar = expand_seed(42);
/// assert_eq!(a, Xoshiro256StarStar::seed_from_u64(42));
/// ```
pub fn expand_seed<P: Prng>(seed: u64) -> P {
    P::from_generator(&mut SplitMix64::new(seed))
}
