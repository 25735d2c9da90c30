//! Choosing and seeding a generator at runtime.
//!
//! A [`GeneratorConfig`] names one of the generators in this crate and, optionally, how to seed
//! it. It is plain serde data, so it can live in whatever configuration file an application
//! already has:
//!
//! ```
//! use randkit::{GeneratorConfig, GeneratorKind};
//! use randkit::rand_core::RngCore;
//!
//! let config = GeneratorConfig::from_json(r#"{ "kind": "mt19937_64", "seed": 5489 }"#).unwrap();
//! assert_eq!(config.kind, GeneratorKind::MersenneTwister64);
//!
//! let mut rng = config.build().unwrap();
//! assert_eq!(rng.next_u64(), 5272467170085876338);
//! ```
//!
//! Without a seed, [`GeneratorConfig::build`] draws one from the operating system.

use crate::{Error, Isaac64, MersenneTwister64, Prng, Result, SplitMix64, Xoshiro256StarStar};
use rand_core::{OsRng, RngCore, SeedableRng, TryRngCore};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// The generators that can be built from a [`GeneratorConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeneratorKind {
    /// [`SplitMix64`].
    #[serde(rename = "splitmix64", alias = "split_mix64")]
    SplitMix64,
    /// [`Xoshiro256StarStar`].
    #[serde(rename = "xoshiro256starstar", alias = "xoshiro256**")]
    Xoshiro256StarStar,
    /// [`MersenneTwister64`].
    #[serde(rename = "mt19937_64", alias = "mt19937-64")]
    MersenneTwister64,
    /// [`Isaac64`].
    #[serde(rename = "isaac64", alias = "isaac-64")]
    Isaac64,
}

impl GeneratorKind {
    /// Every kind, in declaration order.
    pub const ALL: [GeneratorKind; 4] = [
        GeneratorKind::SplitMix64,
        GeneratorKind::Xoshiro256StarStar,
        GeneratorKind::MersenneTwister64,
        GeneratorKind::Isaac64,
    ];

    /// The canonical name, as used in configuration documents.
    pub const fn name(self) -> &'static str {
        match self {
            GeneratorKind::SplitMix64 => "splitmix64",
            GeneratorKind::Xoshiro256StarStar => "xoshiro256starstar",
            GeneratorKind::MersenneTwister64 => "mt19937_64",
            GeneratorKind::Isaac64 => "isaac64",
        }
    }

    /// Whether the generator is a [`crate::Csprng`].
    pub const fn is_cryptographic(self) -> bool {
        matches!(self, GeneratorKind::Isaac64)
    }

    /// Words drawn from the entropy source when the generator is built without a seed.
    pub const fn seed_words(self) -> usize {
        match self {
            GeneratorKind::SplitMix64 => SplitMix64::SEED_WORDS,
            GeneratorKind::Xoshiro256StarStar => Xoshiro256StarStar::SEED_WORDS,
            GeneratorKind::MersenneTwister64 => MersenneTwister64::SEED_WORDS,
            GeneratorKind::Isaac64 => Isaac64::SEED_WORDS,
        }
    }
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GeneratorKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "splitmix64" | "split_mix64" => Ok(GeneratorKind::SplitMix64),
            "xoshiro256starstar" | "xoshiro256**" => Ok(GeneratorKind::Xoshiro256StarStar),
            "mt19937_64" | "mt19937-64" => Ok(GeneratorKind::MersenneTwister64),
            "isaac64" | "isaac-64" => Ok(GeneratorKind::Isaac64),
            _ => Err(Error::UnknownGenerator(s.to_owned())),
        }
    }
}

/// How a configured generator is seeded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeedConfig {
    /// A single `u64`, expanded through [`SplitMix64`] for generators that need more.
    Scalar(u64),
    /// Explicit seed words, zero-padded or truncated to the generator's seed size.
    Words(Vec<u64>),
}

impl From<u64> for SeedConfig {
    fn from(seed: u64) -> Self {
        SeedConfig::Scalar(seed)
    }
}

impl From<Vec<u64>> for SeedConfig {
    fn from(words: Vec<u64>) -> Self {
        SeedConfig::Words(words)
    }
}

/// A generator choice plus an optional seed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Which generator to build.
    pub kind: GeneratorKind,
    /// The seed; `None` means system entropy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<SeedConfig>,
}

impl GeneratorConfig {
    /// A config for `kind` seeded from system entropy.
    pub fn new(kind: GeneratorKind) -> Self {
        GeneratorConfig { kind, seed: None }
    }

    /// Sets the seed.
    pub fn with_seed(mut self, seed: impl Into<SeedConfig>) -> Self {
        self.seed = Some(seed.into());
        self
    }

    /// Parses a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the configuration as JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Builds the generator, using the operating system's entropy source when no seed is set.
    pub fn build(&self) -> Result<AnyRng> {
        self.build_with_entropy(&mut OsRng)
    }

    /// Builds the generator, using `source` when no seed is set. `source` is not touched
    /// otherwise.
    pub fn build_with_entropy<E: TryRngCore>(&self, source: &mut E) -> Result<AnyRng> {
        let rng = match &self.seed {
            Some(SeedConfig::Scalar(seed)) => AnyRng::seed_from_u64(self.kind, *seed),
            Some(SeedConfig::Words(words)) => AnyRng::from_seed_words(self.kind, words),
            None => AnyRng::try_from_entropy(self.kind, source)?,
        };
        debug!(kind = %self.kind, explicit_seed = self.seed.is_some(), "built generator");
        Ok(rng)
    }
}

/// Any generator in this crate, chosen at runtime.
///
/// The large-state generators are boxed to keep the enum small.
#[derive(Debug, Clone)]
pub enum AnyRng {
    /// A [`SplitMix64`].
    SplitMix64(SplitMix64),
    /// A [`Xoshiro256StarStar`].
    Xoshiro256StarStar(Xoshiro256StarStar),
    /// A [`MersenneTwister64`].
    MersenneTwister64(Box<MersenneTwister64>),
    /// An [`Isaac64`].
    Isaac64(Box<Isaac64>),
}

macro_rules! dispatch {
    ($self:expr, $rng:ident => $body:expr) => {
        match $self {
            AnyRng::SplitMix64($rng) => $body,
            AnyRng::Xoshiro256StarStar($rng) => $body,
            AnyRng::MersenneTwister64($rng) => $body,
            AnyRng::Isaac64($rng) => $body,
        }
    };
}

impl AnyRng {
    /// Which generator this is.
    pub fn kind(&self) -> GeneratorKind {
        match self {
            AnyRng::SplitMix64(_) => GeneratorKind::SplitMix64,
            AnyRng::Xoshiro256StarStar(_) => GeneratorKind::Xoshiro256StarStar,
            AnyRng::MersenneTwister64(_) => GeneratorKind::MersenneTwister64,
            AnyRng::Isaac64(_) => GeneratorKind::Isaac64,
        }
    }

    /// Seeds a generator of `kind` from a single `u64`, the way its `seed_from_u64` does.
    pub fn seed_from_u64(kind: GeneratorKind, seed: u64) -> AnyRng {
        match kind {
            GeneratorKind::SplitMix64 => AnyRng::SplitMix64(SplitMix64::seed_from_u64(seed)),
            GeneratorKind::Xoshiro256StarStar => {
                AnyRng::Xoshiro256StarStar(Xoshiro256StarStar::seed_from_u64(seed))
            }
            GeneratorKind::MersenneTwister64 => {
                AnyRng::MersenneTwister64(Box::new(MersenneTwister64::seed_from_u64(seed)))
            }
            GeneratorKind::Isaac64 => AnyRng::Isaac64(Box::new(Isaac64::seed_from_u64(seed))),
        }
    }

    /// Builds a generator of `kind` from explicit seed words.
    pub fn from_seed_words(kind: GeneratorKind, words: &[u64]) -> AnyRng {
        match kind {
            GeneratorKind::SplitMix64 => AnyRng::SplitMix64(SplitMix64::from_seed_words(words)),
            GeneratorKind::Xoshiro256StarStar => {
                AnyRng::Xoshiro256StarStar(Xoshiro256StarStar::from_seed_words(words))
            }
            GeneratorKind::MersenneTwister64 => {
                AnyRng::MersenneTwister64(Box::new(MersenneTwister64::from_seed_words(words)))
            }
            GeneratorKind::Isaac64 => AnyRng::Isaac64(Box::new(Isaac64::from_seed_words(words))),
        }
    }

    /// Builds a generator of `kind` from words drawn from `generator`.
    pub fn from_generator<G: RngCore + ?Sized>(kind: GeneratorKind, generator: &mut G) -> AnyRng {
        match kind {
            GeneratorKind::SplitMix64 => AnyRng::SplitMix64(SplitMix64::from_generator(generator)),
            GeneratorKind::Xoshiro256StarStar => {
                AnyRng::Xoshiro256StarStar(Xoshiro256StarStar::from_generator(generator))
            }
            GeneratorKind::MersenneTwister64 => {
                AnyRng::MersenneTwister64(Box::new(MersenneTwister64::from_generator(generator)))
            }
            GeneratorKind::Isaac64 => {
                AnyRng::Isaac64(Box::new(Isaac64::from_generator(generator)))
            }
        }
    }

    /// Builds a generator of `kind` from a fallible entropy source.
    pub fn try_from_entropy<E: TryRngCore>(kind: GeneratorKind, source: &mut E) -> Result<AnyRng> {
        Ok(match kind {
            GeneratorKind::SplitMix64 => AnyRng::SplitMix64(SplitMix64::try_from_entropy(source)?),
            GeneratorKind::Xoshiro256StarStar => {
                AnyRng::Xoshiro256StarStar(Xoshiro256StarStar::try_from_entropy(source)?)
            }
            GeneratorKind::MersenneTwister64 => AnyRng::MersenneTwister64(Box::new(
                MersenneTwister64::try_from_entropy(source)?,
            )),
            GeneratorKind::Isaac64 => {
                AnyRng::Isaac64(Box::new(Isaac64::try_from_entropy(source)?))
            }
        })
    }
}

impl RngCore for AnyRng {
    fn next_u32(&mut self) -> u32 {
        dispatch!(self, rng => rng.next_u32())
    }

    fn next_u64(&mut self) -> u64 {
        dispatch!(self, rng => rng.next_u64())
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dispatch!(self, rng => rng.fill_bytes(dest))
    }
}
