//! randkit is a small collection of deterministic 64-bit pseudorandom number generators.
//!
//! Every generator is a plain value-type state machine: it is built from a seed (or from another
//! generator), and then yields one `u64` per call to [`RngCore::next_u64`]. Generation never fails
//! and never allocates.
//!
//! The following generators are implemented:
//!
//! - [`SplitMix64`]: tiny and fast, also used to expand a single `u64` into larger seeds.
//! - [`Xoshiro256StarStar`]: fast, 256 bits of state, excellent statistical quality.
//! - [`MersenneTwister64`]: the 64-bit Mersenne Twister (MT19937-64).
//! - [`Isaac64`]: the ISAAC generator over 64-bit words, the only [`Csprng`] in this crate.
//!
//! All of them implement [`Prng`], which lets any generator seed any other:
//!
//! ```
//! use randkit::{Isaac64, Prng, SplitMix64};
//! use randkit::rand_core::{RngCore, SeedableRng};
//!
//! let mut expander = SplitMix64::seed_from_u64(7);
//! let mut isaac = Isaac64::from_generator(&mut expander);
//! let _ = isaac.next_u64();
//! ```
//!
//! Seeding from the operating system goes through [`Prng::from_system_entropy`], or
//! [`Prng::try_from_entropy`] when the entropy source should be injected.

#![deny(missing_docs)]
#![deny(missing_debug_implementations)]
#![allow(clippy::unreadable_literal)]

pub mod config;
pub mod isaac;
pub mod mersenne;
pub mod xoshiro;

mod error;
mod generator;

pub use config::{AnyRng, GeneratorConfig, GeneratorKind, SeedConfig};
pub use error::*;
pub use generator::*;
pub use isaac::Isaac64;
pub use mersenne::MersenneTwister64;
pub use rand_core;
pub use xoshiro::{SplitMix64, Xoshiro256StarStar};
