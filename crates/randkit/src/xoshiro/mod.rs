//! Small-state generators from the xoshiro family.
//!
//! - [`Xoshiro256StarStar`]: Recommended for all non-cryptographic purposes.
//!   Excellent speed and a state space (256 bits) large enough for any
//!   parallel application.
//! - [`SplitMix64`]: Recommended for initializing other generators from a
//!   64-bit seed. Used for implementing `seed_from_u64` throughout the crate.
//!
//! See the [xoshiro paper] for a detailed discussion of both.
//!
//! [xoshiro paper]: http://vigna.di.unimi.it/ftp/papers/ScrambledLinear.pdf

#[macro_use]
mod common;
mod splitmix64;
mod xoshiro256starstar;

pub use common::rotl;
pub use splitmix64::SplitMix64;
pub use xoshiro256starstar::Xoshiro256StarStar;
