use thiserror::Error;

/// Errors surfaced at the edges of the crate.
///
/// Generation itself is total, so nothing in here can come out of [`rand_core::RngCore::next_u64`].
/// Errors only happen while pulling seed material from a fallible entropy source or while reading a
/// [`crate::GeneratorConfig`].
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    /// The entropy source failed before a full seed could be drawn. No generator was built.
    #[error("entropy source failed after {drawn} of {required} seed words: {reason}")]
    Entropy {
        /// Words successfully drawn before the failure.
        drawn: usize,
        /// Words the generator needed.
        required: usize,
        /// The source's own description of the failure.
        reason: String,
    },
    /// A generator name did not match any known generator.
    #[error("unknown generator `{0}`")]
    UnknownGenerator(String),
    /// A generator configuration document could not be parsed.
    #[error("invalid generator config: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type used throughout randkit.
pub type Result<T, E = Error> = core::result::Result<T, E>;
