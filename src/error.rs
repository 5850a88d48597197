//! Error taxonomy for the statistics engine.
//!
//! Every variant is an input-validation failure surfaced to the caller
//! immediately: nothing is retried, nothing is silently recovered, and no
//! partial results are returned. Degenerate-but-valid numeric cases (a zero
//! pooled standard error or standard deviation) are not errors; those
//! produce a statistic of 0 instead.

use thiserror::Error;

/// Convenience alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Input-validation failures.
#[derive(Debug, Error)]
pub enum Error {
    /// A sample is too small to compute an unbiased variance.
    #[error("sample `{arm}` has {len} observations; at least 2 are required")]
    InsufficientData {
        /// Which input sample was too small (e.g. "control", "treatment").
        arm: &'static str,
        /// Number of observations actually provided.
        len: usize,
    },

    /// Allocation fractions for the SRM check are malformed.
    #[error("invalid allocation: {0}")]
    InvalidAllocation(String),

    /// Non-positive steps or sample sizes, or a malformed threshold config.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}
