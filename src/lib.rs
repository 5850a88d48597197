//! # expstats
//!
//! Experiment statistics and drift monitoring for simulated A/B datasets.
//!
//! This crate provides the statistical core behind synthetic experiment
//! and monitoring fixtures:
//! - Welch-style two-sample tests with normal-approximation p-values
//! - Mean-difference and Cohen's d effect sizes
//! - Sequential monitoring of cumulative evidence across checkpoints
//! - Power curves over a geometric sample-size sweep
//! - Sample-ratio-mismatch (SRM) chi-square checks
//! - Guardrail state classification of drift/error metric series
//! - CUPED variance reduction
//!
//! The crate is purely computational: it accepts already-realized numeric
//! sequences and returns results with no side effects. Data generation,
//! seeding, and file I/O belong to its callers, which keeps every
//! component deterministic and independently testable. The one source of
//! randomness in the domain — the warn/rollback tie-break on a guardrail
//! breach — is injected through the [`BreachPolicy`] trait rather than
//! drawn internally.
//!
//! ## Approximation contract
//!
//! P-values use a closed-form normal CDF, not a Student-t distribution
//! with exact degrees of freedom, and Cohen's d uses an unweighted average
//! of the two arm variances rather than the textbook size-weighted pooled
//! variance. Both are deliberate: the consuming fixtures were produced
//! with these formulas and bit-for-bit compatibility matters more here
//! than agreement with a reference statistics library.
//!
//! ## Quick start
//!
//! ```ignore
//! use expstats::{sequential_monitor, power_curve, default_sweep};
//!
//! let trajectory = sequential_monitor(&control, &treatment, 20)?;
//! let curve = power_curve(0.195, 0.05, &default_sweep())?;
//!
//! for record in &trajectory {
//!     println!("n={} p={:.4}", record.checkpoint_size, record.p_value);
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod config;
mod constants;
mod error;
mod result;

// Functional modules
pub mod analysis;
pub mod output;
pub mod statistics;

// Re-exports for public API
pub use analysis::{
    classify_guardrail_series, cuped_adjust, default_sweep, power_curve, sequential_monitor,
    srm_check, BreachAction, BreachPolicy, CupedAdjustment, DriftSignal, GroupCount,
    RandomPolicy, SequentialMonitor,
};
pub use config::GuardrailConfig;
pub use constants::{CHI2_CRIT_DF1_05, DEFAULT_ALPHA, DEFAULT_SEED, Z_CRIT_TWO_SIDED_05};
pub use error::{Error, Result};
pub use result::{
    DriftPoint, GuardrailStatus, PowerPoint, SequentialRecord, SrmGroup, SrmResult, TestResult,
};
pub use statistics::{
    covariance, effect_size, normal_cdf, pearson, probit, two_sample_test, EffectSize,
};
