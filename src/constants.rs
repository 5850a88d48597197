//! Statistical constants and configuration defaults.

/// Critical z-value for a two-sided test at alpha = 0.05.
///
/// The canonical power-curve fixtures hardcode this value instead of
/// recomputing the inverse CDF; `analysis::power` uses it whenever
/// alpha is exactly 0.05 and falls back to `statistics::probit` otherwise.
pub const Z_CRIT_TWO_SIDED_05: f64 = 1.96;

/// Chi-square critical value for 1 degree of freedom at alpha = 0.05.
pub const CHI2_CRIT_DF1_05: f64 = 3.841;

/// Default two-sided significance level.
pub const DEFAULT_ALPHA: f64 = 0.05;

/// Default number of checkpoints for the sequential monitor.
pub const DEFAULT_STEPS: usize = 20;

/// Default breach threshold for the PSI-like drift metric.
pub const DEFAULT_DRIFT_THRESHOLD: f64 = 0.25;

/// Default breach threshold for the RMSE-like error metric.
pub const DEFAULT_ERROR_THRESHOLD: f64 = 2.7;

/// Default drift level below which a breached stream may recover.
pub const DEFAULT_RECOVERY_THRESHOLD: f64 = 0.15;

/// Default number of warm-up steps before recovery is evaluated.
pub const DEFAULT_WARMUP_STEPS: usize = 15;

/// Default rollback probability for the random breach policy.
pub const DEFAULT_ROLLBACK_PROBABILITY: f64 = 0.4;

/// Default deterministic seed for the random breach policy.
///
/// Same seed + same series = same status labels. The value `0x6472696674`
/// is "drift" encoded in ASCII.
pub const DEFAULT_SEED: u64 = 0x6472696674;
