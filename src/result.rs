//! Result types produced by the analysis components.
//!
//! Every type here is produced fresh per invocation and shares no mutable
//! state with its producer; all of them serialize to JSON via serde for
//! the tabular collaborators downstream.

use serde::{Deserialize, Serialize};

/// Outcome of a two-sample test, including effect-size estimates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TestResult {
    /// Welch-style t-statistic (0 when the pooled standard error is 0).
    pub t_statistic: f64,

    /// Two-sided p-value in [0, 1] from the normal approximation
    /// `2 * (1 - Φ(|t|))`.
    pub p_value: f64,

    /// Raw mean difference, treatment minus control.
    pub mean_difference: f64,

    /// Cohen's d (0 when the pooled standard deviation is 0).
    pub effect_size: f64,
}

/// One checkpoint of a sequentially monitored experiment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SequentialRecord {
    /// Number of observations per arm at this checkpoint. Strictly
    /// increasing across a trajectory; the final checkpoint equals the
    /// shared full sample size.
    pub checkpoint_size: usize,

    /// Test result over the first `checkpoint_size` observations of both
    /// arms.
    #[serde(flatten)]
    pub result: TestResult,
}

/// One point of an estimated power curve.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PowerPoint {
    /// Per-group sample size n.
    pub sample_size_per_group: usize,

    /// Total sample size across both groups (2n).
    pub total_sample_size: usize,

    /// Estimated power in [0, 1]. Monotone non-decreasing in n for a
    /// fixed positive effect size.
    pub power: f64,

    /// Two-sided significance level the curve was computed for.
    pub alpha: f64,

    /// Target standardized effect size (Cohen's d scale).
    pub effect_size: f64,
}

/// Per-group row of a sample-ratio-mismatch check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SrmGroup {
    /// Group label (e.g. "control", "treatment").
    pub group: String,

    /// Observed assignment count.
    pub observed_count: u64,

    /// Expected count under the declared allocation,
    /// `fraction * total observed`.
    pub expected_count: f64,

    /// Observed share of the total.
    pub ratio: f64,
}

/// Outcome of a sample-ratio-mismatch check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SrmResult {
    /// Per-group observed/expected rows, in input order.
    pub groups: Vec<SrmGroup>,

    /// Chi-square goodness-of-fit statistic.
    pub chi2: f64,

    /// Critical value the statistic is compared against
    /// (df=1, alpha=0.05).
    pub critical_value: f64,

    /// True iff `chi2 < critical_value` (allocation looks healthy).
    pub passed: bool,
}

/// Guardrail status label for one monitored time step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GuardrailStatus {
    /// Metrics within thresholds.
    Ok,
    /// Breach observed; policy chose to keep serving under observation.
    Warn,
    /// Breach observed; policy chose to roll back.
    Rollback,
    /// Drift fell back below the recovery threshold after a breach.
    Recovered,
}

/// One classified point of a drift-monitoring series.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DriftPoint {
    /// Position in the time-ordered series (0-based).
    pub time_index: usize,

    /// PSI-like drift score at this step.
    pub drift_metric: f64,

    /// Error metric (e.g. RMSE) at this step.
    pub error_metric: f64,

    /// Classified guardrail status.
    pub status: GuardrailStatus,
}
