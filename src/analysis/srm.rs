//! Sample-ratio-mismatch check.
//!
//! A chi-square goodness-of-fit test of observed assignment counts against
//! the declared allocation fractions. A failing check means the experiment
//! infrastructure is not splitting traffic the way it claims to, which
//! invalidates downstream comparisons regardless of their p-values.

use crate::constants::CHI2_CRIT_DF1_05;
use crate::error::{Error, Result};
use crate::result::{SrmGroup, SrmResult};

/// Tolerance for the allocation fractions summing to 1.
const FRACTION_SUM_TOLERANCE: f64 = 1e-6;

/// Observed count and declared allocation fraction for one group.
#[derive(Debug, Clone)]
pub struct GroupCount {
    /// Group label (e.g. "control", "treatment").
    pub group: String,
    /// Observed assignment count.
    pub observed: u64,
    /// Declared allocation fraction; all fractions must sum to 1.
    pub expected_fraction: f64,
}

impl GroupCount {
    /// Convenience constructor.
    pub fn new(group: impl Into<String>, observed: u64, expected_fraction: f64) -> Self {
        Self {
            group: group.into(),
            observed,
            expected_fraction,
        }
    }
}

/// Run a chi-square sample-ratio-mismatch check.
///
/// Expected counts are `fraction * total observed`; the statistic is
/// `chi2 = Σ (observed - expected)² / expected`, compared against the
/// critical value 3.841 (df=1 at alpha=0.05, matching the canonical
/// two-group fixture). Passing means `chi2 < critical`.
///
/// # Errors
///
/// [`Error::InvalidAllocation`] if fewer than two groups are given, the
/// fractions do not sum to ~1, or any expected count is 0 (a fraction of 0
/// or an empty experiment would otherwise divide by zero).
pub fn srm_check(groups: &[GroupCount]) -> Result<SrmResult> {
    if groups.len() < 2 {
        return Err(Error::InvalidAllocation(format!(
            "need at least 2 groups, got {}",
            groups.len()
        )));
    }

    let fraction_sum: f64 = groups.iter().map(|g| g.expected_fraction).sum();
    if (fraction_sum - 1.0).abs() > FRACTION_SUM_TOLERANCE {
        return Err(Error::InvalidAllocation(format!(
            "expected fractions sum to {fraction_sum}, not 1"
        )));
    }

    let total: u64 = groups.iter().map(|g| g.observed).sum();

    let mut chi2 = 0.0;
    let mut rows = Vec::with_capacity(groups.len());
    for g in groups {
        let expected = g.expected_fraction * total as f64;
        if expected <= 0.0 {
            return Err(Error::InvalidAllocation(format!(
                "expected count for group `{}` is 0",
                g.group
            )));
        }

        let observed = g.observed as f64;
        chi2 += (observed - expected).powi(2) / expected;

        rows.push(SrmGroup {
            group: g.group.clone(),
            observed_count: g.observed,
            expected_count: expected,
            ratio: observed / total as f64,
        });
    }

    Ok(SrmResult {
        groups: rows,
        chi2,
        critical_value: CHI2_CRIT_DF1_05,
        passed: chi2 < CHI2_CRIT_DF1_05,
    })
}
