//! CUPED variance reduction using a pre-experiment covariate.
//!
//! Controlled-experiment Using Pre-Existing Data: regress the experiment
//! metric on a pre-period covariate and subtract the explained part. The
//! adjusted metric has the same mean but variance reduced by roughly the
//! squared pre/post correlation, which tightens every downstream test
//! without biasing the lift estimate.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::statistics::{check_len, mean, pearson};

/// Result of a CUPED adjustment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CupedAdjustment {
    /// Regression coefficient `cov(pre, post) / var(pre)`
    /// (population moments). 0 when the covariate is constant.
    pub theta: f64,

    /// Adjusted metric, `post[i] - theta * (pre[i] - mean(pre))`.
    /// Same mean as the raw metric.
    pub adjusted: Vec<f64>,

    /// Approximate variance reduction, the squared pre/post correlation,
    /// in [0, 1].
    pub variance_reduction: f64,
}

/// Adjust an experiment metric with a pre-period covariate.
///
/// # Errors
///
/// [`Error::InvalidConfiguration`] on length mismatch,
/// [`Error::InsufficientData`] when fewer than 2 pairs are supplied.
pub fn cuped_adjust(pre: &[f64], post: &[f64]) -> Result<CupedAdjustment> {
    if pre.len() != post.len() {
        return Err(Error::InvalidConfiguration(format!(
            "pre and post metrics must have equal lengths, got {} and {}",
            pre.len(),
            post.len()
        )));
    }
    check_len("pre", pre)?;
    check_len("post", post)?;

    let mean_pre = mean(pre);
    let mean_post = mean(post);

    let mut cov = 0.0;
    let mut var_pre = 0.0;
    for (x, y) in pre.iter().zip(post) {
        cov += (x - mean_pre) * (y - mean_post);
        var_pre += (x - mean_pre).powi(2);
    }
    cov /= pre.len() as f64;
    var_pre /= pre.len() as f64;

    let theta = if var_pre > 0.0 { cov / var_pre } else { 0.0 };

    let adjusted: Vec<f64> = pre
        .iter()
        .zip(post)
        .map(|(x, y)| y - theta * (x - mean_pre))
        .collect();

    let rho = pearson(pre, post)?;
    let variance_reduction = (rho * rho).clamp(0.0, 1.0);

    Ok(CupedAdjustment {
        theta,
        adjusted,
        variance_reduction,
    })
}
