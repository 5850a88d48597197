//! Effect-size estimation: mean difference and standardized Cohen's d.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::statistics::{check_len, mean, sample_variance};

/// Effect size of a treatment arm relative to a control arm.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EffectSize {
    /// Raw mean difference, `mean(treatment) - mean(control)`.
    pub mean_difference: f64,
    /// Standardized effect size, mean difference over the pooled
    /// standard deviation.
    pub cohens_d: f64,
}

/// Compute the mean difference and Cohen's d for two samples.
///
/// The pooled standard deviation here is `sqrt((var_a + var_b) / 2)`, an
/// unweighted average of the two unbiased variances. This diverges from the
/// textbook sample-size-weighted pooled variance; it is kept deliberately
/// for compatibility with the existing dataset fixtures, which were
/// produced with this exact formula. For equal arm sizes the two
/// definitions agree, so in practice the divergence only shows up with
/// unbalanced arms.
///
/// A pooled standard deviation of exactly 0 (both arms constant) yields
/// `cohens_d = 0`; it is a defined edge case, not an error.
///
/// # Errors
///
/// [`crate::Error::InsufficientData`] if either sample has fewer than 2
/// observations.
pub fn effect_size(control: &[f64], treatment: &[f64]) -> Result<EffectSize> {
    check_len("control", control)?;
    check_len("treatment", treatment)?;

    let mean_a = mean(control);
    let mean_b = mean(treatment);
    let var_a = sample_variance(control, mean_a);
    let var_b = sample_variance(treatment, mean_b);

    let mean_difference = mean_b - mean_a;
    let pooled_std = ((var_a + var_b) / 2.0).sqrt();
    let cohens_d = if pooled_std > 0.0 {
        mean_difference / pooled_std
    } else {
        0.0
    };

    Ok(EffectSize {
        mean_difference,
        cohens_d,
    })
}
