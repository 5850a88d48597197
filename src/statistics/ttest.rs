//! Welch-style two-sample test with a normal-approximation p-value.

use crate::error::{Error, Result};
use crate::result::TestResult;
use crate::statistics::effect::effect_size;
use crate::statistics::normal::normal_cdf;

/// Arithmetic mean of a slice.
pub(crate) fn mean(xs: &[f64]) -> f64 {
    xs.iter().sum::<f64>() / xs.len() as f64
}

/// Unbiased sample variance (divisor n - 1).
pub(crate) fn sample_variance(xs: &[f64], mean: f64) -> f64 {
    let sum_sq: f64 = xs.iter().map(|x| (x - mean).powi(2)).sum();
    sum_sq / (xs.len() - 1) as f64
}

/// Reject samples too small for an unbiased variance.
pub(crate) fn check_len(arm: &'static str, xs: &[f64]) -> Result<()> {
    if xs.len() < 2 {
        return Err(Error::InsufficientData { arm, len: xs.len() });
    }
    Ok(())
}

/// Run a Welch-style two-sample test of `treatment` against `control`.
///
/// Computes `t = (mean_b - mean_a) / se` with `se = sqrt(var_a/n_a +
/// var_b/n_b)` (unbiased variances), and a two-sided p-value from the
/// normal approximation `p = 2 * (1 - Φ(|t|))`. This is deliberately not a
/// Student-t p-value with exact degrees of freedom: for the sample sizes
/// this engine targets the normal tail is the specified contract.
///
/// The degenerate zero-variance case (`se == 0`) yields `t = 0` rather
/// than an error. The result also carries the mean difference and Cohen's
/// d from [`effect_size`].
///
/// # Errors
///
/// [`Error::InsufficientData`] if either sample has fewer than 2
/// observations.
pub fn two_sample_test(control: &[f64], treatment: &[f64]) -> Result<TestResult> {
    check_len("control", control)?;
    check_len("treatment", treatment)?;

    let mean_a = mean(control);
    let mean_b = mean(treatment);
    let var_a = sample_variance(control, mean_a);
    let var_b = sample_variance(treatment, mean_b);

    let se = (var_a / control.len() as f64 + var_b / treatment.len() as f64).sqrt();
    let t_statistic = if se > 0.0 { (mean_b - mean_a) / se } else { 0.0 };
    let p_value = 2.0 * (1.0 - normal_cdf(t_statistic.abs()));

    let effect = effect_size(control, treatment)?;

    Ok(TestResult {
        t_statistic,
        p_value,
        mean_difference: effect.mean_difference,
        effect_size: effect.cohens_d,
    })
}
