//! Statistical power as a function of per-group sample size.
//!
//! Uses the standard non-centrality approximation for a two-sample test:
//! `power = Φ(d * sqrt(n/2) - z_crit)`, clamped into [0, 1]. The sweep
//! points are mutually independent, so they are evaluated in parallel;
//! collection preserves input order.

use rayon::prelude::*;

use crate::constants::{DEFAULT_ALPHA, Z_CRIT_TWO_SIDED_05};
use crate::error::{Error, Result};
use crate::result::PowerPoint;
use crate::statistics::{normal_cdf, probit};

/// Number of points in the default geometric sweep.
const DEFAULT_SWEEP_POINTS: usize = 40;

/// Default geometric sweep of per-group sample sizes.
///
/// 40 points spaced geometrically from 10 to ~3162 (10^1 to 10^3.5),
/// truncated to integers — the range the canonical power-curve fixture
/// covers. Repeated values at the low end are kept as-is; power is
/// constant across duplicates so the curve stays monotone.
pub fn default_sweep() -> Vec<usize> {
    (0..DEFAULT_SWEEP_POINTS)
        .map(|i| {
            let exponent = 1.0 + 2.5 * i as f64 / (DEFAULT_SWEEP_POINTS - 1) as f64;
            10f64.powf(exponent) as usize
        })
        .collect()
}

/// Critical z-value for a two-sided test at the given alpha.
///
/// Exactly 0.05 maps to the fixed constant 1.96 for bit-for-bit
/// compatibility with the canonical fixtures; any other alpha inverts the
/// normal CDF. The two paths differ by less than the probit
/// approximation's error (~4.5e-4) at alpha = 0.05.
fn critical_z(alpha: f64) -> f64 {
    if (alpha - DEFAULT_ALPHA).abs() < 1e-12 {
        Z_CRIT_TWO_SIDED_05
    } else {
        probit(1.0 - alpha / 2.0)
    }
}

/// Estimate power at a single per-group sample size.
fn power_at(effect_size: f64, alpha: f64, n_per_group: usize) -> PowerPoint {
    let noncentrality = effect_size * (n_per_group as f64 / 2.0).sqrt();
    let power = normal_cdf(noncentrality - critical_z(alpha)).clamp(0.0, 1.0);

    PowerPoint {
        sample_size_per_group: n_per_group,
        total_sample_size: 2 * n_per_group,
        power,
        alpha,
        effect_size,
    }
}

/// Estimate a power curve across a sweep of per-group sample sizes.
///
/// For a fixed `effect_size > 0` the resulting powers are monotone
/// non-decreasing in the sample size. Output order matches input order
/// regardless of the parallel evaluation.
///
/// # Errors
///
/// [`Error::InvalidConfiguration`] if `alpha` is outside (0, 1), if
/// `effect_size` is non-finite, or if the sweep is empty or contains a
/// zero sample size.
pub fn power_curve(
    effect_size: f64,
    alpha: f64,
    sample_sizes: &[usize],
) -> Result<Vec<PowerPoint>> {
    if !(0.0..1.0).contains(&alpha) || alpha == 0.0 {
        return Err(Error::InvalidConfiguration(format!(
            "alpha must be in (0, 1), got {alpha}"
        )));
    }
    if !effect_size.is_finite() {
        return Err(Error::InvalidConfiguration(format!(
            "effect size must be finite, got {effect_size}"
        )));
    }
    if sample_sizes.is_empty() {
        return Err(Error::InvalidConfiguration(
            "sample size sweep is empty".to_string(),
        ));
    }
    if sample_sizes.contains(&0) {
        return Err(Error::InvalidConfiguration(
            "sample sizes must be positive".to_string(),
        ));
    }

    Ok(sample_sizes
        .par_iter()
        .map(|&n| power_at(effect_size, alpha, n))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sweep_covers_the_canonical_range() {
        let sweep = default_sweep();
        assert_eq!(sweep.len(), 40);
        assert_eq!(sweep[0], 10);
        let last = *sweep.last().unwrap();
        assert!((3000..=3200).contains(&last), "last point was {last}");
        assert!(sweep.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn power_is_monotone_in_sample_size() {
        let curve = power_curve(0.195, 0.05, &default_sweep()).unwrap();
        for pair in curve.windows(2) {
            assert!(
                pair[1].power >= pair[0].power,
                "power decreased between n={} and n={}",
                pair[0].sample_size_per_group,
                pair[1].sample_size_per_group
            );
        }
    }

    #[test]
    fn canonical_endpoints() {
        // d = 0.195 (a 5% lift on $12.50 revenue with sigma $3.20).
        let curve = power_curve(0.195, 0.05, &[10, 3000]).unwrap();
        assert!(curve[0].power < 0.3, "n=10 power was {}", curve[0].power);
        assert!(curve[1].power > 0.99, "n=3000 power was {}", curve[1].power);
    }

    #[test]
    fn point_matches_closed_form() {
        // n=200, d=0.195: lambda = 0.195 * 10 = 1.95, power = Φ(1.95 - 1.96).
        let curve = power_curve(0.195, 0.05, &[200]).unwrap();
        let expected = normal_cdf(0.195 * 10.0 - 1.96);
        assert!((curve[0].power - expected).abs() < 1e-12);
        assert_eq!(curve[0].total_sample_size, 400);
    }

    #[test]
    fn zero_effect_yields_alpha_sized_power() {
        // With d=0, power collapses to Φ(-z) = alpha/2.
        let curve = power_curve(0.0, 0.05, &[100, 1000]).unwrap();
        for point in curve {
            assert!((point.power - 0.025).abs() < 1e-3);
        }
    }

    #[test]
    fn general_alpha_uses_the_inverted_cdf() {
        let strict = power_curve(0.3, 0.01, &[100]).unwrap()[0].power;
        let lax = power_curve(0.3, 0.05, &[100]).unwrap()[0].power;
        assert!(strict < lax, "stricter alpha must lower power");
    }

    #[test]
    fn output_order_matches_input_order() {
        let sizes = [500, 10, 3000, 50];
        let curve = power_curve(0.2, 0.05, &sizes).unwrap();
        let got: Vec<usize> = curve.iter().map(|p| p.sample_size_per_group).collect();
        assert_eq!(got, sizes);
    }

    #[test]
    fn rejects_bad_inputs() {
        assert!(power_curve(0.2, 0.0, &[10]).is_err());
        assert!(power_curve(0.2, 1.0, &[10]).is_err());
        assert!(power_curve(f64::NAN, 0.05, &[10]).is_err());
        assert!(power_curve(0.2, 0.05, &[]).is_err());
        assert!(power_curve(0.2, 0.05, &[10, 0]).is_err());
    }
}
