//! Covariance and Pearson correlation for paired drift/error series.
//!
//! Used to confirm that a drift metric actually tracks the error metric it
//! is supposed to guard (a strongly positive r means drift degrades
//! performance) and by the CUPED adjustment in `analysis::cuped`.

use crate::error::{Error, Result};
use crate::statistics::{check_len, mean};

fn check_paired(x: &[f64], y: &[f64]) -> Result<()> {
    if x.len() != y.len() {
        return Err(Error::InvalidConfiguration(format!(
            "paired series must have equal lengths, got {} and {}",
            x.len(),
            y.len()
        )));
    }
    check_len("x", x)?;
    check_len("y", y)
}

/// Population covariance (divisor n) of two paired series.
///
/// # Errors
///
/// [`Error::InvalidConfiguration`] on length mismatch,
/// [`Error::InsufficientData`] when fewer than 2 pairs are supplied.
pub fn covariance(x: &[f64], y: &[f64]) -> Result<f64> {
    check_paired(x, y)?;

    let mean_x = mean(x);
    let mean_y = mean(y);
    let sum: f64 = x
        .iter()
        .zip(y)
        .map(|(a, b)| (a - mean_x) * (b - mean_y))
        .sum();
    Ok(sum / x.len() as f64)
}

/// Pearson correlation coefficient of two paired series.
///
/// Returns 0 when either series has zero variance (a constant metric
/// carries no correlation signal).
///
/// # Errors
///
/// Same preconditions as [`covariance`].
pub fn pearson(x: &[f64], y: &[f64]) -> Result<f64> {
    check_paired(x, y)?;

    let mean_x = mean(x);
    let mean_y = mean(y);

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (a, b) in x.iter().zip(y) {
        let dx = a - mean_x;
        let dy = b - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    let denom = (var_x * var_y).sqrt();
    if denom > 0.0 {
        Ok(cov / denom)
    } else {
        Ok(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfect_linear_relation_gives_unit_r() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y: Vec<f64> = x.iter().map(|v| 4.0 * v + 1.8).collect();
        let r = pearson(&x, &y).unwrap();
        assert!((r - 1.0).abs() < 1e-12);

        let neg: Vec<f64> = x.iter().map(|v| -2.0 * v).collect();
        let r = pearson(&x, &neg).unwrap();
        assert!((r + 1.0).abs() < 1e-12);
    }

    #[test]
    fn self_correlation_is_one() {
        let x = [0.3, 1.7, 0.9, 2.4, 1.1];
        assert!((pearson(&x, &x).unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn constant_series_has_zero_r() {
        let x = [1.0, 2.0, 3.0];
        let flat = [5.0, 5.0, 5.0];
        assert_eq!(pearson(&x, &flat).unwrap(), 0.0);
    }

    #[test]
    fn covariance_matches_hand_computation() {
        let x = [1.0, 2.0, 3.0];
        let y = [2.0, 4.0, 6.0];
        // means 2 and 4; sum of products = 1*2 + 0*0 + 1*2 = 4; / 3
        assert!((covariance(&x, &y).unwrap() - 4.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn rejects_mismatched_lengths() {
        let err = pearson(&[1.0, 2.0], &[1.0, 2.0, 3.0]).unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(_)));
    }
}
