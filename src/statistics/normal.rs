//! Standard-normal CDF and its inverse.
//!
//! Both functions are closed-form rational approximations, not wrappers
//! around a reference distribution library. Approximate agreement is the
//! specified behavior: every downstream p-value and power estimate in this
//! crate is defined in terms of these formulas.

/// Standard-normal cumulative distribution function.
///
/// Computes `Φ(x) = 0.5 * (1 + erf(x / sqrt(2)))`. Total over all finite
/// reals; returns exactly 0.5 at `x = 0` and is non-decreasing. Because
/// `erf` is implemented with odd symmetry, `normal_cdf(x) + normal_cdf(-x)`
/// is exactly 1.
pub fn normal_cdf(x: f64) -> f64 {
    0.5 * (1.0 + erf(x / std::f64::consts::SQRT_2))
}

/// Error function via the Abramowitz & Stegun 7.1.26 rational
/// approximation, |error| < 1.5e-7.
fn erf(x: f64) -> f64 {
    const A1: f64 = 0.254829592;
    const A2: f64 = -0.284496736;
    const A3: f64 = 1.421413741;
    const A4: f64 = -1.453152027;
    const A5: f64 = 1.061405429;
    const P: f64 = 0.3275911;

    // The approximation is defined for x >= 0; use erf(-x) = -erf(x).
    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();

    let t = 1.0 / (1.0 + P * x);
    let poly = ((((A5 * t + A4) * t + A3) * t + A2) * t + A1) * t;

    sign * (1.0 - poly * (-x * x).exp())
}

/// Inverse normal CDF (probit function).
///
/// Computes `Φ⁻¹(p)` using the Abramowitz & Stegun 26.2.23 rational
/// approximation, accurate to ~4.5e-4 for p in (0, 1). Used by the power
/// curve for critical values at significance levels other than 0.05.
pub fn probit(p: f64) -> f64 {
    if p <= 0.0 {
        return f64::NEG_INFINITY;
    }
    if p >= 1.0 {
        return f64::INFINITY;
    }

    // Symmetry: for p < 0.5, compute -probit(1 - p).
    let (sign, q) = if p < 0.5 { (-1.0, 1.0 - p) } else { (1.0, p) };

    const C0: f64 = 2.515517;
    const C1: f64 = 0.802853;
    const C2: f64 = 0.010328;
    const D1: f64 = 1.432788;
    const D2: f64 = 0.189269;
    const D3: f64 = 0.001308;

    let t = (-2.0 * (1.0 - q).ln()).sqrt();
    let z = t - (C0 + C1 * t + C2 * t * t) / (1.0 + D1 * t + D2 * t * t + D3 * t * t * t);

    sign * z
}
