//! Guardrail state classification for drift-monitoring series.
//!
//! A stateful single-pass classifier over a time-ordered stream of
//! (drift, error) metric pairs. Per step it applies the threshold breach
//! rule, asks an injectable [`BreachPolicy`] to pick between warn and
//! rollback, and checks the short-memory recovery rule against the
//! immediately preceding status. Evaluation order is part of the contract:
//! each step may depend on the previous step's label, so the pass must not
//! be reordered.
//!
//! The warn/rollback tie-break is source randomness entangled with
//! business policy, so it lives behind a trait rather than inside the
//! algorithm: tests fix it with a closure, production uses the seeded
//! [`RandomPolicy`].

use rand::Rng;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::config::GuardrailConfig;
use crate::constants::{DEFAULT_ROLLBACK_PROBABILITY, DEFAULT_SEED};
use crate::error::Result;
use crate::result::{DriftPoint, GuardrailStatus};

/// One raw observation of a monitored metric stream.
#[derive(Debug, Clone, Copy)]
pub struct DriftSignal {
    /// PSI-like drift score, >= 0.
    pub drift_metric: f64,
    /// Error metric (e.g. RMSE), >= 0.
    pub error_metric: f64,
}

impl DriftSignal {
    /// Convenience constructor.
    pub fn new(drift_metric: f64, error_metric: f64) -> Self {
        Self {
            drift_metric,
            error_metric,
        }
    }
}

/// Status chosen by a [`BreachPolicy`] when a threshold is breached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreachAction {
    /// Keep serving, flag for attention.
    Warn,
    /// Roll the deployment back.
    Rollback,
}

/// Decides between warn and rollback when a step breaches a threshold.
///
/// Implemented for any `FnMut(f64, f64) -> BreachAction`, so tests can
/// inject a deterministic closure:
///
/// ```ignore
/// let mut always_rollback = |_drift: f64, _error: f64| BreachAction::Rollback;
/// let series = classify_guardrail_series(&points, &config, &mut always_rollback)?;
/// ```
pub trait BreachPolicy {
    /// Pick the status for a breached step given the observed metrics.
    fn decide(&mut self, drift_metric: f64, error_metric: f64) -> BreachAction;
}

impl<F> BreachPolicy for F
where
    F: FnMut(f64, f64) -> BreachAction,
{
    fn decide(&mut self, drift_metric: f64, error_metric: f64) -> BreachAction {
        self(drift_metric, error_metric)
    }
}

/// Default breach policy: rollback with fixed probability, warn otherwise.
///
/// Uses a seeded xoshiro generator so the same seed and series always
/// produce the same labels. The metrics themselves do not influence the
/// draw; the policy input is pure tie-break randomness.
#[derive(Debug, Clone)]
pub struct RandomPolicy {
    rng: Xoshiro256PlusPlus,
    rollback_probability: f64,
}

impl RandomPolicy {
    /// Policy with the given rollback probability (clamped into [0, 1])
    /// and the crate's default seed.
    pub fn new(rollback_probability: f64) -> Self {
        Self::with_seed(rollback_probability, DEFAULT_SEED)
    }

    /// Policy with an explicit seed.
    pub fn with_seed(rollback_probability: f64, seed: u64) -> Self {
        Self {
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
            rollback_probability: rollback_probability.clamp(0.0, 1.0),
        }
    }
}

impl Default for RandomPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_ROLLBACK_PROBABILITY)
    }
}

impl BreachPolicy for RandomPolicy {
    fn decide(&mut self, _drift_metric: f64, _error_metric: f64) -> BreachAction {
        if self.rng.random::<f64>() < self.rollback_probability {
            BreachAction::Rollback
        } else {
            BreachAction::Warn
        }
    }
}

/// Classify a drift-monitoring series into guardrail statuses.
///
/// Per step `t`, in order:
/// 1. Breach rule: `drift > drift_threshold || error > error_threshold`
///    makes the step a breach; the policy picks warn or rollback.
///    Otherwise the step is tentatively ok.
/// 2. Recovery override, only once `t` is past the warm-up window: if the
///    drift metric has fallen below `recovery_threshold` and the
///    immediately preceding status was warn or rollback, the step becomes
///    recovered. Recovered is therefore never emitted without a breach
///    label directly before it.
///
/// Returns one [`DriftPoint`] per input signal, in input order.
///
/// # Errors
///
/// [`crate::Error::InvalidConfiguration`] if the config fails
/// [`GuardrailConfig::validate`].
pub fn classify_guardrail_series<P: BreachPolicy>(
    points: &[DriftSignal],
    config: &GuardrailConfig,
    policy: &mut P,
) -> Result<Vec<DriftPoint>> {
    config.validate()?;

    let mut series = Vec::with_capacity(points.len());
    let mut prev: Option<GuardrailStatus> = None;

    for (t, signal) in points.iter().enumerate() {
        let breached = signal.drift_metric > config.drift_threshold
            || signal.error_metric > config.error_threshold;

        let mut status = if breached {
            match policy.decide(signal.drift_metric, signal.error_metric) {
                BreachAction::Warn => GuardrailStatus::Warn,
                BreachAction::Rollback => GuardrailStatus::Rollback,
            }
        } else {
            GuardrailStatus::Ok
        };

        if t > config.warmup_steps
            && signal.drift_metric < config.recovery_threshold
            && matches!(
                prev,
                Some(GuardrailStatus::Warn) | Some(GuardrailStatus::Rollback)
            )
        {
            status = GuardrailStatus::Recovered;
        }

        prev = Some(status);
        series.push(DriftPoint {
            time_index: t,
            drift_metric: signal.drift_metric,
            error_metric: signal.error_metric,
            status,
        });
    }

    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> GuardrailConfig {
        GuardrailConfig {
            drift_threshold: 0.25,
            error_threshold: 2.7,
            recovery_threshold: 0.15,
            warmup_steps: 3,
        }
    }

    fn warn_policy() -> impl FnMut(f64, f64) -> BreachAction {
        |_, _| BreachAction::Warn
    }

    #[test]
    fn quiet_series_is_all_ok() {
        let points: Vec<DriftSignal> =
            (0..30).map(|_| DriftSignal::new(0.05, 1.8)).collect();
        let series =
            classify_guardrail_series(&points, &config(), &mut warn_policy()).unwrap();
        assert!(series.iter().all(|p| p.status == GuardrailStatus::Ok));
    }

    #[test]
    fn breach_then_recovery_happens_exactly_once() {
        // ok ok ok ok breach breach ok(recovered) ok
        let points = vec![
            DriftSignal::new(0.05, 1.8),
            DriftSignal::new(0.06, 1.9),
            DriftSignal::new(0.08, 2.0),
            DriftSignal::new(0.10, 2.1),
            DriftSignal::new(0.30, 2.9), // breach
            DriftSignal::new(0.28, 2.8), // breach
            DriftSignal::new(0.10, 2.0), // below recovery, prev = breach
            DriftSignal::new(0.09, 1.9),
        ];
        let series =
            classify_guardrail_series(&points, &config(), &mut warn_policy()).unwrap();

        let statuses: Vec<GuardrailStatus> = series.iter().map(|p| p.status).collect();
        assert_eq!(statuses[4], GuardrailStatus::Warn);
        assert_eq!(statuses[5], GuardrailStatus::Warn);
        assert_eq!(statuses[6], GuardrailStatus::Recovered);
        assert_eq!(statuses[7], GuardrailStatus::Ok);

        let recoveries = statuses
            .iter()
            .filter(|s| **s == GuardrailStatus::Recovered)
            .count();
        assert_eq!(recoveries, 1);
    }

    #[test]
    fn recovered_always_follows_a_breach_label() {
        // Fuzz-ish sweep with a deterministic policy: the invariant must
        // hold for any drift pattern.
        let points: Vec<DriftSignal> = (0..200)
            .map(|i| {
                let drift = 0.05 + 0.3 * ((i as f64 * 0.7).sin().abs());
                let error = 1.5 + (i % 5) as f64 * 0.4;
                DriftSignal::new(drift, error)
            })
            .collect();
        let mut policy = RandomPolicy::with_seed(0.4, 7);
        let series = classify_guardrail_series(&points, &config(), &mut policy).unwrap();

        for pair in series.windows(2) {
            if pair[1].status == GuardrailStatus::Recovered {
                assert!(
                    matches!(
                        pair[0].status,
                        GuardrailStatus::Warn | GuardrailStatus::Rollback
                    ),
                    "recovered at t={} after {:?}",
                    pair[1].time_index,
                    pair[0].status
                );
            }
        }
        assert_ne!(series[0].status, GuardrailStatus::Recovered);
    }

    #[test]
    fn no_recovery_inside_warmup_window() {
        let cfg = GuardrailConfig {
            warmup_steps: 10,
            ..config()
        };
        let points = vec![
            DriftSignal::new(0.30, 2.9), // breach at t=0
            DriftSignal::new(0.05, 1.8), // below recovery but t <= warmup
            DriftSignal::new(0.05, 1.8),
        ];
        let series = classify_guardrail_series(&points, &cfg, &mut warn_policy()).unwrap();
        assert_eq!(series[1].status, GuardrailStatus::Ok);
        assert_eq!(series[2].status, GuardrailStatus::Ok);
    }

    #[test]
    fn error_metric_alone_can_breach() {
        let points = vec![DriftSignal::new(0.05, 5.0)];
        let mut policy = |_: f64, _: f64| BreachAction::Rollback;
        let series = classify_guardrail_series(&points, &config(), &mut policy).unwrap();
        assert_eq!(series[0].status, GuardrailStatus::Rollback);
    }

    #[test]
    fn policy_sees_the_breaching_metrics() {
        let points = vec![DriftSignal::new(0.4, 1.0), DriftSignal::new(0.05, 9.0)];
        let mut seen = Vec::new();
        {
            let mut policy = |d: f64, e: f64| {
                seen.push((d, e));
                BreachAction::Warn
            };
            classify_guardrail_series(&points, &config(), &mut policy).unwrap();
        }
        assert_eq!(seen, vec![(0.4, 1.0), (0.05, 9.0)]);
    }

    #[test]
    fn random_policy_is_deterministic_per_seed() {
        let points: Vec<DriftSignal> =
            (0..50).map(|_| DriftSignal::new(0.5, 3.0)).collect();

        let run = |seed: u64| {
            let mut policy = RandomPolicy::with_seed(0.4, seed);
            classify_guardrail_series(&points, &config(), &mut policy)
                .unwrap()
                .iter()
                .map(|p| p.status)
                .collect::<Vec<_>>()
        };

        assert_eq!(run(23), run(23));

        // Probability 0 and 1 degenerate to pure warn / pure rollback.
        let mut never = RandomPolicy::with_seed(0.0, 1);
        let all_warn = classify_guardrail_series(&points, &config(), &mut never).unwrap();
        assert!(all_warn.iter().all(|p| p.status == GuardrailStatus::Warn));

        let mut always = RandomPolicy::with_seed(1.0, 1);
        let all_rb = classify_guardrail_series(&points, &config(), &mut always).unwrap();
        assert!(all_rb.iter().all(|p| p.status == GuardrailStatus::Rollback));
    }

    #[test]
    fn invalid_config_is_rejected_before_classification() {
        let cfg = GuardrailConfig {
            recovery_threshold: 0.9,
            ..config()
        };
        let points = vec![DriftSignal::new(0.05, 1.8)];
        assert!(classify_guardrail_series(&points, &cfg, &mut warn_policy()).is_err());
    }
}
