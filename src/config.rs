//! Configuration for guardrail classification.

use crate::constants::{
    DEFAULT_DRIFT_THRESHOLD, DEFAULT_ERROR_THRESHOLD, DEFAULT_RECOVERY_THRESHOLD,
    DEFAULT_WARMUP_STEPS,
};
use crate::error::{Error, Result};

/// Threshold configuration for the guardrail state classifier.
///
/// The thresholds are inputs, not constants baked into the algorithm: a
/// stricter deployment can lower `drift_threshold`, a noisier metric can
/// raise `error_threshold`, and so on. Defaults match the canonical
/// 30-day monitoring fixtures.
#[derive(Debug, Clone)]
pub struct GuardrailConfig {
    /// Drift metric (PSI-like) level above which a step counts as a breach.
    pub drift_threshold: f64,

    /// Error metric level above which a step counts as a breach.
    pub error_threshold: f64,

    /// Drift level the stream must fall below before a breached status can
    /// flip to recovered. Must be strictly below `drift_threshold`.
    pub recovery_threshold: f64,

    /// Number of initial steps during which recovery is never emitted,
    /// regardless of the metrics.
    pub warmup_steps: usize,
}

impl Default for GuardrailConfig {
    fn default() -> Self {
        Self {
            drift_threshold: DEFAULT_DRIFT_THRESHOLD,
            error_threshold: DEFAULT_ERROR_THRESHOLD,
            recovery_threshold: DEFAULT_RECOVERY_THRESHOLD,
            warmup_steps: DEFAULT_WARMUP_STEPS,
        }
    }
}

impl GuardrailConfig {
    /// Validate threshold relationships.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidConfiguration`] if any threshold is non-finite or
    /// negative, or if `recovery_threshold >= drift_threshold` (a recovery
    /// level at or above the breach level would let a step be a breach and
    /// a recovery at once).
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("drift_threshold", self.drift_threshold),
            ("error_threshold", self.error_threshold),
            ("recovery_threshold", self.recovery_threshold),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidConfiguration(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }

        if self.recovery_threshold >= self.drift_threshold {
            return Err(Error::InvalidConfiguration(format!(
                "recovery_threshold ({}) must be below drift_threshold ({})",
                self.recovery_threshold, self.drift_threshold
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(GuardrailConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_inverted_recovery_threshold() {
        let config = GuardrailConfig {
            recovery_threshold: 0.5,
            drift_threshold: 0.25,
            ..GuardrailConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_non_finite_thresholds() {
        let config = GuardrailConfig {
            error_threshold: f64::NAN,
            ..GuardrailConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
