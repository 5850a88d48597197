//! Sequential monitoring of an accruing experiment.
//!
//! Replays two fixed full-length samples through evenly spaced checkpoints
//! and records the cumulative test evidence at each one. The trajectory is
//! what lets a downstream consumer ask "when would this experiment first
//! have looked significant?" — this module does not apply any
//! alpha-spending correction itself; peeking policy is the caller's
//! concern.

use crate::constants::DEFAULT_STEPS;
use crate::error::{Error, Result};
use crate::result::SequentialRecord;
use crate::statistics::two_sample_test;

/// Configurable sequential monitor.
///
/// # Example
///
/// ```ignore
/// use expstats::SequentialMonitor;
///
/// let trajectory = SequentialMonitor::new()
///     .steps(20)
///     .run(&control, &treatment)?;
/// ```
#[derive(Debug, Clone)]
pub struct SequentialMonitor {
    steps: usize,
}

impl Default for SequentialMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl SequentialMonitor {
    /// Create a monitor with the default number of checkpoints.
    pub fn new() -> Self {
        Self {
            steps: DEFAULT_STEPS,
        }
    }

    /// Set the number of evenly spaced checkpoints.
    pub fn steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    /// Replay both arms through the configured checkpoints.
    ///
    /// The shared full sample size is `min(control.len(), treatment.len())`;
    /// at step i (1-based), both arms are truncated to their first
    /// `i * n_total / steps` observations — the prefix length is shared
    /// even when the arms differ in total size. Each prefix pair is fed to
    /// [`two_sample_test`], so replaying any single checkpoint's prefixes
    /// independently reproduces the exact same record (no extra smoothing).
    ///
    /// Checkpoint sizes are strictly increasing and the final checkpoint
    /// equals the shared full size.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidConfiguration`] if `steps` is 0 or exceeds the
    /// shared sample size (which would duplicate checkpoints);
    /// [`Error::InsufficientData`] if the first checkpoint holds fewer
    /// than 2 observations.
    pub fn run(&self, control: &[f64], treatment: &[f64]) -> Result<Vec<SequentialRecord>> {
        let n_total = control.len().min(treatment.len());

        if self.steps == 0 {
            return Err(Error::InvalidConfiguration(
                "steps must be positive".to_string(),
            ));
        }
        if self.steps > n_total {
            return Err(Error::InvalidConfiguration(format!(
                "steps ({}) exceeds the shared sample size ({n_total})",
                self.steps
            )));
        }

        let mut records = Vec::with_capacity(self.steps);
        for i in 1..=self.steps {
            let n = i * n_total / self.steps;
            let result = two_sample_test(&control[..n], &treatment[..n])?;
            records.push(SequentialRecord {
                checkpoint_size: n,
                result,
            });
        }

        Ok(records)
    }
}

/// Run a sequential monitor with explicit step count.
///
/// Convenience wrapper around [`SequentialMonitor`].
pub fn sequential_monitor(
    control: &[f64],
    treatment: &[f64],
    steps: usize,
) -> Result<Vec<SequentialRecord>> {
    SequentialMonitor::new().steps(steps).run(control, treatment)
}
