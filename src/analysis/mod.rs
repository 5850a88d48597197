//! Composite experiment-analysis components.
//!
//! These orchestrate the primitives in [`crate::statistics`]:
//! - Sequential monitoring of an accruing experiment
//! - Power estimation across a sample-size sweep
//! - Sample-ratio-mismatch checking
//! - Guardrail state classification of drift series
//! - CUPED variance reduction

mod cuped;
mod guardrail;
mod power;
mod sequential;
mod srm;

pub use cuped::{cuped_adjust, CupedAdjustment};
pub use guardrail::{
    classify_guardrail_series, BreachAction, BreachPolicy, DriftSignal, RandomPolicy,
};
pub use power::{default_sweep, power_curve};
pub use sequential::{sequential_monitor, SequentialMonitor};
pub use srm::{srm_check, GroupCount};
