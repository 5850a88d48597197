//! Leaf statistical primitives for experiment analysis.
//!
//! This module provides the numeric core everything else builds on:
//! - Closed-form standard-normal CDF and probit approximations
//! - Welch-style two-sample test with a normal-approximation p-value
//! - Mean-difference / Cohen's d effect sizes
//! - Covariance and Pearson correlation for paired series

mod correlation;
mod effect;
mod normal;
mod ttest;

pub use correlation::{covariance, pearson};
pub use effect::{effect_size, EffectSize};
pub use normal::{normal_cdf, probit};
pub use ttest::two_sample_test;

pub(crate) use ttest::{check_len, mean, sample_variance};
