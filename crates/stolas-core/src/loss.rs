//! Loss functions for scoring observation hardness.
//!
//! Each loss compares a ground truth with the matching prediction shape and
//! returns a non-negative finite scalar. Regression losses consume scalar
//! predictions, classification losses consume class-probability maps, and
//! binary losses consume the positive-class probability directly.

use std::collections::BTreeMap;

/// Smallest probability fed to a logarithm. Predictions are clamped into
/// `[PROBA_CLAMP, 1 - PROBA_CLAMP]` so a confident miss stays finite.
const PROBA_CLAMP: f32 = 1e-7;

/// Loss over scalar predictions.
pub trait RegressionLoss {
    /// Evaluate the loss of a prediction against the ground truth.
    fn eval(&self, y_true: f32, y_pred: f32) -> f32;
}

/// Absolute error: `|y_pred - y_true|`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Absolute;

impl RegressionLoss for Absolute {
    fn eval(&self, y_true: f32, y_pred: f32) -> f32 {
        (y_pred - y_true).abs()
    }
}

/// Squared error: `(y_pred - y_true)^2`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Squared;

impl RegressionLoss for Squared {
    fn eval(&self, y_true: f32, y_pred: f32) -> f32 {
        let diff = y_pred - y_true;
        diff * diff
    }
}

/// Loss over class-probability distributions.
pub trait ClassificationLoss<L> {
    /// Evaluate the loss of a predicted distribution against the true label.
    fn eval(&self, y_true: &L, y_pred: &BTreeMap<L, f32>) -> f32;
}

/// Multiclass cross-entropy: `-ln p(y_true)`.
///
/// A label absent from the predicted distribution is treated as probability
/// zero and clamped, so an untrained model yields a large but finite loss.
#[derive(Debug, Clone, Copy, Default)]
pub struct CrossEntropy;

impl<L: Ord> ClassificationLoss<L> for CrossEntropy {
    fn eval(&self, y_true: &L, y_pred: &BTreeMap<L, f32>) -> f32 {
        let p = y_pred.get(y_true).copied().unwrap_or(0.0);
        -p.clamp(PROBA_CLAMP, 1.0 - PROBA_CLAMP).ln()
    }
}

/// Loss over positive-class probabilities.
pub trait BinaryLoss {
    /// Evaluate the loss of a positive-class probability against the truth.
    fn eval(&self, y_true: bool, p_pos: f32) -> f32;
}

/// Binary log loss: `-ln p(y_true)` with `p(false) = 1 - p_pos`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogLoss;

impl BinaryLoss for LogLoss {
    fn eval(&self, y_true: bool, p_pos: f32) -> f32 {
        let p = if y_true { p_pos } else { 1.0 - p_pos };
        -p.clamp(PROBA_CLAMP, 1.0 - PROBA_CLAMP).ln()
    }
}
