//! Online multiclass softmax regression trained with SGD.

use crate::sgd::SgdConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use stolas_core::{Classifier, Error, Result};

/// Multinomial logistic regression over a fixed set of `usize` labels
/// `0..n_classes`, fitted one observation at a time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoftmaxRegression {
    // One weight row and intercept per class.
    weights: Vec<Vec<f32>>,
    intercepts: Vec<f32>,
    config: SgdConfig,
    n_seen: u64,
}

impl SoftmaxRegression {
    /// Create a model for `n_features` input features and `n_classes`
    /// output classes with default SGD settings.
    #[must_use]
    pub fn new(n_features: usize, n_classes: usize) -> Self {
        Self {
            weights: vec![vec![0.0; n_features]; n_classes],
            intercepts: vec![0.0; n_classes],
            config: SgdConfig::default(),
            n_seen: 0,
        }
    }

    /// Create a model with a custom SGD configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is out of range.
    pub fn with_config(n_features: usize, n_classes: usize, config: SgdConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            weights: vec![vec![0.0; n_features]; n_classes],
            intercepts: vec![0.0; n_classes],
            config,
            n_seen: 0,
        })
    }

    /// Number of output classes.
    #[must_use]
    pub fn n_classes(&self) -> usize {
        self.weights.len()
    }

    /// Number of observations seen.
    #[must_use]
    pub fn n_seen(&self) -> u64 {
        self.n_seen
    }

    fn probabilities(&self, x: &[f32]) -> Vec<f32> {
        let logits: Vec<f32> = self
            .weights
            .iter()
            .zip(&self.intercepts)
            .map(|(row, b)| x.iter().zip(row).map(|(xi, wi)| xi * wi).sum::<f32>() + b)
            .collect();

        // Shift by the max logit so exp stays bounded.
        let max = logits.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        let exps: Vec<f32> = logits.iter().map(|z| (z - max).exp()).collect();
        let total: f32 = exps.iter().sum();
        exps.into_iter().map(|e| e / total).collect()
    }

    fn check_observation(&self, x: &[f32], y: usize) -> Result<()> {
        let n_features = self.weights.first().map_or(0, Vec::len);
        if x.len() != n_features {
            return Err(Error::DimensionMismatch {
                expected: n_features,
                actual: x.len(),
            });
        }
        if y >= self.n_classes() {
            return Err(Error::UnknownLabel {
                label: y,
                n_classes: self.n_classes(),
            });
        }
        Ok(())
    }
}

impl Classifier for SoftmaxRegression {
    type Features = Vec<f32>;
    type Label = usize;

    fn learn_one(&mut self, x: &Vec<f32>, y: &usize) -> Result<()> {
        self.check_observation(x, *y)?;

        let lr = self.config.rate_at(self.n_seen + 1);
        let probs = self.probabilities(x);

        for (k, p_k) in probs.into_iter().enumerate() {
            let error = p_k - f32::from(u8::from(k == *y));
            for (w, xi) in self.weights[k].iter_mut().zip(x) {
                *w -= lr * (error * xi + self.config.l2 * *w);
            }
            self.intercepts[k] -= lr * error;
        }
        self.n_seen += 1;
        Ok(())
    }

    fn predict_proba_one(&self, x: &Vec<f32>) -> BTreeMap<usize, f32> {
        self.probabilities(x).into_iter().enumerate().collect()
    }
}
