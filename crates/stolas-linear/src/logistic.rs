//! Online logistic regression trained with SGD.

use crate::sgd::SgdConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use stolas_core::{BinaryClassifier, Classifier, Error, Result};

/// Binary logistic regression fitted one observation at a time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticRegression {
    weights: Vec<f32>,
    intercept: f32,
    config: SgdConfig,
    n_seen: u64,
}

impl LogisticRegression {
    /// Create a model for `n_features` input features with default SGD
    /// settings.
    #[must_use]
    pub fn new(n_features: usize) -> Self {
        Self {
            weights: vec![0.0; n_features],
            intercept: 0.0,
            config: SgdConfig::default(),
            n_seen: 0,
        }
    }

    /// Create a model with a custom SGD configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is out of range.
    pub fn with_config(n_features: usize, config: SgdConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            weights: vec![0.0; n_features],
            intercept: 0.0,
            config,
            n_seen: 0,
        })
    }

    /// Current weights.
    #[must_use]
    pub fn weights(&self) -> &[f32] {
        &self.weights
    }

    /// Number of observations seen.
    #[must_use]
    pub fn n_seen(&self) -> u64 {
        self.n_seen
    }

    fn sigmoid(z: f32) -> f32 {
        1.0 / (1.0 + (-z).exp())
    }

    fn raw_proba(&self, x: &[f32]) -> f32 {
        let logit: f32 = x.iter().zip(&self.weights).map(|(xi, wi)| xi * wi).sum();
        Self::sigmoid(logit + self.intercept)
    }

    fn check_dimension(&self, x: &[f32]) -> Result<()> {
        if x.len() != self.weights.len() {
            return Err(Error::DimensionMismatch {
                expected: self.weights.len(),
                actual: x.len(),
            });
        }
        Ok(())
    }
}

impl Classifier for LogisticRegression {
    type Features = Vec<f32>;
    type Label = bool;

    fn learn_one(&mut self, x: &Vec<f32>, y: &bool) -> Result<()> {
        self.check_dimension(x)?;

        let lr = self.config.rate_at(self.n_seen + 1);
        let error = self.raw_proba(x) - f32::from(u8::from(*y));

        for (w, xi) in self.weights.iter_mut().zip(x) {
            *w -= lr * (error * xi + self.config.l2 * *w);
        }
        self.intercept -= lr * error;
        self.n_seen += 1;
        Ok(())
    }

    fn predict_proba_one(&self, x: &Vec<f32>) -> BTreeMap<bool, f32> {
        let p = self.raw_proba(x);
        BTreeMap::from([(false, 1.0 - p), (true, p)])
    }
}

impl BinaryClassifier for LogisticRegression {
    fn predict_positive_one(&self, x: &Vec<f32>) -> f32 {
        self.raw_proba(x)
    }
}
