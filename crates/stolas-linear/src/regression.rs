//! Online linear regression trained with SGD.

use crate::sgd::SgdConfig;
use serde::{Deserialize, Serialize};
use stolas_core::{Error, Regressor, Result};

/// Linear regression fitted one observation at a time.
///
/// Weights start at zero and move along the squared-error gradient with a
/// decayed learning rate, so a single pass over a stream is enough to fit
/// simple linear targets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearRegression {
    weights: Vec<f32>,
    intercept: f32,
    config: SgdConfig,
    n_seen: u64,
}

impl LinearRegression {
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

    /// Current intercept.
    #[must_use]
    pub fn intercept(&self) -> f32 {
        self.intercept
    }

    /// Number of observations seen.
    #[must_use]
    pub fn n_seen(&self) -> u64 {
        self.n_seen
    }

    fn raw_predict(&self, x: &[f32]) -> f32 {
        let dot: f32 = x.iter().zip(&self.weights).map(|(xi, wi)| xi * wi).sum();
        dot + self.intercept
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

impl Regressor for LinearRegression {
    type Features = Vec<f32>;

    fn learn_one(&mut self, x: &Vec<f32>, y: f32) -> Result<()> {
        self.check_dimension(x)?;

        let lr = self.config.rate_at(self.n_seen + 1);
        let error = self.raw_predict(x) - y;

        for (w, xi) in self.weights.iter_mut().zip(x) {
            *w -= lr * (error * xi + self.config.l2 * *w);
        }
        self.intercept -= lr * error;
        self.n_seen += 1;
        Ok(())
    }

    fn predict_one(&self, x: &Vec<f32>) -> f32 {
        self.raw_predict(x)
    }
}
