//! Stochastic gradient descent configuration shared by the linear models.

use serde::{Deserialize, Serialize};
use stolas_core::{Error, Result};

/// Learning rate decay schedules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Decay {
    /// Constant learning rate.
    Constant,
    /// `lr = lr_0 / sqrt(t)`.
    #[default]
    InverseSqrt,
    /// `lr = lr_0 / t`.
    Inverse,
}

/// SGD configuration for online linear models.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SgdConfig {
    /// Base learning rate.
    pub learning_rate: f32,
    /// Learning rate decay schedule.
    pub decay: Decay,
    /// L2 regularization strength.
    pub l2: f32,
}

impl Default for SgdConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.01,
            decay: Decay::InverseSqrt,
            l2: 0.0,
        }
    }
}

impl SgdConfig {
    /// Validate hyperparameter ranges.
    ///
    /// # Errors
    ///
    /// Returns an error if the learning rate is not positive and finite, or
    /// if the regularization strength is negative.
    pub fn validate(&self) -> Result<()> {
        if !(self.learning_rate > 0.0 && self.learning_rate.is_finite()) {
            return Err(Error::invalid_parameter(
                "learning_rate",
                self.learning_rate,
                "> 0 and finite",
            ));
        }
        if self.l2 < 0.0 {
            return Err(Error::invalid_parameter("l2", self.l2, ">= 0"));
        }
        Ok(())
    }

    /// Effective learning rate after `t` observations (`t >= 1`).
    pub fn rate_at(&self, t: u64) -> f32 {
        let t = t.max(1) as f32;
        match self.decay {
            Decay::Constant => self.learning_rate,
            Decay::InverseSqrt => self.learning_rate / t.sqrt(),
            Decay::Inverse => self.learning_rate / t,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SgdConfig::default();
        assert_eq!(config.learning_rate, 0.01);
        assert_eq!(config.decay, Decay::InverseSqrt);
        assert_eq!(config.l2, 0.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_rates() {
        for lr in [0.0f32, -0.1, f32::NAN, f32::INFINITY] {
            let config = SgdConfig {
                learning_rate: lr,
                ..Default::default()
            };
            assert!(config.validate().is_err(), "lr={lr} should be rejected");
        }
    }

    #[test]
    fn test_validate_rejects_negative_l2() {
        let config = SgdConfig {
            l2: -1.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rate_decays() {
        let config = SgdConfig {
            learning_rate: 1.0,
            decay: Decay::InverseSqrt,
            l2: 0.0,
        };
        assert_eq!(config.rate_at(1), 1.0);
        assert!((config.rate_at(4) - 0.5).abs() < 1e-6);
        assert!(config.rate_at(100) < config.rate_at(10));
    }

    #[test]
    fn test_rate_constant() {
        let config = SgdConfig {
            learning_rate: 0.5,
            decay: Decay::Constant,
            l2: 0.0,
        };
        assert_eq!(config.rate_at(1), 0.5);
        assert_eq!(config.rate_at(1000), 0.5);
    }

    #[test]
    fn test_rate_at_zero_clamps_to_one() {
        let config = SgdConfig {
            learning_rate: 0.5,
            decay: Decay::Inverse,
            l2: 0.0,
        };
        assert_eq!(config.rate_at(0), 0.5);
    }
}
