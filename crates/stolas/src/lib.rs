//! # Stolas
//!
//! Online learning with hard-example replay for the Daemoniorum ecosystem.
//!
//! Stolas is named after the 36th demon of the Ars Goetia, a teacher of
//! astronomy and the virtues of herbs. The library teaches models the same
//! way: one observation at a time, returning to the hardest lessons.
//!
//! A wrapper watches the loss its model incurs on every incoming example,
//! keeps the hardest examples in a bounded loss-ranked buffer, and with a
//! configured probability spends a training step on a buffered example
//! instead of the fresh one. Everything is driven by a seeded generator, so
//! a fixed seed reproduces the whole training trajectory.
//!
//! ## Quick Start
//!
//! ```
//! use stolas::{
//!     Decay, HardSamplingRegressor, LinearRegression, Regressor, SamplerConfig, SgdConfig,
//! };
//!
//! let sgd = SgdConfig {
//!     learning_rate: 0.1,
//!     decay: Decay::Constant,
//!     l2: 0.0,
//! };
//! let config = SamplerConfig {
//!     capacity: 30,
//!     replay_probability: 0.2,
//!     seed: Some(42),
//! };
//! let mut model =
//!     HardSamplingRegressor::new(LinearRegression::with_config(1, sgd)?, config)?;
//!
//! for i in 0..500 {
//!     let x = vec![i as f32 / 500.0];
//!     let y = 2.0 * x[0] + 1.0;
//!     model.learn_one(&x, y)?;
//! }
//!
//! let pred = model.predict_one(&vec![0.5]);
//! assert!((pred - 2.0).abs() < 0.5);
//! # Ok::<(), stolas::Error>(())
//! ```
//!
//! ## Crates
//!
//! - `stolas-core` - capability traits, losses, stream helpers
//! - `stolas-linear` - online SGD linear models
//! - `stolas-sampling` - replay buffer and hard-sampling wrappers

// Capability traits, losses, and stream helpers
pub use stolas_core::{
    error::{Error, Result},
    loss::{
        Absolute, BinaryLoss, ClassificationLoss, CrossEntropy, LogLoss, RegressionLoss, Squared,
    },
    stream,
    traits::{BinaryClassifier, Classifier, Regressor},
};

// Online linear models
pub use stolas_linear::{Decay, LinearRegression, LogisticRegression, SgdConfig, SoftmaxRegression};

// Replay buffer and hard-sampling wrappers
pub use stolas_sampling::{
    Decision, HardSamplingBinaryClassifier, HardSamplingClassifier, HardSamplingRegressor,
    ReplayBuffer, ReplaySchedule, Result as SamplingResult, SamplerConfig, SamplerStats,
    SamplingError, ScoredExample,
};
