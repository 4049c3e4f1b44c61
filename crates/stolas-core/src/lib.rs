//! # Stolas Core
//!
//! Core traits, losses, and stream helpers for the Stolas online-learning
//! library.
//!
//! Stolas is named after the 36th demon of the Ars Goetia, a teacher of
//! astronomy and the virtues of herbs - fitting for a library whose whole
//! job is teaching models, one observation at a time.
//!
//! ## Core Traits
//!
//! - [`Regressor`] - incremental scalar prediction
//! - [`Classifier`] - incremental class-probability prediction
//! - [`BinaryClassifier`] - positive-class probability shortcut
//!
//! Models learn from exactly one example per call and keep their state
//! across calls; `learn_one` and `predict*` interleave arbitrarily.
//!
//! ## Example
//!
//! ```ignore
//! use stolas_core::{Regressor, stream};
//! use stolas_linear::LinearRegression;
//!
//! let mut model = LinearRegression::new(2);
//! for (x, y) in stream::iter_rows(&xs, &ys) {
//!     model.learn_one(x, *y)?;
//! }
//! ```

pub mod error;
pub mod loss;
pub mod stream;
pub mod traits;

pub use error::{Error, Result};
pub use loss::{
    Absolute, BinaryLoss, ClassificationLoss, CrossEntropy, LogLoss, RegressionLoss, Squared,
};
pub use traits::{BinaryClassifier, Classifier, Regressor};
