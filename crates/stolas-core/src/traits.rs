//! Capability traits for incremental models.
//!
//! ## Trait Hierarchy
//!
//! ```text
//! Regressor                 (scalar prediction)
//! Classifier                (class-probability prediction)
//!       ↓
//! BinaryClassifier          (positive-class probability shortcut)
//! ```
//!
//! Every model processes exactly one example per call: state persists across
//! calls and `learn_one` / `predict*` may be interleaved arbitrarily. A
//! wrapper that composes a model re-exposes the same capability it wraps, so
//! wrapped and bare models are interchangeable.

use crate::error::Result;
use std::collections::BTreeMap;

/// Incremental regression capability.
pub trait Regressor {
    /// Feature payload consumed by this model.
    type Features;

    /// Update the model with a single observation.
    ///
    /// # Errors
    ///
    /// Returns an error if the observation is malformed for this model
    /// (e.g. wrong feature dimension).
    fn learn_one(&mut self, x: &Self::Features, y: f32) -> Result<()>;

    /// Predict the target value for a single observation.
    fn predict_one(&self, x: &Self::Features) -> f32;
}

/// Incremental multiclass classification capability.
pub trait Classifier {
    /// Feature payload consumed by this model.
    type Features;

    /// Class label type. `Ord` keeps probability maps deterministically
    /// ordered, which seeded training trajectories rely on.
    type Label: Clone + Ord;

    /// Update the model with a single observation.
    ///
    /// # Errors
    ///
    /// Returns an error if the observation is malformed for this model.
    fn learn_one(&mut self, x: &Self::Features, y: &Self::Label) -> Result<()>;

    /// Predict the class-probability distribution for a single observation.
    fn predict_proba_one(&self, x: &Self::Features) -> BTreeMap<Self::Label, f32>;

    /// Predict the most probable class, if any probability mass exists.
    fn predict_one(&self, x: &Self::Features) -> Option<Self::Label> {
        self.predict_proba_one(x)
            .into_iter()
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(label, _)| label)
    }
}

/// Incremental binary classification capability.
///
/// A binary classifier is a [`Classifier`] over `bool` labels that can
/// additionally report the positive-class probability as a bare scalar.
pub trait BinaryClassifier: Classifier<Label = bool> {
    /// Probability of the positive class for a single observation.
    fn predict_positive_one(&self, x: &Self::Features) -> f32 {
        self.predict_proba_one(x)
            .get(&true)
            .copied()
            .unwrap_or(0.0)
    }
}
