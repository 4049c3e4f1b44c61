//! Hard-example sampling wrappers.
//!
//! Each wrapper owns an incremental model, a loss function, a loss-ranked
//! [`ReplayBuffer`], and a seeded [`ReplaySchedule`]. Per observation it
//! scores the incoming example under the current model, offers it to the
//! buffer, then either resurfaces a buffered example for training (and
//! rescores it against the updated model) or trains on the fresh example.
//!
//! The prediction accessor is fixed by which wrapper is constructed:
//! [`HardSamplingRegressor`] scores with the scalar prediction,
//! [`HardSamplingClassifier`] with the class-probability map, and
//! [`HardSamplingBinaryClassifier`] with the positive-class probability.
//! Every wrapper re-exposes the capability it wraps, so wrapped models drop
//! in anywhere a bare model is expected.

use crate::buffer::ReplayBuffer;
use crate::error::{Result, SamplingError};
use crate::schedule::{Decision, ReplaySchedule};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use stolas_core::loss::{
    Absolute, BinaryLoss, ClassificationLoss, CrossEntropy, LogLoss, RegressionLoss,
};
use stolas_core::{BinaryClassifier, Classifier, Regressor};
use tracing::{debug, trace};

/// Configuration for hard-example sampling wrappers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SamplerConfig {
    /// Buffer capacity: how many hard examples to retain.
    pub capacity: usize,
    /// Probability of training on a buffered example instead of the
    /// incoming one.
    pub replay_probability: f32,
    /// Random seed. `None` draws one from entropy.
    pub seed: Option<u64>,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            capacity: 30,
            replay_probability: 0.2,
            seed: None,
        }
    }
}

impl SamplerConfig {
    /// Validate configuration ranges.
    ///
    /// # Errors
    ///
    /// Returns an error for a zero capacity or a replay probability
    /// outside `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(SamplingError::config("capacity must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.replay_probability) {
            return Err(SamplingError::config(format!(
                "replay probability {} outside [0, 1]",
                self.replay_probability
            )));
        }
        Ok(())
    }
}

/// Counters describing what a wrapper did with its stream so far.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SamplerStats {
    /// Observations processed.
    pub observed: u64,
    /// Observations retained by the buffer.
    pub buffered: u64,
    /// Buffer minima displaced by harder newcomers.
    pub evicted: u64,
    /// Observations the buffer declined to retain.
    pub discarded: u64,
    /// Training steps spent on buffered examples.
    pub replayed: u64,
    /// Training steps spent on incoming examples.
    pub direct: u64,
}

impl SamplerStats {
    /// Fraction of training steps that replayed a buffered example.
    pub fn replay_rate(&self) -> f32 {
        if self.observed == 0 {
            0.0
        } else {
            self.replayed as f32 / self.observed as f32
        }
    }

    fn record_consider(&mut self, accepted: bool, was_full: bool) {
        self.observed += 1;
        if accepted {
            self.buffered += 1;
            if was_full {
                self.evicted += 1;
            }
        } else {
            self.discarded += 1;
        }
    }
}

/// Hard-example replay around a [`Regressor`].
///
/// Hardness is the regression loss (absolute error by default) between the
/// target and the scalar prediction.
pub struct HardSamplingRegressor<M: Regressor, L = Absolute> {
    model: M,
    loss: L,
    buffer: ReplayBuffer<M::Features, f32>,
    schedule: ReplaySchedule,
    stats: SamplerStats,
}

impl<M> HardSamplingRegressor<M, Absolute>
where
    M: Regressor,
    M::Features: Clone,
{
    /// Wrap a regressor with the default absolute-error loss.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(model: M, config: SamplerConfig) -> Result<Self> {
        Self::with_loss(model, Absolute, config)
    }
}

impl<M, L> HardSamplingRegressor<M, L>
where
    M: Regressor,
    M::Features: Clone,
    L: RegressionLoss,
{
    /// Wrap a regressor with a custom hardness loss.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn with_loss(model: M, loss: L, config: SamplerConfig) -> Result<Self> {
        config.validate()?;
        debug!(
            capacity = config.capacity,
            p = config.replay_probability,
            "hard-sampling regressor ready"
        );
        Ok(Self {
            model,
            loss,
            buffer: ReplayBuffer::new(config.capacity)?,
            schedule: ReplaySchedule::new(config.replay_probability, config.seed)?,
            stats: SamplerStats::default(),
        })
    }

    /// The wrapped model.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Unwrap into the inner model.
    pub fn into_model(self) -> M {
        self.model
    }

    /// The replay buffer.
    pub fn buffer(&self) -> &ReplayBuffer<M::Features, f32> {
        &self.buffer
    }

    /// Stream counters.
    pub fn stats(&self) -> &SamplerStats {
        &self.stats
    }
}

impl<M, L> Regressor for HardSamplingRegressor<M, L>
where
    M: Regressor,
    M::Features: Clone,
    L: RegressionLoss,
{
    type Features = M::Features;

    fn learn_one(&mut self, x: &M::Features, y: f32) -> stolas_core::Result<()> {
        let hardness = self.loss.eval(y, self.model.predict_one(x));
        let was_full = self.buffer.len() == self.buffer.capacity();
        let accepted = self.buffer.consider(x.clone(), y, hardness);
        self.stats.record_consider(accepted, was_full);

        match self.schedule.draw(self.buffer.len()) {
            Decision::Replay(index) => {
                let entry = self.buffer.remove(index)?;
                self.model.learn_one(&entry.features, entry.target)?;
                let rescored = self
                    .loss
                    .eval(entry.target, self.model.predict_one(&entry.features));
                trace!(index, rescored, "replayed buffered example");
                self.buffer.reinsert(entry.features, entry.target, rescored);
                self.stats.replayed += 1;
            }
            Decision::Direct => {
                self.model.learn_one(x, y)?;
                self.stats.direct += 1;
            }
        }
        Ok(())
    }

    fn predict_one(&self, x: &M::Features) -> f32 {
        self.model.predict_one(x)
    }
}

impl<M: Regressor, L> std::fmt::Debug for HardSamplingRegressor<M, L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HardSamplingRegressor")
            .field("buffer_len", &self.buffer.len())
            .field("replay_probability", &self.schedule.p())
            .field("stats", &self.stats)
            .finish()
    }
}

/// Hard-example replay around a multiclass [`Classifier`].
///
/// Hardness is the classification loss (cross-entropy by default) between
/// the true label and the predicted class-probability map.
pub struct HardSamplingClassifier<M: Classifier, L = CrossEntropy> {
    model: M,
    loss: L,
    buffer: ReplayBuffer<M::Features, M::Label>,
    schedule: ReplaySchedule,
    stats: SamplerStats,
}

impl<M> HardSamplingClassifier<M, CrossEntropy>
where
    M: Classifier,
    M::Features: Clone,
{
    /// Wrap a classifier with the default cross-entropy loss.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(model: M, config: SamplerConfig) -> Result<Self> {
        Self::with_loss(model, CrossEntropy, config)
    }
}

impl<M, L> HardSamplingClassifier<M, L>
where
    M: Classifier,
    M::Features: Clone,
    L: ClassificationLoss<M::Label>,
{
    /// Wrap a classifier with a custom hardness loss.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn with_loss(model: M, loss: L, config: SamplerConfig) -> Result<Self> {
        config.validate()?;
        debug!(
            capacity = config.capacity,
            p = config.replay_probability,
            "hard-sampling classifier ready"
        );
        Ok(Self {
            model,
            loss,
            buffer: ReplayBuffer::new(config.capacity)?,
            schedule: ReplaySchedule::new(config.replay_probability, config.seed)?,
            stats: SamplerStats::default(),
        })
    }

    /// The wrapped model.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Unwrap into the inner model.
    pub fn into_model(self) -> M {
        self.model
    }

    /// The replay buffer.
    pub fn buffer(&self) -> &ReplayBuffer<M::Features, M::Label> {
        &self.buffer
    }

    /// Stream counters.
    pub fn stats(&self) -> &SamplerStats {
        &self.stats
    }
}

impl<M, L> Classifier for HardSamplingClassifier<M, L>
where
    M: Classifier,
    M::Features: Clone,
    L: ClassificationLoss<M::Label>,
{
    type Features = M::Features;
    type Label = M::Label;

    fn learn_one(&mut self, x: &M::Features, y: &M::Label) -> stolas_core::Result<()> {
        let hardness = self.loss.eval(y, &self.model.predict_proba_one(x));
        let was_full = self.buffer.len() == self.buffer.capacity();
        let accepted = self.buffer.consider(x.clone(), y.clone(), hardness);
        self.stats.record_consider(accepted, was_full);

        match self.schedule.draw(self.buffer.len()) {
            Decision::Replay(index) => {
                let entry = self.buffer.remove(index)?;
                self.model.learn_one(&entry.features, &entry.target)?;
                let rescored = self
                    .loss
                    .eval(&entry.target, &self.model.predict_proba_one(&entry.features));
                trace!(index, rescored, "replayed buffered example");
                self.buffer.reinsert(entry.features, entry.target, rescored);
                self.stats.replayed += 1;
            }
            Decision::Direct => {
                self.model.learn_one(x, y)?;
                self.stats.direct += 1;
            }
        }
        Ok(())
    }

    fn predict_proba_one(&self, x: &M::Features) -> BTreeMap<M::Label, f32> {
        self.model.predict_proba_one(x)
    }
}

impl<M: Classifier, L> std::fmt::Debug for HardSamplingClassifier<M, L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HardSamplingClassifier")
            .field("buffer_len", &self.buffer.len())
            .field("replay_probability", &self.schedule.p())
            .field("stats", &self.stats)
            .finish()
    }
}

/// Hard-example replay around a [`BinaryClassifier`].
///
/// Hardness is the binary loss (log loss by default) between the boolean
/// label and the positive-class probability.
pub struct HardSamplingBinaryClassifier<M: BinaryClassifier, L = LogLoss> {
    model: M,
    loss: L,
    buffer: ReplayBuffer<M::Features, bool>,
    schedule: ReplaySchedule,
    stats: SamplerStats,
}

impl<M> HardSamplingBinaryClassifier<M, LogLoss>
where
    M: BinaryClassifier,
    M::Features: Clone,
{
    /// Wrap a binary classifier with the default log loss.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(model: M, config: SamplerConfig) -> Result<Self> {
        Self::with_loss(model, LogLoss, config)
    }
}

impl<M, L> HardSamplingBinaryClassifier<M, L>
where
    M: BinaryClassifier,
    M::Features: Clone,
    L: BinaryLoss,
{
    /// Wrap a binary classifier with a custom hardness loss.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn with_loss(model: M, loss: L, config: SamplerConfig) -> Result<Self> {
        config.validate()?;
        debug!(
            capacity = config.capacity,
            p = config.replay_probability,
            "hard-sampling binary classifier ready"
        );
        Ok(Self {
            model,
            loss,
            buffer: ReplayBuffer::new(config.capacity)?,
            schedule: ReplaySchedule::new(config.replay_probability, config.seed)?,
            stats: SamplerStats::default(),
        })
    }

    /// The wrapped model.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Unwrap into the inner model.
    pub fn into_model(self) -> M {
        self.model
    }

    /// The replay buffer.
    pub fn buffer(&self) -> &ReplayBuffer<M::Features, bool> {
        &self.buffer
    }

    /// Stream counters.
    pub fn stats(&self) -> &SamplerStats {
        &self.stats
    }
}

impl<M, L> Classifier for HardSamplingBinaryClassifier<M, L>
where
    M: BinaryClassifier,
    M::Features: Clone,
    L: BinaryLoss,
{
    type Features = M::Features;
    type Label = bool;

    fn learn_one(&mut self, x: &M::Features, y: &bool) -> stolas_core::Result<()> {
        let hardness = self.loss.eval(*y, self.model.predict_positive_one(x));
        let was_full = self.buffer.len() == self.buffer.capacity();
        let accepted = self.buffer.consider(x.clone(), *y, hardness);
        self.stats.record_consider(accepted, was_full);

        match self.schedule.draw(self.buffer.len()) {
            Decision::Replay(index) => {
                let entry = self.buffer.remove(index)?;
                self.model.learn_one(&entry.features, &entry.target)?;
                let rescored = self
                    .loss
                    .eval(entry.target, self.model.predict_positive_one(&entry.features));
                trace!(index, rescored, "replayed buffered example");
                self.buffer.reinsert(entry.features, entry.target, rescored);
                self.stats.replayed += 1;
            }
            Decision::Direct => {
                self.model.learn_one(x, y)?;
                self.stats.direct += 1;
            }
        }
        Ok(())
    }

    fn predict_proba_one(&self, x: &M::Features) -> BTreeMap<bool, f32> {
        self.model.predict_proba_one(x)
    }
}

impl<M, L> BinaryClassifier for HardSamplingBinaryClassifier<M, L>
where
    M: BinaryClassifier,
    M::Features: Clone,
    L: BinaryLoss,
{
    fn predict_positive_one(&self, x: &M::Features) -> f32 {
        self.model.predict_positive_one(x)
    }
}

impl<M: BinaryClassifier, L> std::fmt::Debug for HardSamplingBinaryClassifier<M, L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HardSamplingBinaryClassifier")
            .field("buffer_len", &self.buffer.len())
            .field("replay_probability", &self.schedule.p())
            .field("stats", &self.stats)
            .finish()
    }
}
