//! Hard-example replay for online learning.
//!
//! This crate wraps any incremental model from [`stolas_core`] so that,
//! while processing a single pass over a stream, the model occasionally
//! retrains on the hardest examples it has seen. Hardness is the loss the
//! current model incurs on an observation; the hardest examples live in a
//! bounded, loss-ranked [`ReplayBuffer`], and a seeded [`ReplaySchedule`]
//! decides per observation whether to train on a buffered example or on the
//! fresh one.
//!
//! ## Example
//!
//! ```
//! use stolas_core::Regressor;
//! use stolas_linear::LinearRegression;
//! use stolas_sampling::{HardSamplingRegressor, SamplerConfig};
//!
//! let config = SamplerConfig {
//!     capacity: 30,
//!     replay_probability: 0.2,
//!     seed: Some(42),
//! };
//! let mut model = HardSamplingRegressor::new(LinearRegression::new(1), config)?;
//!
//! for i in 0..100 {
//!     let x = vec![i as f32 / 100.0];
//!     let y = 2.0 * x[0] + 1.0;
//!     model.learn_one(&x, y)?;
//! }
//! assert!(model.buffer().len() <= 30);
//! # Ok::<(), stolas_core::Error>(())
//! ```
//!
//! Wrappers re-expose the capability they wrap, so a wrapped model drops in
//! anywhere a bare model is expected. A fixed seed makes the whole training
//! trajectory reproducible: which examples are buffered, which get
//! replayed, and every resulting model update.

mod buffer;
mod error;
mod hard;
mod schedule;

pub use buffer::{ReplayBuffer, ScoredExample};
pub use error::{Result, SamplingError};
pub use hard::{
    HardSamplingBinaryClassifier, HardSamplingClassifier, HardSamplingRegressor, SamplerConfig,
    SamplerStats,
};
pub use schedule::{Decision, ReplaySchedule};
