//! Online linear models for the Stolas online-learning library.
//!
//! All models here learn from one observation at a time with stochastic
//! gradient descent and implement the capability traits from
//! [`stolas_core`]:
//!
//! - [`LinearRegression`] - scalar targets ([`Regressor`])
//! - [`LogisticRegression`] - boolean targets ([`BinaryClassifier`])
//! - [`SoftmaxRegression`] - multiclass `usize` labels ([`Classifier`])
//!
//! [`Regressor`]: stolas_core::Regressor
//! [`Classifier`]: stolas_core::Classifier
//! [`BinaryClassifier`]: stolas_core::BinaryClassifier

mod logistic;
mod regression;
mod sgd;
mod softmax;

pub use logistic::LogisticRegression;
pub use regression::LinearRegression;
pub use sgd::{Decay, SgdConfig};
pub use softmax::SoftmaxRegression;
