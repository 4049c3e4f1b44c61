//! Loss-ranked replay buffer for hard examples.

use crate::error::{Result, SamplingError};
use serde::{Deserialize, Serialize};

/// A buffered observation scored by the loss the model incurred on it.
///
/// Payloads are owned by the buffer and never mutated; ordering is by
/// `loss` alone, with ties keeping their relative insertion order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredExample<X, Y> {
    /// Feature payload.
    pub features: X,
    /// Target payload.
    pub target: Y,
    /// Loss under the model state current at scoring time.
    pub loss: f32,
}

/// Bounded buffer of the highest-loss examples seen so far.
///
/// Entries stay sorted ascending by loss, so index 0 is always the easiest
/// retained example and eviction is a front pop. Capacity is small by
/// design (tens to low hundreds), which makes a sorted `Vec` with `O(K)`
/// shifts the right backing store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplayBuffer<X, Y> {
    entries: Vec<ScoredExample<X, Y>>,
    capacity: usize,
}

impl<X, Y> ReplayBuffer<X, Y> {
    /// Create an empty buffer holding at most `capacity` examples.
    ///
    /// # Errors
    ///
    /// Returns an error if `capacity` is zero: a buffer that can never
    /// accept an example would starve every replay draw.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(SamplingError::config("capacity must be at least 1"));
        }
        Ok(Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        })
    }

    /// Number of buffered examples.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Is the buffer empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of examples retained.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The minimum-loss example (index 0).
    ///
    /// # Errors
    ///
    /// Returns [`SamplingError::EmptyBuffer`] when no example is buffered.
    pub fn min(&self) -> Result<&ScoredExample<X, Y>> {
        self.entries.first().ok_or(SamplingError::EmptyBuffer)
    }

    /// Offer an example to the buffer, returning whether it was retained.
    ///
    /// Below capacity the example is always inserted at its sorted
    /// position. At capacity it replaces the current minimum only when its
    /// loss is strictly greater; a tie leaves the buffer untouched. A
    /// rejected example is merely not remembered - the caller may still
    /// train on it directly in the same step.
    pub fn consider(&mut self, features: X, target: Y, loss: f32) -> bool {
        if self.entries.len() < self.capacity {
            self.insert_sorted(ScoredExample {
                features,
                target,
                loss,
            });
            return true;
        }

        // Strict comparison: equal-loss newcomers never displace the minimum.
        if loss > self.entries[0].loss {
            self.entries.remove(0);
            self.insert_sorted(ScoredExample {
                features,
                target,
                loss,
            });
            return true;
        }

        false
    }

    /// Remove and return the example at `index`, preserving sort order of
    /// the remainder.
    ///
    /// # Errors
    ///
    /// Returns [`SamplingError::IndexOutOfRange`] for an invalid index.
    pub fn remove(&mut self, index: usize) -> Result<ScoredExample<X, Y>> {
        if index >= self.entries.len() {
            return Err(SamplingError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        Ok(self.entries.remove(index))
    }

    /// Insert a previously removed example back at its sorted position
    /// under a fresh loss. Intended to follow [`ReplayBuffer::remove`], so
    /// a slot is free.
    pub fn reinsert(&mut self, features: X, target: Y, loss: f32) {
        self.insert_sorted(ScoredExample {
            features,
            target,
            loss,
        });
    }

    /// Buffered examples in ascending loss order.
    pub fn iter(&self) -> impl Iterator<Item = &ScoredExample<X, Y>> {
        self.entries.iter()
    }

    /// Buffered examples as a slice, ascending by loss.
    pub fn as_slice(&self) -> &[ScoredExample<X, Y>] {
        &self.entries
    }

    /// Losses in buffer order. Convenient for assertions and logging.
    pub fn losses(&self) -> Vec<f32> {
        self.entries.iter().map(|e| e.loss).collect()
    }

    // Ties insert after existing equals, keeping relative insertion order.
    fn insert_sorted(&mut self, example: ScoredExample<X, Y>) {
        let at = self.entries.partition_point(|e| e.loss <= example.loss);
        self.entries.insert(at, example);
    }
}
