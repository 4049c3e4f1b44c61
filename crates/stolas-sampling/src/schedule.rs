//! Probabilistic replay scheduling.

use crate::error::{Result, SamplingError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Outcome of one scheduling draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Train on the buffered example at this index.
    Replay(usize),
    /// Train on the incoming example.
    Direct,
}

/// Seeded source of replay-vs-direct decisions.
///
/// One generator drives both draws - the branch choice and, on the replay
/// branch, the buffer index - so a fixed seed reproduces the entire
/// training trajectory bit for bit. The uniform real is drawn on every
/// call, keeping the stream aligned with the observation sequence
/// regardless of which branch each call takes.
#[derive(Debug)]
pub struct ReplaySchedule {
    p: f32,
    rng: StdRng,
}

impl ReplaySchedule {
    /// Create a schedule replaying with probability `p`.
    ///
    /// # Errors
    ///
    /// Returns an error if `p` is outside `[0, 1]`.
    pub fn new(p: f32, seed: Option<u64>) -> Result<Self> {
        if !(0.0..=1.0).contains(&p) {
            return Err(SamplingError::config(format!(
                "replay probability {p} outside [0, 1]"
            )));
        }
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self { p, rng })
    }

    /// Replay probability.
    pub fn p(&self) -> f32 {
        self.p
    }

    /// Draw the decision for one observation over a buffer of `len`
    /// examples.
    pub fn draw(&mut self, len: usize) -> Decision {
        let r: f32 = self.rng.gen();
        if r <= self.p && len > 0 {
            Decision::Replay(self.rng.gen_range(0..len))
        } else {
            Decision::Direct
        }
    }
}
