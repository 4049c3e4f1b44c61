//! Stream helpers for feeding observations one at a time.
//!
//! Thin adapters over in-memory tabular data. Online learners consume one
//! `(features, target)` pair per call; these helpers produce that shape from
//! parallel slices, optionally in a seeded shuffled order for reproducible
//! single-pass experiments.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Iterate `(features, target)` pairs from parallel slices.
///
/// Iteration stops at the shorter of the two slices.
pub fn iter_rows<'a, X, Y>(
    xs: &'a [X],
    ys: &'a [Y],
) -> impl Iterator<Item = (&'a X, &'a Y)> {
    xs.iter().zip(ys.iter())
}

/// Iterate `(features, target)` pairs in a seeded shuffled order.
///
/// The permutation is a Fisher-Yates shuffle of row indices driven by a
/// dedicated `StdRng`, so the same seed always yields the same pass order.
pub fn iter_shuffled<'a, X, Y>(
    xs: &'a [X],
    ys: &'a [Y],
    seed: u64,
) -> impl Iterator<Item = (&'a X, &'a Y)> {
    let n = xs.len().min(ys.len());
    let mut indices: Vec<usize> = (0..n).collect();
    let mut rng = StdRng::seed_from_u64(seed);

    for i in 0..n.saturating_sub(1) {
        let j = rng.gen_range(i..n);
        indices.swap(i, j);
    }

    indices.into_iter().map(move |i| (&xs[i], &ys[i]))
}
