//! Deterministic workload helpers for growvec benchmarks.
//!
//! Workloads are generated from fixed seeds so that runs are comparable
//! across machines and commits.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// `n` pseudo-random values from a fixed seed, identical across runs.
pub fn seeded_values(n: usize, seed: u64) -> Vec<u64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n).map(|_| rng.random()).collect()
}

/// `n` in-range insertion positions for a sequence growing from empty,
/// identical across runs. The i-th position is valid for a sequence of
/// length i.
pub fn seeded_positions(n: usize, seed: u64) -> Vec<usize> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n).map(|len| rng.random_range(0..=len)).collect()
}
