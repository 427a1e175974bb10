//! Tiny synthetic weight generator used by the CLI `generate` subcommand,
//! the benchmark harness and the criterion benches.

use rand::{rngs::StdRng, Rng as _, SeedableRng};

/// Generate `n` weights uniformly in `[0, max_weight]` from a fixed seed.
///
/// The same `(n, max_weight, seed)` always yields the same sequence.
#[must_use]
pub fn generate_weights(n: usize, max_weight: u32, seed: u64) -> Vec<u32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.random_range(0..=max_weight)).collect()
}
