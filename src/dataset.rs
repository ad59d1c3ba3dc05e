//! Input arrays for a sort run.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Identity permutation `1..=len` shuffled with a seeded RNG.
///
/// The same `(len, seed)` always produces the same array.
pub fn shuffled(len: u32, seed: u64) -> Vec<u32> {
    let mut values: Vec<u32> = (1..=len).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    values.shuffle(&mut rng);
    values
}

/// Fresh seed for runs that did not ask for one.
pub fn random_seed() -> u64 {
    rand::random()
}
