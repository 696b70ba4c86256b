//! Random sources and the sampling primitives shared by every strategy.
//!
//! Every entry point in this crate takes the random source as a parameter.
//! Use [`seeded`] when a round must be reproducible and [`entropy`] otherwise.

use rand::seq::{index, SliceRandom};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Returns a deterministic random source for the given seed.
pub fn seeded(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Returns a random source seeded from the operating system.
pub fn entropy() -> ChaCha8Rng {
    ChaCha8Rng::from_entropy()
}

/// Choose up to `amount` distinct elements of `pool`, uniformly and without
/// replacement. The returned order is random.
pub(crate) fn choose<R: Rng + ?Sized>(rng: &mut R, pool: &[u32], amount: usize) -> Vec<u32> {
    pool.choose_multiple(rng, amount.min(pool.len()))
        .copied()
        .collect()
}

/// Choose up to `amount` distinct values from `start..start + len`,
/// uniformly and without replacement. The range is never materialized.
pub(crate) fn choose_span<R: Rng + ?Sized>(
    rng: &mut R,
    start: u32,
    len: usize,
    amount: usize,
) -> Vec<u32> {
    index::sample(rng, len, amount.min(len))
        .into_iter()
        .map(|offset| start + offset as u32)
        .collect()
}

/// Remove random elements until at most `len` remain. The relative order of
/// the remaining elements is preserved.
pub(crate) fn truncate<R: Rng + ?Sized>(rng: &mut R, values: &mut Vec<u32>, len: usize) {
    if values.len() <= len {
        return;
    }

    let mut drop = index::sample(rng, values.len(), values.len() - len).into_vec();
    // remove from the back so earlier indices stay valid
    drop.sort_unstable_by(|a, b| b.cmp(a));

    for index in drop {
        values.remove(index);
    }
}

/// Returns the bucket indices `0..len` in a random order.
pub(crate) fn permutation<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<usize> {
    let mut order: Vec<usize> = (0..len).collect();
    order.shuffle(rng);
    order
}
