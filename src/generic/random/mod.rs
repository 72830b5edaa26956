//! Sources of randomness.
//!
//! Randomness is only used to vary the order of a search, and so a small, seedable, generator is sufficient.

mod minimal_pcg;

pub use minimal_pcg::MinimalPCG32;

use rand::{seq::SliceRandom, SeedableRng};

/// Shuffles `items` with a [MinimalPCG32] seeded by `seed`.
///
/// The same seed always results in the same shuffle.
///
/// ```rust
/// # use otter_twosat::generic::random::seeded_shuffle;
/// let mut a = (0..32).collect::<Vec<usize>>();
/// let mut b = a.clone();
///
/// seeded_shuffle(&mut a, 7);
/// seeded_shuffle(&mut b, 7);
/// assert_eq!(a, b);
/// ```
pub fn seeded_shuffle<T>(items: &mut [T], seed: u64) {
    let mut rng = MinimalPCG32::from_seed(seed.to_le_bytes());
    items.shuffle(&mut rng);
}
