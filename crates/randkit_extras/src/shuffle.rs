//! Shuffling and picking from collections.
//!
//! [`shuffle`] accepts any `Rng`, so a seeded
//! [`RandomGenerator`] gives reproducible permutations. [`crypto_shuffle`]
//! always draws from the operating-system CSPRNG. It is a convenience for
//! unpredictable orderings, not an audited security primitive.

use rand::seq::{index, IteratorRandom, SliceRandom};
use rand::{Rng, RngCore};
use randkit_core::RandomGenerator;
use tracing::trace;

/// Fisher-Yates in-place shuffle over `rng`.
///
/// Every permutation is equally likely.
///
/// # Examples
/// ```
/// use randkit_core::RandomGenerator;
/// use randkit_extras::shuffle::shuffle;
///
/// let mut v = vec![1, 2, 3, 4, 5];
/// let mut rng = RandomGenerator::seeded(42);
/// shuffle(&mut v, &mut rng);
/// v.sort();
/// assert_eq!(v, vec![1, 2, 3, 4, 5]);
/// ```
pub fn shuffle<T, R: Rng + ?Sized>(slice: &mut [T], rng: &mut R) {
    slice.shuffle(rng);
}

/// Fisher-Yates shuffle driven by the operating-system CSPRNG.
///
/// Swap positions for slices of up to 256 elements come from single bytes
/// with rejection sampling; longer slices fall back to word draws.
pub fn crypto_shuffle<T>(slice: &mut [T]) {
    let mut rng = RandomGenerator::os();
    let n = slice.len();
    for i in (1..n).rev() {
        let j = unbiased_index(&mut rng, i + 1);
        slice.swap(i, j);
    }
}

/// Uniform index in `[0, bound)` using byte draws where the bound allows.
fn unbiased_index<R: RngCore>(rng: &mut RandomGenerator<R>, bound: usize) -> usize {
    if bound > 256 {
        return rng.gen_range(0..bound);
    }
    // Largest multiple of `bound` not above 256.
    let limit = 256 - 256 % bound;
    loop {
        let b = usize::from(rng.byte());
        if b < limit {
            return b % bound;
        }
        trace!(byte = b, bound, "rejected byte in crypto shuffle");
    }
}

/// Random permutation of `[0, n)`.
///
/// Useful for visiting data in random order without moving it.
pub fn shuffled_indices<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<usize> {
    index::sample(rng, n, n).into_vec()
}

/// Uniformly chosen element, or `None` for an empty slice.
pub fn choose<'a, T, R: Rng + ?Sized>(slice: &'a [T], rng: &mut R) -> Option<&'a T> {
    slice.choose(rng)
}

/// Removes and returns a uniformly chosen element, or `None` when empty.
///
/// The remaining elements keep their relative order.
pub fn choose_remove<T, R: Rng + ?Sized>(values: &mut Vec<T>, rng: &mut R) -> Option<T> {
    let index = (0..values.len()).choose(rng)?;
    Some(values.remove(index))
}
