//! Presentation Randomizer.
//!
//! Curated feeds reorder their final candidate set on every call so users
//! see variety even though scoring is deterministic. The random source is
//! a parameter; production passes the thread-local generator and tests
//! pass a seeded `StdRng`. It need not be cryptographically secure.

use rand::Rng;

/// In-place Fisher–Yates shuffle. Every permutation is equally likely
/// given a uniform `rng`.
pub fn fisher_yates<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

/// Shuffle the whole set, then keep the first `limit` items.
pub fn shuffle_and_truncate<T, R: Rng + ?Sized>(
    mut items: Vec<T>,
    limit: usize,
    rng: &mut R,
) -> Vec<T> {
    fisher_yates(&mut items, rng);
    items.truncate(limit);
    items
}
