// src/utils/shuffle.rs

use rand::{Rng, seq::SliceRandom};

/// Shuffles `items` with `rng` and keeps the first `count` of them.
/// A negative count yields nothing.
pub fn shuffle_take<T, R: Rng + ?Sized>(mut items: Vec<T>, count: i64, rng: &mut R) -> Vec<T> {
    items.shuffle(rng);
    items.truncate(count.max(0) as usize);
    items
}
