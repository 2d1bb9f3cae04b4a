//! Uniform selection and sampling without replacement.

use rand::Rng;

/// Picks a uniformly random index in `0..length`, or `None` when empty.
#[inline]
pub fn pick_index<R>(length: usize, rng: &mut R) -> Option<usize>
where
    R: Rng + ?Sized,
{
    (length > 0).then(|| rng.random_range(0..length))
}

/// Draws up to `amount` items from `pool` without replacement.
///
/// Each draw picks a uniformly random remaining item and removes it from the
/// pool, so the result holds distinct pool slots in draw order.
pub fn draw_without_replacement<T, R>(mut pool: Vec<T>, amount: usize, rng: &mut R) -> Vec<T>
where
    R: Rng + ?Sized,
{
    let count = amount.min(pool.len());
    let mut drawn = Vec::with_capacity(count);
    while drawn.len() < count {
        let index = rng.random_range(0..pool.len());
        drawn.push(pool.swap_remove(index));
    }
    tracing::trace!(requested = amount, drawn = count, "sampled without replacement");
    drawn
}
