//! Element-swap neighbourhood move.

use rand::Rng;

/// Returns a copy of `path` with the elements at `i` and `j` exchanged.
///
/// The input is never mutated, so a rejected candidate can be dropped
/// without touching the accepted state. `i == j` yields an equal copy.
///
/// # Panics
///
/// Panics if `i` or `j` is out of bounds.
///
/// # Examples
///
/// ```
/// use u_anneal_tsp::tour::swap_positions;
///
/// let path = vec!['a', 'b', 'c', 'd'];
/// assert_eq!(swap_positions(&path, 0, 2), vec!['c', 'b', 'a', 'd']);
/// assert_eq!(path, vec!['a', 'b', 'c', 'd']);
/// ```
pub fn swap_positions<T: Clone>(path: &[T], i: usize, j: usize) -> Vec<T> {
    let mut candidate = path.to_vec();
    candidate.swap(i, j);
    candidate
}

/// Draws two indices uniformly from `0..len`, independently and with
/// replacement (they may coincide).
///
/// # Panics
///
/// Panics if `len == 0`.
pub fn random_indices<R: Rng + ?Sized>(len: usize, rng: &mut R) -> (usize, usize) {
    (rng.random_range(0..len), rng.random_range(0..len))
}
