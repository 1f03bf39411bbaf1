//! Open-path tour cost.

use crate::geometry::{Euclidean, Metric, Point};

/// Euclidean length of the open path through `path`.
///
/// Returns 0 for paths with fewer than two points.
///
/// # Examples
///
/// ```
/// use u_anneal_tsp::geometry::Point2;
/// use u_anneal_tsp::tour::score;
///
/// let path = [
///     Point2::new([0.0, 0.0]),
///     Point2::new([0.0, 1.0]),
///     Point2::new([1.0, 1.0]),
/// ];
/// assert!((score(&path) - 2.0).abs() < 1e-12);
/// ```
pub fn score<const D: usize>(path: &[Point<D>]) -> f64 {
    score_with(path, &Euclidean)
}

/// Sum of `metric` distances between consecutive points of `path`.
pub fn score_with<const D: usize, M: Metric<D> + ?Sized>(path: &[Point<D>], metric: &M) -> f64 {
    path.windows(2)
        .map(|w| metric.distance(&w[0], &w[1]))
        .sum()
}
