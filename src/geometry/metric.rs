//! Distance metrics between points.

use super::point::Point;

/// A symmetric pairwise cost between two points of the same dimension.
///
/// Implementations must satisfy `distance(a, b) == distance(b, a)` and
/// `distance(a, a) == 0`. The annealing loop relies on symmetry: reversing
/// a path never changes its cost.
pub trait Metric<const D: usize> {
    /// Cost of moving from `a` to `b`.
    fn distance(&self, a: &Point<D>, b: &Point<D>) -> f64;
}

/// Straight-line (L2) distance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Euclidean;

impl<const D: usize> Metric<D> for Euclidean {
    #[inline]
    fn distance(&self, a: &Point<D>, b: &Point<D>) -> f64 {
        a.coords()
            .iter()
            .zip(b.coords().iter())
            .map(|(x, y)| {
                let diff = x - y;
                diff * diff
            })
            .sum::<f64>()
            .sqrt()
    }
}

/// Euclidean distance between two points.
///
/// # Examples
///
/// ```
/// use u_anneal_tsp::geometry::{dist, Point2};
///
/// let d = dist(&Point2::new([0.0, 0.0]), &Point2::new([3.0, 4.0]));
/// assert!((d - 5.0).abs() < 1e-12);
/// ```
#[inline]
pub fn dist<const D: usize>(a: &Point<D>, b: &Point<D>) -> f64 {
    Euclidean.distance(a, b)
}
