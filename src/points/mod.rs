//! Initial tour generation.
//!
//! Produces uniformly scattered points or points grouped around cluster
//! centers. Coordinates are drawn on the integer grid `0..extent` per axis.

use crate::error::{AnnealError, AnnealResult};
use crate::geometry::Point;
use crate::tour::Path;
use rand::seq::SliceRandom;
use rand::Rng;

/// Creates `n` points with integer coordinates drawn uniformly from
/// `0..extents[axis]` on each axis.
///
/// # Errors
///
/// Returns [`AnnealError::InvalidParameter`] if any extent is zero.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use u_anneal_tsp::points::random_points;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(1);
/// let points = random_points(20, [100, 100], &mut rng).unwrap();
/// assert_eq!(points.len(), 20);
/// assert!(points.iter().all(|p| p.coord(0) < 100.0 && p.coord(1) < 100.0));
/// ```
pub fn random_points<const D: usize, R: Rng + ?Sized>(
    n: usize,
    extents: [u32; D],
    rng: &mut R,
) -> AnnealResult<Path<D>> {
    check_extents(&extents)?;
    Ok((0..n).map(|_| sample(&extents, rng)).collect())
}

/// Creates `per_cluster` random points around each of `centers`.
///
/// Each cluster is a set of [`random_points`] offset by its center, so it
/// spans `center..center + extents`. The output is grouped by cluster in
/// the order of `centers`; use [`shuffle_path`] before annealing to avoid
/// starting from an already well-ordered tour.
pub fn point_clusters<const D: usize, R: Rng + ?Sized>(
    centers: &[Point<D>],
    per_cluster: usize,
    extents: [u32; D],
    rng: &mut R,
) -> AnnealResult<Path<D>> {
    check_extents(&extents)?;
    let mut points = Vec::with_capacity(centers.len() * per_cluster);
    for center in centers {
        points.extend((0..per_cluster).map(|_| sample(&extents, rng).offset(center)));
    }
    Ok(points)
}

/// Shuffles a path in place into a uniformly random visiting order.
pub fn shuffle_path<const D: usize, R: Rng + ?Sized>(path: &mut [Point<D>], rng: &mut R) {
    path.shuffle(rng);
}

fn sample<const D: usize, R: Rng + ?Sized>(extents: &[u32; D], rng: &mut R) -> Point<D> {
    let mut coords = [0.0; D];
    for (c, &extent) in coords.iter_mut().zip(extents.iter()) {
        *c = f64::from(rng.random_range(0..extent));
    }
    Point::new(coords)
}

fn check_extents<const D: usize>(extents: &[u32; D]) -> AnnealResult<()> {
    if let Some(axis) = extents.iter().position(|&e| e == 0) {
        return Err(AnnealError::invalid(
            "extents",
            format!("extent on axis {axis} must be positive"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point3;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_points_on_grid() {
        let mut rng = StdRng::seed_from_u64(42);
        let points = random_points(500, [10, 20, 30], &mut rng).unwrap();
        assert_eq!(points.len(), 500);
        for p in &points {
            for (axis, limit) in [10.0, 20.0, 30.0].iter().enumerate() {
                let c = p.coord(axis);
                assert!(c >= 0.0 && c < *limit);
                assert_eq!(c.fract(), 0.0);
            }
        }
    }

    #[test]
    fn test_random_points_zero_extent() {
        let mut rng = StdRng::seed_from_u64(42);
        assert!(random_points(5, [10, 0], &mut rng).is_err());
    }

    #[test]
    fn test_random_points_empty() {
        let mut rng = StdRng::seed_from_u64(42);
        assert!(random_points::<2, _>(0, [10, 10], &mut rng)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_point_clusters_grouped_by_center() {
        let mut rng = StdRng::seed_from_u64(7);
        let centers = [
            Point3::new([20.0, 20.0, 20.0]),
            Point3::new([20.0, 80.0, 20.0]),
            Point3::new([80.0, 80.0, 80.0]),
        ];
        let points = point_clusters(&centers, 10, [20, 20, 20], &mut rng).unwrap();
        assert_eq!(points.len(), 30);

        for (cluster, center) in points.chunks(10).zip(centers.iter()) {
            for p in cluster {
                for axis in 0..3 {
                    let rel = p.coord(axis) - center.coord(axis);
                    assert!((0.0..20.0).contains(&rel));
                }
            }
        }
    }

    #[test]
    fn test_shuffle_preserves_points() {
        let mut rng = StdRng::seed_from_u64(3);
        let original = random_points(50, [1000, 1000], &mut rng).unwrap();
        let mut shuffled = original.clone();
        shuffle_path(&mut shuffled, &mut rng);

        let key = |p: &Point<2>| (p.coord(0) as i64, p.coord(1) as i64);
        let mut a: Vec<_> = original.iter().map(key).collect();
        let mut b: Vec<_> = shuffled.iter().map(key).collect();
        a.sort_unstable();
        b.sort_unstable();
        assert_eq!(a, b);
    }
}
