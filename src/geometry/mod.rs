//! Points in a fixed-dimensional real space and the distances between them.
//!
//! Dimensionality is a const generic, so 2D and 3D tours share one
//! implementation of the metric, the scorer and the annealing loop.

mod metric;
mod point;

pub use metric::{dist, Euclidean, Metric};
pub use point::{Point, Point2, Point3};
