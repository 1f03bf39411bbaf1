//! Tour representation, cost and neighbourhood move.
//!
//! A tour is an open path: the cost runs from the first point to the last
//! and no return leg is added.

mod perturb;
mod score;

pub use perturb::{random_indices, swap_positions};
pub use score::{score, score_with};

use crate::geometry::Point;

/// An ordered visiting sequence over points of dimension `D`.
pub type Path<const D: usize> = Vec<Point<D>>;
