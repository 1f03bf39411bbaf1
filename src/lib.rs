//! Simulated annealing for the Euclidean travelling salesman problem.
//!
//! Finds a short open path through a set of points in 2D, 3D, or any other
//! fixed dimension:
//!
//! - [`geometry`]: `Point<D>` and the distance [`Metric`](geometry::Metric)
//!   (Euclidean by default).
//! - [`tour`]: path scoring and the element-swap neighbourhood move.
//! - [`sa`]: Metropolis acceptance, pluggable cooling schedules, the run
//!   configuration and the annealing loop.
//! - [`points`]: uniform and clustered initial point sets.
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use u_anneal_tsp::points::random_points;
//! use u_anneal_tsp::sa::{CoolingSchedule, SaConfig, SaRunner};
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//! let path = random_points(20, [100, 100], &mut rng).unwrap();
//!
//! let config = SaConfig::default()
//!     .with_initial_temperature(100.0)
//!     .with_termination_threshold(0.0)
//!     .with_cooling(CoolingSchedule::Linear { rate: 0.01 })
//!     .with_seed(42);
//!
//! let result = SaRunner::run(path, &config).unwrap();
//! assert_eq!(result.path.len(), 20);
//! assert!(result.best_cost <= result.initial_cost);
//! ```
//!
//! # Architecture
//!
//! The loop is single-threaded and owns the current path outright. Each
//! candidate is a fresh copy, so a rejected move never touches the
//! accepted state and the run can be interrupted between any two
//! iterations.

pub mod error;
pub mod geometry;
pub mod points;
pub mod sa;
pub mod tour;

pub use error::{AnnealError, AnnealResult};
