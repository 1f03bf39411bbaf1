//! Simulated Annealing (SA) over tours.
//!
//! Each iteration swaps two randomly chosen positions of the current path,
//! rescores the candidate, and moves to it according to the Metropolis
//! criterion at the current temperature. The cooling schedule lowers the
//! temperature after every iteration until it falls to the configured
//! threshold, at which point the search has become a greedy descent.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast Computing Machines"

mod acceptance;
mod config;
mod runner;
mod schedule;
mod types;

pub use acceptance::{acceptance_probability, metropolis};
pub use config::SaConfig;
pub use runner::{SaResult, SaRunner};
pub use schedule::{CoolingSchedule, Schedule};
pub use types::Transition;
