//! SA execution loop.

use super::acceptance::metropolis;
use super::config::SaConfig;
use super::schedule::Schedule;
use super::types::Transition;
use crate::error::{AnnealError, AnnealResult};
use crate::geometry::{Euclidean, Metric, Point};
use crate::tour::{random_indices, score_with, swap_positions, Path};
use log::{debug, info, trace, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Result of an annealing run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SaResult<const D: usize> {
    /// The accepted path when the loop stopped.
    pub path: Path<D>,

    /// Cost of `path`.
    pub cost: f64,

    /// The cheapest path accepted at any point of the run.
    pub best: Path<D>,

    /// Cost of `best`.
    pub best_cost: f64,

    /// Cost of the initial path.
    pub initial_cost: f64,

    /// Total number of iterations (candidate evaluations).
    pub iterations: usize,

    /// Temperature when the loop stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,

    /// Whether cancelled externally.
    pub cancelled: bool,

    /// Best cost sampled every `history_interval` iterations.
    pub cost_history: Vec<f64>,
}

/// Executes simulated annealing over a tour.
///
/// # Examples
///
/// ```
/// use u_anneal_tsp::geometry::Point2;
/// use u_anneal_tsp::sa::{CoolingSchedule, SaConfig, SaRunner};
///
/// let path = vec![
///     Point2::new([0.0, 0.0]),
///     Point2::new([1.0, 1.0]),
///     Point2::new([1.0, 0.0]),
///     Point2::new([0.0, 1.0]),
/// ];
/// let config = SaConfig::default()
///     .with_initial_temperature(100.0)
///     .with_termination_threshold(0.0)
///     .with_cooling(CoolingSchedule::Linear { rate: 1.0 })
///     .with_seed(7);
///
/// let result = SaRunner::run(path, &config).unwrap();
/// assert_eq!(result.iterations, 100);
/// assert!(result.best_cost <= result.initial_cost);
/// ```
pub struct SaRunner;

impl SaRunner {
    /// Runs SA with the Euclidean metric and the configured schedule.
    pub fn run<const D: usize>(initial: Path<D>, config: &SaConfig) -> AnnealResult<SaResult<D>> {
        Self::run_with_cancel(initial, config, None)
    }

    /// Runs SA with an optional cancellation token.
    ///
    /// The flag is checked between iterations; a cancelled run returns the
    /// last committed path.
    pub fn run_with_cancel<const D: usize>(
        initial: Path<D>,
        config: &SaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> AnnealResult<SaResult<D>> {
        let mut rng = create_rng(config.seed);
        Self::run_with(
            initial,
            config,
            &Euclidean,
            &config.cooling,
            &mut rng,
            &mut ignore_transition::<D>,
            cancel.as_deref(),
        )
    }

    /// Runs SA and reports every accepted move to `observer`.
    pub fn run_with_observer<const D: usize, F>(
        initial: Path<D>,
        config: &SaConfig,
        mut observer: F,
    ) -> AnnealResult<SaResult<D>>
    where
        F: FnMut(&Transition<'_, D>),
    {
        let mut rng = create_rng(config.seed);
        Self::run_with(
            initial,
            config,
            &Euclidean,
            &config.cooling,
            &mut rng,
            &mut observer,
            None,
        )
    }

    /// Runs SA with every collaborator injected.
    ///
    /// `schedule` replaces `config.cooling`; `config.seed` is ignored in
    /// favour of `rng`. A custom schedule must fall to the termination
    /// threshold eventually unless `config.max_iterations` bounds the run.
    ///
    /// # Errors
    ///
    /// Fails before any iteration if the configuration is invalid, the path
    /// has fewer than two points, or a point has a non-finite coordinate.
    pub fn run_with<const D: usize, M, S, R, F>(
        initial: Path<D>,
        config: &SaConfig,
        metric: &M,
        schedule: &S,
        rng: &mut R,
        observer: &mut F,
        cancel: Option<&AtomicBool>,
    ) -> AnnealResult<SaResult<D>>
    where
        M: Metric<D> + ?Sized,
        S: Schedule + ?Sized,
        R: Rng + ?Sized,
        F: FnMut(&Transition<'_, D>),
    {
        config.validate()?;
        validate_path(&initial)?;

        let n = initial.len();
        let initial_cost = score_with(&initial, metric);
        let mut current = initial;
        let mut current_cost = initial_cost;
        let mut best = current.clone();
        let mut best_cost = current_cost;

        let mut temperature = schedule.temperature_at(config.initial_temperature, 0);
        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut cancelled = false;

        let mut cost_history = Vec::new();
        cost_history.push(best_cost);

        debug!(
            "annealing {n} points in {D}D: schedule={}, T0={}, threshold={}, budget={}, cost={initial_cost:.4}",
            schedule.name(),
            config.initial_temperature,
            config.termination_threshold,
            config.max_iterations,
        );

        // Swapping two points of a two-point open path is a no-op or a
        // reversal, and neither changes the cost.
        if n == 2 {
            debug!("two-point path, nothing to anneal");
            return Ok(SaResult {
                path: current,
                cost: current_cost,
                best,
                best_cost,
                initial_cost,
                iterations,
                final_temperature: temperature,
                accepted_moves,
                improving_moves,
                cancelled,
                cost_history,
            });
        }

        while temperature > config.termination_threshold {
            if config.max_iterations > 0 && iterations >= config.max_iterations {
                break;
            }
            if let Some(flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            let (i, j) = random_indices(n, rng);

            // Equal indices give an unchanged copy: no evaluation, no frame.
            if i != j {
                let candidate = swap_positions(&current, i, j);
                let candidate_cost = score_with(&candidate, metric);
                let delta = candidate_cost - current_cost;

                if metropolis(delta, temperature, rng) {
                    current = candidate;
                    current_cost = candidate_cost;
                    accepted_moves += 1;
                    if delta < 0.0 {
                        improving_moves += 1;
                    }

                    if current_cost < best_cost {
                        best = current.clone();
                        best_cost = current_cost;
                    }

                    trace!(
                        "iter {iterations}: swap({i}, {j}) accepted, delta={delta:.4}, cost={current_cost:.4}, T={temperature:.4}"
                    );
                    observer(&Transition {
                        frame: accepted_moves,
                        iteration: iterations,
                        temperature,
                        delta,
                        cost: current_cost,
                        path: current.as_slice(),
                    });
                }
            }

            iterations += 1;

            if iterations.is_multiple_of(config.history_interval) {
                cost_history.push(best_cost);
            }

            temperature = schedule.temperature_at(config.initial_temperature, iterations);
        }

        if cost_history
            .last()
            .is_none_or(|&last| (last - best_cost).abs() > 1e-15)
        {
            cost_history.push(best_cost);
        }

        if cancelled {
            warn!("annealing cancelled after {iterations} iterations");
        }
        info!(
            "annealing finished: {iterations} iterations, {accepted_moves} accepted ({improving_moves} improving), cost {initial_cost:.4} -> {current_cost:.4}, best {best_cost:.4}, T={temperature:.6}"
        );

        Ok(SaResult {
            path: current,
            cost: current_cost,
            best,
            best_cost,
            initial_cost,
            iterations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            cancelled,
            cost_history,
        })
    }
}

fn ignore_transition<const D: usize>(_: &Transition<'_, D>) {}

/// Seeded RNG when a seed is configured, entropy-seeded otherwise.
fn create_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(rand::random()),
    }
}

fn validate_path<const D: usize>(path: &[Point<D>]) -> AnnealResult<()> {
    if path.len() < 2 {
        return Err(AnnealError::PathTooShort { len: path.len() });
    }
    if let Some(index) = path.iter().position(|p| !p.is_finite()) {
        return Err(AnnealError::NonFiniteCoordinate { index });
    }
    Ok(())
}
