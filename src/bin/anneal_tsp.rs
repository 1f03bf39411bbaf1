//! Anneal TSP - Command Line Interface
//!
//! Generates a random (or clustered) point set, anneals a tour through it
//! and reports the result. The final tour can be written as JSON for an
//! external plotting tool.

use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use u_anneal_tsp::geometry::Point;
use u_anneal_tsp::points::{point_clusters, random_points, shuffle_path};
use u_anneal_tsp::sa::{CoolingSchedule, SaConfig, SaResult, SaRunner};

use std::error::Error;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "anneal_tsp")]
#[command(version)]
#[command(about = "Approximate a short open tour through random points by simulated annealing")]
struct Cli {
    /// Dimensionality of the points
    #[arg(short, long, default_value = "2", value_parser = clap::value_parser!(u8).range(2..=3))]
    dims: u8,

    /// Number of uniformly random points
    #[arg(short = 'n', long, default_value = "20")]
    points: usize,

    /// Size of the space along every axis
    #[arg(short, long, default_value = "100")]
    extent: u32,

    /// Use three clusters of ten points instead of uniform points
    #[arg(long, conflicts_with_all = ["points", "extent"])]
    clusters: bool,

    /// Cooling schedule
    #[arg(long, value_enum, default_value = "reciprocal")]
    schedule: ScheduleKind,

    /// Initial temperature
    #[arg(short = 't', long, default_value = "100")]
    initial_temperature: f64,

    /// Temperature decrement per iteration (linear schedule)
    #[arg(long, default_value = "0.001")]
    rate: f64,

    /// Cooling factor (geometric schedule)
    #[arg(long, default_value = "0.999")]
    alpha: f64,

    /// Stop once the temperature is at or below this value
    /// [default: 0 for linear, 0.05 otherwise]
    #[arg(long)]
    threshold: Option<f64>,

    /// Hard iteration budget, 0 for none
    #[arg(long, default_value = "0")]
    max_iterations: usize,

    /// Random seed for point generation and annealing
    #[arg(short, long)]
    seed: Option<u64>,

    /// Write the run configuration and result as JSON
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
enum ScheduleKind {
    /// Subtract a fixed rate every iteration
    Linear,
    /// T0 / (1 + k)
    Reciprocal,
    /// Multiply by alpha every iteration
    Geometric,
}

#[derive(Serialize)]
struct Report<'a, const D: usize> {
    config: &'a SaConfig,
    result: &'a SaResult<D>,
}

/// Cluster centers used with `--clusters`; 2D runs drop the last axis.
const CLUSTER_CENTERS: [[f64; 3]; 3] = [[20.0, 20.0, 20.0], [20.0, 80.0, 20.0], [80.0, 80.0, 80.0]];
const CLUSTER_SIZE: usize = 10;
const CLUSTER_EXTENT: u32 = 20;

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let outcome = match cli.dims {
        2 => run::<2>(&cli),
        _ => run::<3>(&cli),
    };
    if let Err(e) = outcome {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn build_config(cli: &Cli) -> SaConfig {
    let cooling = match cli.schedule {
        ScheduleKind::Linear => CoolingSchedule::Linear { rate: cli.rate },
        ScheduleKind::Reciprocal => CoolingSchedule::Reciprocal,
        ScheduleKind::Geometric => CoolingSchedule::Geometric { alpha: cli.alpha },
    };
    let threshold = cli.threshold.unwrap_or(match cli.schedule {
        ScheduleKind::Linear => 0.0,
        _ => 0.05,
    });

    let mut config = SaConfig::default()
        .with_initial_temperature(cli.initial_temperature)
        .with_termination_threshold(threshold)
        .with_cooling(cooling)
        .with_max_iterations(cli.max_iterations);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    config
}

fn run<const D: usize>(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let config = build_config(cli);
    config.validate()?;

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(rand::random()),
    };

    let path = if cli.clusters {
        let centers: Vec<Point<D>> = CLUSTER_CENTERS
            .iter()
            .map(|c| {
                let mut coords = [0.0; D];
                coords.copy_from_slice(&c[..D]);
                Point::new(coords)
            })
            .collect();
        let mut path = point_clusters(&centers, CLUSTER_SIZE, [CLUSTER_EXTENT; D], &mut rng)?;
        // Clusters come out grouped, which is already a decent tour.
        shuffle_path(&mut path, &mut rng);
        path
    } else {
        random_points(cli.points, [cli.extent; D], &mut rng)?
    };

    log::info!(
        "Annealing {} points in {}D with {:?} cooling",
        path.len(),
        D,
        config.cooling
    );

    let start = Instant::now();
    let result = SaRunner::run(path, &config)?;
    let elapsed = start.elapsed();

    println!("Initial cost: {:.2}", result.initial_cost);
    println!("Final cost:   {:.2}", result.cost);
    println!("Best cost:    {:.2}", result.best_cost);
    println!(
        "Iterations:   {} ({} accepted, {} improving)",
        result.iterations, result.accepted_moves, result.improving_moves
    );
    println!("Time:         {:.3}s", elapsed.as_secs_f64());

    if let Some(out_path) = &cli.output {
        let report = Report {
            config: &config,
            result: &result,
        };
        let json = serde_json::to_string_pretty(&report)?;
        std::fs::write(out_path, json)?;
        println!("\nResult saved to {:?}", out_path);
    }

    Ok(())
}
