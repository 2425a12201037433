use clap::Parser;
use std::{path::PathBuf, process::ExitCode, time::Instant};
use thiserror::Error;
use toroidal_life::{
    GridError, NeighborMode, Simulation, SimulationConfig,
    application::{SnapshotError, snapshot},
    presets,
};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

/// Run Conway's Game of Life on a toroidal grid until it settles
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Grid width in cells
    #[arg(long, default_value_t = 64)]
    width: usize,

    /// Grid height in cells
    #[arg(long, default_value_t = 64)]
    height: usize,

    /// Neighbor counting: incremental or recount
    #[arg(long, default_value = "incremental", value_parser = parse_mode)]
    mode: NeighborMode,

    /// Evaluate each generation across threads
    #[arg(long)]
    parallel: bool,

    /// Seed for the random fill
    #[arg(long)]
    seed: Option<u64>,

    /// Start from a preset pattern placed in the middle of the grid
    #[arg(long, conflicts_with = "input")]
    pattern: Option<String>,

    /// Start from a snapshot file of 0/1 rows; overrides width and height
    #[arg(long)]
    input: Option<PathBuf>,

    /// Write the final grid to this file
    #[arg(long)]
    output: Option<PathBuf>,

    /// Stop after this many generations even if the grid is still changing
    #[arg(long, default_value_t = 1000)]
    generations: u64,

    /// Print the final grid to stdout
    #[arg(long)]
    print: bool,
}

impl Args {
    fn config(&self) -> SimulationConfig {
        SimulationConfig::default()
            .with_size(self.width, self.height)
            .with_neighbor_mode(self.mode)
            .with_parallel(self.parallel)
            .with_seed(self.seed)
    }
}

fn parse_mode(name: &str) -> Result<NeighborMode, String> {
    NeighborMode::from_name(name).ok_or_else(|| {
        let known: Vec<_> = NeighborMode::all().iter().map(|mode| mode.name()).collect();
        format!("unknown mode {name:?}, expected one of: {}", known.join(", "))
    })
}

#[derive(Debug, Error)]
enum RunError {
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error("unknown pattern {0:?}")]
    UnknownPattern(String),
}

fn run(args: &Args) -> Result<(), RunError> {
    let config = args.config();
    let mut sim = Simulation::from_config(&config);

    if let Some(path) = &args.input {
        snapshot::read_file(path)?.apply_to(sim.grid_mut())?;
    } else if let Some(name) = &args.pattern {
        let pattern =
            presets::find(name).ok_or_else(|| RunError::UnknownPattern(name.clone()))?;
        pattern.place_centered(sim.grid_mut())?;
    } else {
        sim.randomize(&mut config.rng());
    }

    let (width, height) = sim.grid().dimensions();
    info!(
        width,
        height,
        mode = config.neighbor_mode.name(),
        parallel = config.parallel,
        alive = sim.grid().alive_count(),
        "starting simulation"
    );

    for _ in 0..args.generations {
        let start = Instant::now();
        let report = sim.step();
        debug!(
            generation = report.generation,
            elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
            "generation timing"
        );
        if report.stable {
            info!(
                generation = report.generation,
                alive = report.alive,
                "population is stable"
            );
            break;
        }
    }
    if !sim.is_stable() {
        info!(generation = sim.generation(), alive = sim.grid().alive_count(), "generation limit reached");
    }

    if args.print {
        print!("{}", snapshot::encode(sim.grid()));
    }
    if let Some(path) = &args.output {
        snapshot::write_file(path, sim.grid())?;
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
