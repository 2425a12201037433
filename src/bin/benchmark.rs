//! Performance benchmark comparing neighbor-count modes and step strategies

use rand::{SeedableRng, rngs::StdRng};
use std::time::Instant;
use toroidal_life::{Grid, NeighborMode, Simulation};

const SEED: u64 = 0x11fe;

fn benchmark_step(size: usize, mode: NeighborMode, parallel: bool, iterations: u32) -> f64 {
    let mut grid = Grid::with_mode(size, size, mode);
    grid.randomize(&mut StdRng::seed_from_u64(SEED));
    let mut sim = Simulation::from_grid(grid).with_parallel(parallel);

    let start = Instant::now();
    for _ in 0..iterations {
        sim.step();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Toroidal Life Step Benchmark ===\n");

    let sizes = [100, 250, 500, 1000, 2000];
    let iterations = 20;

    println!(
        "{:>10} {:>14} {:>14} {:>14} {:>14} {:>10}",
        "Size", "Incremental", "Incr+Par", "Recount", "Recount+Par", "Speedup"
    );
    println!("{:-<82}", "");

    for size in sizes {
        let incremental_ms = benchmark_step(size, NeighborMode::Incremental, false, iterations);
        let incremental_par_ms = benchmark_step(size, NeighborMode::Incremental, true, iterations);
        let recount_ms = benchmark_step(size, NeighborMode::Recount, false, iterations);
        let recount_par_ms = benchmark_step(size, NeighborMode::Recount, true, iterations);

        let fastest = incremental_ms.min(incremental_par_ms).min(recount_par_ms);

        println!(
            "{:>10} {:>14.2} {:>14.2} {:>14.2} {:>14.2} {:>9.1}x",
            format!("{}x{}", size, size),
            incremental_ms,
            incremental_par_ms,
            recount_ms,
            recount_par_ms,
            recount_ms / fastest
        );
    }

    println!("\n=== Memory Usage (2000x2000) ===\n");

    let cells = 2000 * 2000;
    let cell_bytes = cells * std::mem::size_of::<toroidal_life::Cell>();
    let count_bytes = cells * std::mem::size_of::<u8>();

    for mode in NeighborMode::all() {
        let bytes = match mode {
            NeighborMode::Incremental => cell_bytes + count_bytes,
            NeighborMode::Recount => cell_bytes,
        };
        println!(
            "{:<12} {:>10} bytes ({:.1} MB)  {}",
            mode.name(),
            bytes,
            bytes as f64 / 1_000_000.0,
            mode.description()
        );
    }
}
