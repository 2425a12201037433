//! Whole-pattern behavior over several generations.

use rand::{SeedableRng, rngs::StdRng};
use toroidal_life::{
    Grid, NeighborMode, Simulation, SimulationConfig, SimulationState,
    application::snapshot, presets,
};

fn simulation(w: usize, h: usize, mode: NeighborMode) -> Simulation {
    Simulation::from_config(&SimulationConfig::default().with_size(w, h).with_neighbor_mode(mode))
}

#[test]
fn period_two_oscillators_never_report_stable() {
    for mode in NeighborMode::all() {
        for pattern in [presets::blinker(), presets::toad(), presets::beacon()] {
            let mut sim = simulation(12, 12, mode);
            pattern.place_on(sim.grid_mut(), 4, 4).unwrap();

            for generation in 1..=10 {
                let report = sim.step();
                assert!(!report.stable, "{} stable at {generation}", pattern.name);
                assert_eq!(
                    pattern.matches_at(sim.grid(), 4, 4).unwrap(),
                    generation % 2 == 0,
                    "{} phase wrong at {generation}",
                    pattern.name
                );
            }
        }
    }
}

#[test]
fn lwss_moves_two_cells_every_four_generations() {
    let lwss = presets::lwss();
    let mut sim = simulation(24, 12, NeighborMode::Incremental);
    lwss.place_on(sim.grid_mut(), 12, 4).unwrap();

    for _ in 0..4 {
        sim.step();
    }
    assert!(lwss.matches_at(sim.grid(), 10, 4).unwrap());
}

#[test]
fn glider_returns_home_on_small_torus() {
    // Moving (+1, +1) every 4 generations, a glider on an 8x8 torus is back after 32.
    let glider = presets::glider();
    let mut sim = simulation(8, 8, NeighborMode::Recount).with_parallel(true);
    glider.place_on(sim.grid_mut(), 0, 0).unwrap();

    assert_eq!(sim.run(32), 32);
    assert_eq!(sim.state(), SimulationState::Running);
    assert!(glider.matches_at(sim.grid(), 0, 0).unwrap());
}

#[test]
fn snapshot_round_trip_mid_run() {
    let mut sim = Simulation::new(30, 20);
    sim.randomize(&mut StdRng::seed_from_u64(5));
    for _ in 0..7 {
        sim.step();
    }

    let text = snapshot::encode(sim.grid());
    let mut restored = Simulation::from_grid(Grid::new(1, 1));
    snapshot::load_into(restored.grid_mut(), &text).unwrap();
    assert_eq!(restored.grid().cells(), sim.grid().cells());

    for _ in 0..5 {
        assert_eq!(sim.step().changed, restored.step().changed);
    }
    assert_eq!(restored.grid().cells(), sim.grid().cells());
}

#[test]
fn randomized_soup_keeps_counts_consistent() {
    let config = SimulationConfig::default().with_size(16, 16).with_seed(Some(99));
    let mut sim = Simulation::from_config(&config);
    sim.randomize(&mut config.rng());

    let steps = sim.run(500);
    assert!(steps >= 1);
    assert_eq!(sim.generation(), steps);
    let alive = sim.grid().cells().iter().filter(|cell| cell.is_alive()).count();
    assert_eq!(sim.grid().alive_count(), alive);
}
