use super::SimulationConfig;
use crate::domain::{Cell, Grid, GridError};
use rand::Rng;
use rayon::prelude::*;
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimulationState {
    /// The last step changed something; more steps may keep changing it
    Running,
    /// The population is extinct or reached a fixed point
    Stable,
}

/// What a single generation did
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepReport {
    pub generation: u64,
    pub changed: usize,
    pub alive: usize,
    pub stable: bool,
}

/// Simulation owns a grid and advances it one generation at a time.
///
/// A step runs in two phases. The mark phase evaluates every cell against the
/// current neighbor counts and writes `PendingAlive`/`PendingDead` marks, which
/// leave effective alive status untouched, so the order cells are visited in
/// does not matter. The commit phase then resolves the marks one by one.
pub struct Simulation {
    grid: Grid,
    is_stable: bool,
    generation: u64,
    parallel: bool,
}

impl Simulation {
    /// Create a simulation over an all-dead grid
    pub fn new(width: usize, height: usize) -> Self {
        Self::from_grid(Grid::new(width, height))
    }

    pub fn from_grid(grid: Grid) -> Self {
        Self {
            grid,
            is_stable: true,
            generation: 0,
            parallel: false,
        }
    }

    pub fn from_config(config: &SimulationConfig) -> Self {
        Self::from_grid(Grid::with_mode(config.width, config.height, config.neighbor_mode))
            .with_parallel(config.parallel)
    }

    /// Evaluate the mark phase with rayon (builder pattern)
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Direct access for editing cells between steps
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub const fn is_stable(&self) -> bool {
        self.is_stable
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }

    pub const fn is_parallel(&self) -> bool {
        self.parallel
    }

    pub const fn state(&self) -> SimulationState {
        if self.is_stable {
            SimulationState::Stable
        } else {
            SimulationState::Running
        }
    }

    /// Advance one generation
    pub fn step(&mut self) -> StepReport {
        let changed = if self.parallel {
            self.mark_parallel()
        } else {
            self.mark_serial()
        };
        self.grid.commit();
        self.generation += 1;

        let alive = self.grid.alive_count();
        self.is_stable = alive == 0 || changed == 0;

        debug!(
            generation = self.generation,
            changed,
            alive,
            stable = self.is_stable,
            "step"
        );

        StepReport {
            generation: self.generation,
            changed,
            alive,
            stable: self.is_stable,
        }
    }

    fn mark_serial(&mut self) -> usize {
        let mut changed = 0;
        for idx in 0..self.grid.len() {
            let cell = self.grid.cell_at_index(idx);
            if let Some(mark) = cell.transition(self.grid.neighbors_at_index(idx)) {
                self.grid.set_index(idx, mark);
                changed += 1;
            }
        }
        changed
    }

    /// Evaluate every cell across threads, then apply the marks on this thread
    fn mark_parallel(&mut self) -> usize {
        let grid = &self.grid;
        let marks: Vec<(usize, Cell)> = (0..grid.len())
            .into_par_iter()
            .filter_map(|idx| {
                grid.cell_at_index(idx)
                    .transition(grid.neighbors_at_index(idx))
                    .map(|mark| (idx, mark))
            })
            .collect();

        let changed = marks.len();
        for (idx, mark) in marks {
            self.grid.set_index(idx, mark);
        }
        changed
    }

    /// Step until the population is stable or `max_generations` steps ran.
    /// Returns the number of steps taken.
    pub fn run(&mut self, max_generations: u64) -> u64 {
        let mut steps = 0;
        while steps < max_generations {
            steps += 1;
            if self.step().stable {
                break;
            }
        }
        steps
    }

    /// Clear grid and reset generation counter
    pub fn clear(&mut self) {
        self.grid.clear();
        self.generation = 0;
    }

    /// Randomize grid and reset generation counter
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.grid.randomize(rng);
        self.generation = 0;
    }

    /// Resize grid and reset generation counter
    pub fn resize(&mut self, width: isize, height: isize) -> Result<(), GridError> {
        self.grid.resize(width, height)?;
        self.generation = 0;
        Ok(())
    }
}
