use crate::domain::NeighborMode;
use rand::{SeedableRng, rngs::StdRng};

/// Settings for building a `Simulation`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationConfig {
    pub width: usize,
    pub height: usize,
    pub neighbor_mode: NeighborMode,
    /// Evaluate the mark pass across threads with rayon
    pub parallel: bool,
    /// Seed for the random fill; `None` draws from the thread-local generator
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width: 64,
            height: 64,
            neighbor_mode: NeighborMode::default(),
            parallel: false,
            seed: None,
        }
    }
}

impl SimulationConfig {
    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_neighbor_mode(mut self, mode: NeighborMode) -> Self {
        self.neighbor_mode = mode;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Random generator for filling the grid, reproducible when a seed is set
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
