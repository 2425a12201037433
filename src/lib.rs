// Domain layer - Grid storage, cell states and neighbor bookkeeping
pub mod domain;

// Application layer - Generation stepping, configuration and persistence
pub mod application;

// Re-exports for convenience
pub use application::{Simulation, SimulationConfig, SimulationState, StepReport};
pub use domain::{Cell, Grid, GridError, NeighborMode, Pattern, presets};
