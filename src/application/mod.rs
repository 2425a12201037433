mod config;
mod simulation;
pub mod snapshot;

pub use config::SimulationConfig;
pub use simulation::{Simulation, SimulationState, StepReport};
pub use snapshot::{FormatError, Snapshot, SnapshotError};
