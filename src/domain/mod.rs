mod cell;
mod error;
mod grid;
mod neighbor_mode;
mod patterns;

pub use cell::Cell;
pub use error::GridError;
pub use grid::Grid;
pub use neighbor_mode::NeighborMode;
pub use patterns::{Pattern, presets};
