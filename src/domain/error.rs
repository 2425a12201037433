//! Errors raised by grid operations.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GridError {
    /// A dimension passed to a resize was negative.
    #[error("{name} must be non-negative, got {value}")]
    InvalidArgument { name: &'static str, value: isize },
    /// Coordinates cannot be wrapped onto a grid with no cells.
    #[error("cannot access ({x}, {y}) on a {width}x{height} grid")]
    OutOfRange {
        x: isize,
        y: isize,
        width: usize,
        height: usize,
    },
}
