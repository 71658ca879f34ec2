// error.rs - Error kinds for grid construction and coordinate access

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifeError {
    /// A coordinate outside `0..size` on either axis, or a border cell where
    /// an interior one was required.
    #[error("cell ({x}, {y}) is out of range for a {size}x{size} grid")]
    IndexOutOfRange { x: usize, y: usize, size: usize },

    #[error("grid size {size} is too small, need at least {min} to have an interior")]
    GridTooSmall { size: usize, min: usize },

    #[error("could not allocate a grid buffer of {cells} cells")]
    Allocation { cells: usize },
}

pub type Result<T> = std::result::Result<T, LifeError>;
